//! Fetch-then-append on top of a [`PersistentList`].

use crate::domain::{Fetch, Formatter, Identity, PersistentList, Store, TableResult};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{info, warn};

/// Appends formatted responses from `base_url` to a persisted list.
///
/// # Examples
///
/// ```no_run
/// use cardtable::application::RemoteAppender;
/// use cardtable::domain::{CardFormatter, PersistentList};
/// use cardtable::infrastructure::{HttpFetcher, MemoryStore, DEFAULT_BASE_URL};
///
/// # async fn demo() -> cardtable::domain::TableResult<()> {
/// let list = PersistentList::init("cards", MemoryStore::default())?;
/// let mut cards = RemoteAppender::new(DEFAULT_BASE_URL, HttpFetcher::new()?, list);
/// let card = cards.fetch_and_append(&CardFormatter, "").await?;
/// println!("drew {}", card.face());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RemoteAppender<T, F, S> {
    base_url: String,
    fetcher: F,
    list: PersistentList<T, S>,
}

impl<T, F, S> RemoteAppender<T, F, S>
where
    T: Serialize + DeserializeOwned,
    F: Fetch,
    S: Store,
{
    pub fn new(base_url: impl Into<String>, fetcher: F, list: PersistentList<T, S>) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
            list,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn list(&self) -> &PersistentList<T, S> {
        &self.list
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    /// GETs `base_url + path_suffix`, formats the body and appends it.
    ///
    /// On any failure the list is left unchanged.
    pub async fn fetch_and_append<M>(&mut self, formatter: &M, path_suffix: &str) -> TableResult<&T>
    where
        M: Formatter<T>,
    {
        let url = format!("{}{}", self.base_url, path_suffix);
        let raw = self.fetcher.get_json(&url).await.inspect_err(|e| {
            warn!(url = %url, error = %e, "fetch failed");
        })?;
        let item = formatter.format(raw)?;
        info!(url = %url, key = self.list.key(), "appending fetched item");
        self.list.append(item)
    }

    /// Issues one request per suffix at once and appends results as they
    /// resolve.
    ///
    /// Append order follows resolution order, not the order of
    /// `path_suffixes`. The first failure stops the batch; requests still in
    /// flight are dropped and items already appended are kept.
    ///
    /// Returns the number of items appended.
    pub async fn fetch_concurrently_and_append<M>(
        &mut self,
        formatter: &M,
        path_suffixes: &[&str],
    ) -> TableResult<usize>
    where
        M: Formatter<T>,
    {
        let fetcher = &self.fetcher;
        let list = &mut self.list;

        let mut pending: FuturesUnordered<_> = path_suffixes
            .iter()
            .map(|suffix| {
                let url = format!("{}{}", self.base_url, suffix);
                async move { fetcher.get_json(&url).await }
            })
            .collect();

        let mut appended = 0;
        while let Some(result) = pending.next().await {
            let item = formatter.format(result?)?;
            list.append(item)?;
            appended += 1;
        }
        Ok(appended)
    }

    pub fn clear(&mut self) -> TableResult<()> {
        info!(key = self.list.key(), "clearing list");
        self.list.clear()
    }
}

impl<F, S> RemoteAppender<Value, F, S>
where
    F: Fetch,
    S: Store,
{
    /// [`fetch_and_append`](Self::fetch_and_append) with the identity
    /// formatter.
    pub async fn fetch_and_append_raw(&mut self, path_suffix: &str) -> TableResult<&Value> {
        self.fetch_and_append(&Identity, path_suffix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardFormatter, PlayingCard, TableError};
    use crate::infrastructure::MemoryStore;
    use crate::test_support::{FakeFetcher, Reply, draw_body};
    use serde_json::json;
    use std::time::Duration;

    const BASE: &str = "https://cards.test/draw/";

    fn card_appender(fetcher: FakeFetcher, store: MemoryStore) -> RemoteAppender<PlayingCard, FakeFetcher, MemoryStore> {
        let list = PersistentList::init("cards", store).unwrap();
        RemoteAppender::new(BASE, fetcher, list)
    }

    #[tokio::test]
    async fn test_fetch_and_append_scenario() {
        let fetcher = FakeFetcher::default().reply(BASE, Reply::Json(json!({"id": "a", "image": "url1"})));
        let store = MemoryStore::default();
        let mut appender = card_appender(fetcher, store.clone());
        assert!(appender.items().is_empty());

        let as_card = |raw: Value| -> TableResult<PlayingCard> { Ok(serde_json::from_value(raw)?) };
        appender.fetch_and_append(&as_card, "").await.unwrap();
        assert_eq!(appender.items(), &[PlayingCard::new("a", "url1")]);
        assert_eq!(store.raw("cards").as_deref(), Some(r#"[{"id":"a","image":"url1"}]"#));

        appender.clear().unwrap();
        assert!(appender.items().is_empty());
        assert_eq!(store.raw("cards").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_requests_base_url_plus_suffix() {
        let url = format!("{}?count=1", BASE);
        let fetcher = FakeFetcher::default().reply(&url, Reply::Json(draw_body("QS")));
        let mut appender = card_appender(fetcher, MemoryStore::default());

        let card = appender.fetch_and_append(&CardFormatter, "?count=1").await.unwrap();
        assert_eq!(card.face(), "Q♠");
        assert_eq!(*appender.fetcher().requested.borrow(), vec![url]);
    }

    #[tokio::test]
    async fn test_raw_values_with_identity() {
        let fetcher = FakeFetcher::default().reply(BASE, Reply::Json(json!({"n": 1})));
        let list: PersistentList<Value, _> = PersistentList::init("raw", MemoryStore::default()).unwrap();
        let mut appender = RemoteAppender::new(BASE, fetcher, list);

        appender.fetch_and_append_raw("").await.unwrap();
        appender.fetch_and_append_raw("").await.unwrap();
        assert_eq!(appender.items(), &[json!({"n": 1}), json!({"n": 1})]);
    }

    #[tokio::test]
    async fn test_status_failure_leaves_list_unchanged() {
        let fetcher = FakeFetcher::default()
            .reply(BASE, Reply::Json(draw_body("2C")))
            .reply(&format!("{}broken", BASE), Reply::Status(500));
        let store = MemoryStore::default();
        let mut appender = card_appender(fetcher, store.clone());
        appender.fetch_and_append(&CardFormatter, "").await.unwrap();
        let before = store.raw("cards");

        let result = appender.fetch_and_append(&CardFormatter, "broken").await;
        assert!(matches!(result, Err(TableError::Status { status: 500, .. })));
        assert_eq!(appender.items().len(), 1);
        assert_eq!(store.raw("cards"), before);
    }

    #[tokio::test]
    async fn test_formatter_failure_leaves_list_unchanged() {
        let fetcher = FakeFetcher::default().reply(BASE, Reply::Json(json!({"success": false, "cards": []})));
        let store = MemoryStore::default();
        let mut appender = card_appender(fetcher, store.clone());

        let result = appender.fetch_and_append(&CardFormatter, "").await;
        assert!(matches!(result, Err(TableError::MalformedResponse(_))));
        assert!(appender.items().is_empty());
        assert_eq!(store.raw("cards").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_concurrent_appends_follow_resolution_order() {
        let fetcher = FakeFetcher::default()
            .reply_after(&format!("{}slow", BASE), Duration::from_millis(60), Reply::Json(draw_body("KH")))
            .reply(&format!("{}fast", BASE), Reply::Json(draw_body("2S")));
        let store = MemoryStore::default();
        let mut appender = card_appender(fetcher, store.clone());

        let appended = appender
            .fetch_concurrently_and_append(&CardFormatter, &["slow", "fast"])
            .await
            .unwrap();
        assert_eq!(appended, 2);

        let codes: Vec<&str> = appender.items().iter().map(|card| card.code()).collect();
        assert_eq!(codes, vec!["2S", "KH"]);

        let stored: Vec<PlayingCard> = serde_json::from_str(&store.raw("cards").unwrap()).unwrap();
        assert_eq!(stored.as_slice(), appender.items());
    }

    #[tokio::test]
    async fn test_concurrent_batch_stops_at_first_failure() {
        let fetcher = FakeFetcher::default()
            .reply(&format!("{}ok", BASE), Reply::Json(draw_body("3D")))
            .reply_after(&format!("{}bad", BASE), Duration::from_millis(20), Reply::Status(503))
            .reply_after(&format!("{}late", BASE), Duration::from_millis(200), Reply::Json(draw_body("4D")));
        let mut appender = card_appender(fetcher, MemoryStore::default());

        let result = appender
            .fetch_concurrently_and_append(&CardFormatter, &["late", "bad", "ok"])
            .await;
        assert!(matches!(result, Err(TableError::Status { status: 503, .. })));
        let codes: Vec<&str> = appender.items().iter().map(|card| card.code()).collect();
        assert_eq!(codes, vec!["3D"]);
    }
}
