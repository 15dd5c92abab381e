use crate::domain::{Fetch, TableError, TableResult};
use serde_json::Value;
use tracing::debug;

/// [`Fetch`] over a shared `reqwest` client.
///
/// No timeout or retry is configured; a request lasts as long as the server
/// takes to answer.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> TableResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cardtable/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn get_json(&self, url: &str) -> TableResult<Value> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TableError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
