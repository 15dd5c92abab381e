//! Seams between the domain and the outside world.

use super::errors::TableResult;
use serde_json::Value;
use std::future::Future;

/// A durable string key-value store.
///
/// Values are whole JSON documents; there is no partial update.
pub trait Store {
    fn get(&self, key: &str) -> TableResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> TableResult<()>;
}

/// Something that can GET a URL and parse the body as JSON.
pub trait Fetch {
    fn get_json(&self, url: &str) -> impl Future<Output = TableResult<Value>>;
}
