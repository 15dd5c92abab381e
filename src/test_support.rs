//! Fakes shared by the unit tests.

use crate::domain::{Fetch, TableError, TableResult};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Canned response for one URL.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

/// [`Fetch`] that answers from a table of canned replies, optionally after
/// a delay, and records every URL requested.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    replies: HashMap<String, (Duration, Reply)>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), (Duration::ZERO, reply));
        self
    }

    pub fn reply_after(mut self, url: &str, delay: Duration, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), (delay, reply));
        self
    }
}

impl Fetch for FakeFetcher {
    async fn get_json(&self, url: &str) -> TableResult<Value> {
        self.requested.borrow_mut().push(url.to_string());
        let Some((delay, reply)) = self.replies.get(url).cloned() else {
            return Err(TableError::Status { url: url.to_string(), status: 404 });
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match reply {
            Reply::Json(value) => Ok(value),
            Reply::Status(status) => Err(TableError::Status { url: url.to_string(), status }),
        }
    }
}

/// A Deck of Cards draw response holding the single card `code`.
pub fn draw_body(code: &str) -> Value {
    json!({
        "success": true,
        "deck_id": "kxozasf3edqu",
        "cards": [{
            "code": code,
            "image": format!("https://deckofcardsapi.com/static/img/{}.png", code),
            "value": "KING",
            "suit": "HEARTS"
        }],
        "remaining": 51
    })
}
