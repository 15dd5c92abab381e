//! Transforms applied to a fetched payload before it is stored.

use super::errors::{TableError, TableResult};
use super::models::{DrawResponse, PlayingCard};
use serde_json::Value;
use uuid::Uuid;

/// Turns a raw response body into a list item.
pub trait Formatter<T> {
    fn format(&self, raw: Value) -> TableResult<T>;
}

/// Keeps the payload as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Formatter<Value> for Identity {
    fn format(&self, raw: Value) -> TableResult<Value> {
        Ok(raw)
    }
}

impl<T, F> Formatter<T> for F
where
    F: Fn(Value) -> TableResult<T>,
{
    fn format(&self, raw: Value) -> TableResult<T> {
        self(raw)
    }
}

/// Formats a Deck of Cards draw response as the first card drawn.
///
/// Every card gets a fresh UUID so the same card drawn twice still has a
/// distinct display key.
///
/// # Examples
///
/// ```
/// use cardtable::domain::{CardFormatter, Formatter};
/// use serde_json::json;
///
/// let card = CardFormatter
///     .format(json!({
///         "success": true,
///         "cards": [{"code": "KH", "image": "https://deckofcardsapi.com/static/img/KH.png"}]
///     }))
///     .unwrap();
/// assert_eq!(card.face(), "K♥");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CardFormatter;

impl Formatter<PlayingCard> for CardFormatter {
    fn format(&self, raw: Value) -> TableResult<PlayingCard> {
        let response: DrawResponse = serde_json::from_value(raw)
            .map_err(|e| TableError::MalformedResponse(e.to_string()))?;

        let drawn = response.cards.into_iter().next().ok_or_else(|| {
            TableError::MalformedResponse("draw response contained no cards".to_string())
        })?;

        Ok(PlayingCard::new(Uuid::new_v4().to_string(), drawn.image).with_code(drawn.code))
    }
}
