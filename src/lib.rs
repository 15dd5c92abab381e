//! cardtable - Terminal Card Table Library
//!
//! Draws playing cards from the Deck of Cards API onto a table that is
//! persisted between runs, rendered in the terminal.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;

pub use domain::*;
pub use application::*;
