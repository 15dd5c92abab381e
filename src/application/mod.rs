//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the fetch-then-append workflow and the card table's UI state.

pub mod appender;
pub mod state;

pub use appender::*;
pub use state::*;
