//! Infrastructure layer providing external service integrations.
//!
//! This module contains the file and in-memory stores, the HTTP client,
//! configuration, logging setup and clipboard access.

pub mod persistence;
pub mod http;
pub mod config;
pub mod logging;
pub mod clipboard;

pub use persistence::*;
pub use http::*;
pub use config::*;
pub use logging::*;
pub use clipboard::*;
