//! Command-line and environment configuration.

use crate::domain::{TableError, TableResult};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck/new/draw/";

#[derive(Debug, Clone, Parser)]
#[command(name = "cardtable", version, about = "Pick a card, any card! A terminal card table")]
pub struct Config {
    /// Storage key the table is saved under.
    #[arg(long, env = "CARDTABLE_KEY", default_value = "cards")]
    pub key: String,

    /// Endpoint cards are drawn from.
    #[arg(long, env = "CARDTABLE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Appended to the base URL for every draw (e.g. "?count=1").
    #[arg(long, default_value = "")]
    pub path_suffix: String,

    /// Directory holding the saved table. Defaults to the platform data dir.
    #[arg(long, env = "CARDTABLE_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Log file. Defaults to `cardtable.log` in the store directory.
    #[arg(long, env = "CARDTABLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn store_dir(&self) -> TableResult<PathBuf> {
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| TableError::Config("could not determine data directory".to_string()))?;
        Ok(base.join("cardtable"))
    }

    pub fn log_file(&self) -> TableResult<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(self.store_dir()?.join("cardtable.log")),
        }
    }
}
