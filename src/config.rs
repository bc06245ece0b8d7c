//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::JsonFileStore;
use std::env;
use std::path::PathBuf;

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file the book is loaded from and saved to
    pub book_path: PathBuf,

    /// Number of records per batch when paging through the book (default: 10)
    pub batch_size: usize,

    /// Look-ahead window for upcoming birthdays, in days (default: 7)
    pub upcoming_birthday_days: u32,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: storage file (default: "address_book.json")
    /// - `ADDRESS_BOOK_BATCH_SIZE`: records per batch, at least 1 (default: 10)
    /// - `UPCOMING_BIRTHDAY_DAYS`: birthday look-ahead in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.book_path,
        };

        let batch_size = Self::parse_env_usize("ADDRESS_BOOK_BATCH_SIZE", defaults.batch_size)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_BATCH_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let upcoming_birthday_days =
            Self::parse_env_u32("UPCOMING_BIRTHDAY_DAYS", defaults.upcoming_birthday_days)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            batch_size,
            upcoming_birthday_days,
            log_level,
        })
    }

    /// Store for the configured book file.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.book_path)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.json"),
            batch_size: 10,
            upcoming_birthday_days: 7,
            log_level: "warn".to_string(),
        }
    }
}
