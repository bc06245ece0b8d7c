//! Address Book - a personal contact repository.
//!
//! This library stores named contact records with a set of unique phone
//! numbers and an optional birthday, and persists them as a JSON document.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records, the address book and operation outcomes
//! - **search**: Substring search over names and phones
//! - **storage**: JSON codec and the file-backed store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddOutcome, AddressBook, Record};
//!
//! let mut record = Record::new("Anna Amelina", Some("1995-05-02")).unwrap();
//! assert_eq!(record.add_phone("1234567890").unwrap(), AddOutcome::Added);
//!
//! let mut book = AddressBook::new();
//! assert_eq!(book.add_record(record), AddOutcome::Added);
//! assert_eq!(book.search("123").len(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Field, Name, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, StorageError, StorageResult};
pub use models::{
    AddOutcome, AddressBook, DeleteOutcome, EditOutcome, LoadOutcome, Record, RemoveOutcome,
};
pub use search::{SearchHit, SearchableField};
pub use storage::{BookStore, JsonFileStore};
