//! Data models for the address book.
//!
//! This module contains the contact record, the address book that owns the
//! records, and the outcome types their operations report.

pub mod address_book;
pub mod outcome;
pub mod record;

pub use address_book::AddressBook;
pub use outcome::{AddOutcome, DeleteOutcome, EditOutcome, LoadOutcome, RemoveOutcome};
pub use record::Record;
