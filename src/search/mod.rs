//! Search utilities for address book records.
//!
//! This module provides substring search across contact names and phone
//! numbers, reporting which field produced each match.

pub mod substring;

pub use substring::{match_record, SearchHit, SearchableField};
