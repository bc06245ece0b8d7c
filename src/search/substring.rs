//! Plain substring matching over contact names and phones.
//!
//! Matching is case-sensitive and performs no normalization: a needle
//! matches a record when it occurs verbatim in the name or in any phone.

use crate::domain::{Field, Name, PhoneNumber};
use crate::models::Record;

/// Type of field a search needle matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchableField {
    /// Contact name
    Name,
    /// One of the contact's phones
    Phone,
}

impl SearchableField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => Name::LABEL,
            Self::Phone => PhoneNumber::LABEL,
        }
    }
}

/// A record that matched a search, with the first field that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    /// The matching record
    pub record: &'a Record,

    /// Field where the match was found (name wins over phones)
    pub field: SearchableField,

    /// Full value of the matching field
    pub matched: &'a str,
}

/// Match `needle` against a record's name, then its phones in order.
pub fn match_record<'a>(record: &'a Record, needle: &str) -> Option<SearchHit<'a>> {
    let name = record.name().as_str();
    if name.contains(needle) {
        return Some(SearchHit {
            record,
            field: SearchableField::Name,
            matched: name,
        });
    }

    record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .find(|phone| phone.contains(needle))
        .map(|phone| SearchHit {
            record,
            field: SearchableField::Phone,
            matched: phone,
        })
}
