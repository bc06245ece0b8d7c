//! Caller-observable outcomes of book and record operations.
//!
//! Duplicates, misses and refused edits are expected results, so they are
//! reported through these enums instead of errors.

/// Result of inserting a phone into a record or a record into a book.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The value was inserted.
    Added,
    /// An equal value was already present; nothing changed.
    AlreadyExists,
}

/// Result of removing a phone from a record.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Result of replacing one phone with another.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The old phone was replaced in place.
    Updated,
    /// The new phone equals the old one or is already on the record.
    Rejected,
}

/// Result of deleting a record from a book.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Result of loading a book from a store.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store held a document; `records` were installed and
    /// `passthrough` unrecognized entries were kept verbatim.
    Loaded { records: usize, passthrough: usize },
    /// The store had nothing to read, or could not be read; the book is now empty.
    SourceNotFound,
}
