//! Shared capability of validated scalar fields.

use std::fmt;

/// A validated scalar attribute of a contact.
///
/// Every field renders as its underlying value and serializes as that bare
/// value. Construction is where validation happens, so a `Field` value is
/// always valid.
pub trait Field: fmt::Display {
    /// Short label used in log events and search hits.
    const LABEL: &'static str;

    /// The stored value in its canonical textual form.
    fn raw(&self) -> String {
        self.to_string()
    }
}
