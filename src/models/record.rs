//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::models::outcome::{AddOutcome, EditOutcome, RemoveOutcome};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A contact: a name, an ordered set of distinct phones and an optional
/// birthday.
///
/// The name is fixed at creation and is the record's key inside an
/// [`AddressBook`](crate::models::AddressBook). Phones keep insertion order
/// and never contain the same value twice.
///
/// Serializes as `{"name": ..., "phones": [...], "birthday": ... | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name and
    /// `ValidationError::InvalidBirthday` for a malformed birthday.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: Birthday::parse_optional(birthday)?,
        })
    }

    /// Rebuild a record from stored raw values, validating every field.
    ///
    /// Unlike [`Record::add_phone`], a repeated phone is an error here: stored
    /// data that breaks the uniqueness invariant is corrupt, not a duplicate
    /// request.
    pub fn restore<I, S>(
        name: impl Into<String>,
        phones: I,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::new(name, birthday)?;
        for raw in phones {
            let phone = PhoneNumber::new(raw)?;
            if record.phones.contains(&phone) {
                return Err(ValidationError::DuplicatePhone(phone.into_inner()));
            }
            record.phones.push(phone);
        }
        Ok(record)
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if known.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone unless an equal one is already stored.
    ///
    /// The raw value is validated before the duplicate check.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> Result<AddOutcome, ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        if self.phones.contains(&phone) {
            tracing::debug!(contact = %self.name, phone = %phone, "Phone already exists for contact");
            return Ok(AddOutcome::AlreadyExists);
        }

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added to contact");
        self.phones.push(phone);
        Ok(AddOutcome::Added)
    }

    /// Remove the first phone equal to `raw`. Missing phones are not an error.
    pub fn remove_phone(&mut self, raw: &str) -> RemoveOutcome {
        match self.position_of(raw) {
            Some(index) => {
                self.phones.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Replace `old` with `new`, keeping its position among the phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if either value is malformed
    /// and `ValidationError::PhoneNotFound` if `old` is not stored.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<EditOutcome, ValidationError> {
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;

        let index = self
            .position_of(old.as_str())
            .ok_or_else(|| ValidationError::PhoneNotFound(old.as_str().to_string()))?;

        if new == old || self.phones.contains(&new) {
            tracing::debug!(
                contact = %self.name,
                old = %old,
                new = %new,
                "Phone edit rejected: new number is the same or already stored"
            );
            return Ok(EditOutcome::Rejected);
        }

        tracing::debug!(contact = %self.name, old = %old, new = %new, "Phone updated");
        self.phones[index] = new;
        Ok(EditOutcome::Updated)
    }

    /// First phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Replace or clear the birthday.
    pub fn set_birthday(&mut self, raw: Option<&str>) -> Result<(), ValidationError> {
        self.birthday = Birthday::parse_optional(raw)?;
        Ok(())
    }

    /// Days from `today` until the next birthday, `None` without a birthday.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.and_then(|birthday| birthday.days_until_next(today))
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
