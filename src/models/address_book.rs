//! AddressBook: the name-keyed collection of contact records.

use crate::config::Config;
use crate::error::{BookError, StorageError, StorageResult};
use crate::models::outcome::{AddOutcome, DeleteOutcome, LoadOutcome};
use crate::models::Record;
use crate::search::{match_record, SearchHit};
use crate::storage::{codec, BookStore, JsonFileStore};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::path::Path;
use std::slice::Chunks;

/// An insertion-ordered collection of [`Record`]s keyed by contact name.
///
/// At most one record exists per name. The collection itself is private;
/// callers go through the vetted operations below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Non-contact entries from the last load, written back on save.
    passthrough: Vec<(String, Value)>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless one with the same name is already present.
    ///
    /// On `AlreadyExists` the stored record is left untouched and `record`
    /// is dropped.
    pub fn add_record(&mut self, record: Record) -> AddOutcome {
        if self.position_of(record.name().as_str()).is_some() {
            tracing::debug!(contact = %record.name(), "Record already exists in the address book");
            return AddOutcome::AlreadyExists;
        }

        tracing::info!(contact = %record.name(), "Record added to the address book");
        self.records.push(record);
        AddOutcome::Added
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let found = self.records.iter().find(|r| r.name().as_str() == name);
        tracing::debug!(contact = %name, found = found.is_some(), "Address book lookup");
        found
    }

    /// Look up a record by exact name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let found = self.records.iter_mut().find(|r| r.name().as_str() == name);
        tracing::debug!(contact = %name, found = found.is_some(), "Address book lookup");
        found
    }

    /// Remove the record with this name.
    pub fn delete(&mut self, name: &str) -> DeleteOutcome {
        match self.position_of(name) {
            Some(index) => {
                self.records.remove(index);
                tracing::info!(contact = %name, "Record deleted from the address book");
                DeleteOutcome::Deleted
            }
            None => {
                tracing::debug!(contact = %name, "Record to delete not found");
                DeleteOutcome::NotFound
            }
        }
    }

    /// Walk the records in consecutive batches of at most `batch_size`.
    ///
    /// The iterator is lazy and borrows the book; calling this again starts
    /// a fresh walk over the current contents.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBatchSize` when `batch_size` is zero.
    pub fn iter_batches(&self, batch_size: usize) -> Result<Chunks<'_, Record>, BookError> {
        if batch_size == 0 {
            return Err(BookError::InvalidBatchSize(batch_size));
        }
        Ok(self.records.chunks(batch_size))
    }

    /// Records whose name or any phone contains `needle`, in key order.
    pub fn search(&self, needle: &str) -> Vec<&Record> {
        self.search_hits(needle)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// Like [`AddressBook::search`], reporting the field each record matched on.
    pub fn search_hits(&self, needle: &str) -> Vec<SearchHit<'_>> {
        let hits: Vec<SearchHit<'_>> = self
            .records
            .iter()
            .filter_map(|record| match_record(record, needle))
            .collect();

        tracing::debug!(query = %needle, result_count = hits.len(), "Search completed");
        hits
    }

    /// Records with a birthday at most `within_days` days after `today`,
    /// soonest first. Ties keep key order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .iter()
            .filter_map(|record| record.days_to_birthday(today).map(|days| (record, days)))
            .filter(|(_, days)| *days <= i64::from(within_days))
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// [`AddressBook::iter_batches`] with the configured batch size.
    pub fn configured_batches(&self, config: &Config) -> Result<Chunks<'_, Record>, BookError> {
        self.iter_batches(config.batch_size)
    }

    /// [`AddressBook::upcoming_birthdays`] over the configured look-ahead window.
    pub fn configured_upcoming_birthdays(
        &self,
        today: NaiveDate,
        config: &Config,
    ) -> Vec<(&Record, i64)> {
        self.upcoming_birthdays(today, config.upcoming_birthday_days)
    }

    /// Records in key order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contact names in key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Entries from the last load that were not contacts.
    pub fn passthrough_entries(&self) -> &[(String, Value)] {
        &self.passthrough
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole book with the contents of `store`.
    ///
    /// A missing, unreadable or blank source empties the book and reports
    /// `LoadOutcome::SourceNotFound`. A source that reads but does not decode
    /// is an error, and the book is left as it was.
    pub fn load_from<S: BookStore + ?Sized>(&mut self, store: &S) -> StorageResult<LoadOutcome> {
        let text = match store.read() {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("Address book source not found or empty; book is now empty");
                return Ok(self.clear_for_missing_source());
            }
            Err(StorageError::Io(e)) => {
                tracing::warn!(error = %e, "Address book source unreadable; book is now empty");
                return Ok(self.clear_for_missing_source());
            }
            Err(e) => return Err(e),
        };

        let decoded = codec::decode(&text)?;
        let outcome = LoadOutcome::Loaded {
            records: decoded.records.len(),
            passthrough: decoded.passthrough.len(),
        };
        self.records = decoded.records;
        self.passthrough = decoded.passthrough;

        tracing::info!(
            records = self.records.len(),
            passthrough = self.passthrough.len(),
            "Address book loaded"
        );
        Ok(outcome)
    }

    /// Write the whole book to `store`.
    pub fn save_to<S: BookStore + ?Sized>(&self, store: &S) -> StorageResult<()> {
        let text = codec::to_json_string(self)?;
        store.write(&text)?;
        tracing::info!(records = self.records.len(), "Address book saved");
        Ok(())
    }

    /// [`AddressBook::load_from`] a JSON file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<LoadOutcome> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    /// [`AddressBook::save_to`] a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    fn clear_for_missing_source(&mut self) -> LoadOutcome {
        self.records.clear();
        self.passthrough.clear();
        LoadOutcome::SourceNotFound
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // A contact added since the last load shadows a passthrough entry with the same key.
        let passthrough: Vec<&(String, Value)> = self
            .passthrough
            .iter()
            .filter(|(key, _)| {
                let shadowed = self.position_of(key).is_some();
                if shadowed {
                    tracing::warn!(
                        key = %key,
                        "Unrecognized entry replaced by a contact of the same name"
                    );
                }
                !shadowed
            })
            .collect();

        let mut map = serializer.serialize_map(Some(self.records.len() + passthrough.len()))?;
        for record in &self.records {
            map.serialize_entry(record.name().as_str(), record)?;
        }
        for (key, value) in passthrough {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
