use address_book::error::{StorageError, StorageResult};
use address_book::storage::BookStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book store for testing.
///
/// Keeps the document in memory, can be told to fail writes, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    document: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a store with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `document`.
    pub fn with_document(document: &str) -> Self {
        let store = Self::new();
        *store.document.lock().unwrap() = Some(document.to_string());
        store
    }

    /// The current document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.lock().unwrap().clone()
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStore for MockBookStore {
    fn read(&self) -> StorageResult<Option<String>> {
        self.track_call("read");
        Ok(self.document())
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        self.track_call("write");

        if *self.fail_writes.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }

        *self.document.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}
