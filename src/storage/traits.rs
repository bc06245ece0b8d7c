use crate::error::StorageResult;

/// Byte-stream storage for a serialized address book.
///
/// Provides abstraction over where the document lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookStore {
    /// Read the whole document. `Ok(None)` means there is no source to read;
    /// `StorageError::Io` means the source exists but cannot be read as text.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replace the whole document with `contents`.
    ///
    /// Implementations must not leave a truncated document behind when they
    /// return an error.
    fn write(&self, contents: &str) -> StorageResult<()>;
}
