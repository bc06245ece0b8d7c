//! JSON codec for the address book document.
//!
//! The document is an object keyed by contact name:
//!
//! ```json
//! {
//!     "Anna Amelina": {
//!         "name": "Anna Amelina",
//!         "phones": ["1234567890", "9876543210"],
//!         "birthday": "1995-05-02"
//!     }
//! }
//! ```
//!
//! Decoding runs in two phases: the text is parsed into a generic
//! [`serde_json::Value`] tree, then [`reconstruct`] validates every entry and
//! builds typed [`Record`]s. Entries without all of `name`, `phones` and
//! `birthday` are not contacts and are handed back untouched.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Indentation used when writing the document.
const INDENT: &[u8] = b"    ";

/// Keys an entry needs to be treated as a stored contact.
const RECORD_KEYS: [&str; 3] = ["name", "phones", "birthday"];

/// Raw shape of a stored contact before validation.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    name: String,
    phones: Vec<String>,
    birthday: Option<String>,
}

/// Result of decoding a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedBook {
    /// Validated contacts in document order
    pub records: Vec<Record>,

    /// Entries that are not contacts, kept verbatim in document order
    pub passthrough: Vec<(String, Value)>,
}

/// Encode a book as a JSON tree.
pub fn encode(book: &AddressBook) -> StorageResult<Value> {
    Ok(serde_json::to_value(book)?)
}

/// Encode a book as pretty-printed JSON text.
pub fn to_json_string(book: &AddressBook) -> StorageResult<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    book.serialize(&mut serializer)?;

    String::from_utf8(buffer)
        .map_err(|e| StorageError::Malformed(format!("encoded document is not UTF-8: {}", e)))
}

/// Decode JSON text into validated records.
pub fn decode(text: &str) -> StorageResult<DecodedBook> {
    let tree: Value = serde_json::from_str(text)?;
    reconstruct(tree)
}

/// Build validated records from a parsed JSON tree.
///
/// # Errors
///
/// - `StorageError::Malformed` if the top level is not an object or a
///   contact entry has fields of the wrong JSON type.
/// - `StorageError::InvalidEntry` if a stored name, phone or birthday fails
///   validation, or a contact stores the same phone twice.
/// - `StorageError::DuplicateName` if two entries hold the same contact name.
/// - `StorageError::KeyCollision` if an unrecognized entry is keyed by the
///   name of a contact stored under another key.
pub fn reconstruct(tree: Value) -> StorageResult<DecodedBook> {
    let entries = match tree {
        Value::Object(entries) => entries,
        other => {
            return Err(StorageError::Malformed(format!(
                "expected a JSON object at the top level, found {}",
                kind_of(&other)
            )))
        }
    };

    let mut decoded = DecodedBook::default();
    for (key, entry) in entries {
        if !is_record_entry(&entry) {
            tracing::warn!(key = %key, "Keeping unrecognized address book entry as is");
            decoded.passthrough.push((key, entry));
            continue;
        }

        let record = restore_record(&key, entry)?;
        if record.name().as_str() != key {
            tracing::warn!(
                key = %key,
                name = %record.name(),
                "Stored contact key differs from its name; using the name"
            );
        }
        if decoded.records.iter().any(|r| r.name() == record.name()) {
            return Err(StorageError::DuplicateName(record.name().to_string()));
        }
        decoded.records.push(record);
    }

    // Records are written back under their names, so such an entry would be lost.
    if let Some((key, _)) = decoded
        .passthrough
        .iter()
        .find(|(key, _)| decoded.records.iter().any(|r| r.name().as_str() == key.as_str()))
    {
        return Err(StorageError::KeyCollision(key.clone()));
    }

    Ok(decoded)
}

fn is_record_entry(entry: &Value) -> bool {
    entry
        .as_object()
        .is_some_and(|object| RECORD_KEYS.iter().all(|key| object.contains_key(*key)))
}

fn restore_record(key: &str, entry: Value) -> StorageResult<Record> {
    let stored: StoredRecord = serde_json::from_value(entry)
        .map_err(|e| StorageError::Malformed(format!("contact `{}`: {}", key, e)))?;

    Record::restore(stored.name, stored.phones, stored.birthday.as_deref()).map_err(|source| {
        StorageError::InvalidEntry {
            key: key.to_string(),
            source,
        }
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use serde_json::json;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut anna = Record::new("Anna Amelina", Some("1995-05-02")).unwrap();
        let _ = anna.add_phone("1234567890").unwrap();
        let _ = anna.add_phone("9876543210").unwrap();
        let _ = book.add_record(anna);

        let mut jane = Record::new("Jane Amelina", None).unwrap();
        let _ = jane.add_phone("1112223333").unwrap();
        let _ = book.add_record(jane);
        book
    }

    #[test]
    fn test_encode_shape() {
        let value = encode(&sample_book()).unwrap();
        assert_eq!(
            value,
            json!({
                "Anna Amelina": {
                    "name": "Anna Amelina",
                    "phones": ["1234567890", "9876543210"],
                    "birthday": "1995-05-02"
                },
                "Jane Amelina": {
                    "name": "Jane Amelina",
                    "phones": ["1112223333"],
                    "birthday": null
                }
            })
        );
    }

    #[test]
    fn test_to_json_string_is_pretty_and_ordered() {
        let text = to_json_string(&sample_book()).unwrap();
        assert!(text.starts_with("{\n    \"Anna Amelina\": {\n        \"name\": \"Anna Amelina\""));
        let anna = text.find("Anna Amelina").unwrap();
        let jane = text.find("Jane Amelina").unwrap();
        assert!(anna < jane);
    }

    #[test]
    fn test_decode_restores_records_in_order() {
        let text = to_json_string(&sample_book()).unwrap();
        let decoded = decode(&text).unwrap();

        let names: Vec<&str> = decoded.records.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna Amelina", "Jane Amelina"]);
        assert!(decoded.passthrough.is_empty());
    }

    #[test]
    fn test_decode_passes_through_incomplete_entries() {
        let text = r#"{
            "meta": {"version": 1},
            "Olha Nilson": {"name": "Olha Nilson", "phones": ["9998887777"], "birthday": "2000-12-11"},
            "note": "plain string"
        }"#;
        let decoded = decode(text).unwrap();

        assert_eq!(decoded.records.len(), 1);
        assert_eq!(
            decoded.passthrough,
            vec![
                ("meta".to_string(), json!({"version": 1})),
                ("note".to_string(), json!("plain string")),
            ]
        );
    }

    #[test]
    fn test_decode_rejects_invalid_stored_phone() {
        let text = r#"{"Anna": {"name": "Anna", "phones": ["12345"], "birthday": null}}"#;
        match decode(text) {
            Err(StorageError::InvalidEntry { key, source }) => {
                assert_eq!(key, "Anna");
                assert_eq!(source, ValidationError::InvalidPhone("12345".to_string()));
            }
            other => panic!("Expected InvalidEntry error, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_invalid_stored_birthday() {
        let text = r#"{"Anna": {"name": "Anna", "phones": [], "birthday": "2023-02-30"}}"#;
        assert!(matches!(
            decode(text),
            Err(StorageError::InvalidEntry {
                source: ValidationError::InvalidBirthday(_),
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_field_types() {
        let text = r#"{"Anna": {"name": "Anna", "phones": "1234567890", "birthday": null}}"#;
        assert!(matches!(decode(text), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_decode_rejects_duplicate_names() {
        let text = r#"{
            "Anna": {"name": "Anna", "phones": [], "birthday": null},
            "Anna (work)": {"name": "Anna", "phones": [], "birthday": null}
        }"#;
        assert!(matches!(decode(text), Err(StorageError::DuplicateName(name)) if name == "Anna"));
    }

    #[test]
    fn test_decode_rejects_entry_keyed_by_another_contacts_name() {
        let text = r#"{
            "Anna": {"x": 1},
            "X": {"name": "Anna", "phones": ["1234567890"], "birthday": null}
        }"#;
        assert!(matches!(decode(text), Err(StorageError::KeyCollision(key)) if key == "Anna"));
    }

    #[test]
    fn test_decode_rejects_non_object_document() {
        assert!(matches!(decode("[]"), Err(StorageError::Malformed(_))));
        assert!(matches!(decode("not json"), Err(StorageError::Json(_))));
    }
}
