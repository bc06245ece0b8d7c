//! Test fixtures and sample data.
//!
//! Sample contacts mirror the household book used across the integration
//! tests: Anna and Jane Amelina, later joined by Olha Nilson.

use address_book::{AddressBook, PhoneNumber, Record};

/// Anna Amelina, born 1995-05-02, with two phones.
pub fn anna() -> Record {
    let mut record = Record::new("Anna Amelina", Some("1995-05-02")).unwrap();
    let _ = record.add_phone("1234567890").unwrap();
    let _ = record.add_phone("9876543210").unwrap();
    record
}

/// Jane Amelina, born 1994-12-23, with one phone.
pub fn jane() -> Record {
    let mut record = Record::new("Jane Amelina", Some("1994-12-23")).unwrap();
    let _ = record.add_phone("1112223333").unwrap();
    record
}

/// Olha Nilson, born 2000-12-11, with one phone.
#[allow(dead_code)]
pub fn olha() -> Record {
    let mut record = Record::new("Olha Nilson", Some("2000-12-11")).unwrap();
    let _ = record.add_phone("9998887777").unwrap();
    record
}

/// A book holding Anna then Jane.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    let _ = book.add_record(anna());
    let _ = book.add_record(jane());
    book
}

/// Phones of a record as plain strings, in order.
pub fn phone_strs(record: &Record) -> Vec<&str> {
    record.phones().iter().map(PhoneNumber::as_str).collect()
}

/// Contact names of a book, in key order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<&str> {
    book.names().collect()
}
