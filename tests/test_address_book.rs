//! Integration tests for address book operations.
//!
//! These tests drive the public API the way an application would: build
//! records, put them in a book, page through it, search and edit.

mod fixtures;

use address_book::{
    AddOutcome, AddressBook, BookError, DeleteOutcome, EditOutcome, Record, SearchableField,
    ValidationError,
};
use chrono::NaiveDate;
use fixtures::*;

#[test]
fn test_duplicate_record_keeps_original() {
    let mut book = AddressBook::new();
    assert_eq!(book.add_record(anna()), AddOutcome::Added);

    let mut impostor = Record::new("Anna Amelina", Some("2001-01-01")).unwrap();
    let _ = impostor.add_phone("0000000000").unwrap();
    assert_eq!(book.add_record(impostor), AddOutcome::AlreadyExists);

    let stored = book.find("Anna Amelina").unwrap();
    assert_eq!(phone_strs(stored), vec!["1234567890", "9876543210"]);
    assert_eq!(stored.birthday().unwrap().to_string(), "1995-05-02");
    assert_eq!(book.len(), 1);
}

#[test]
fn test_batches_follow_insertion_order() {
    let mut book = sample_book();
    let _ = book.add_record(olha());

    let batches: Vec<Vec<&str>> = book
        .iter_batches(2)
        .unwrap()
        .map(|batch| batch.iter().map(|r| r.name().as_str()).collect())
        .collect();
    assert_eq!(
        batches,
        vec![vec!["Anna Amelina", "Jane Amelina"], vec!["Olha Nilson"]]
    );

    let singles = book.iter_batches(1).unwrap().count();
    assert_eq!(singles, 3);

    assert_eq!(book.iter_batches(0).err(), Some(BookError::InvalidBatchSize(0)));
}

#[test]
fn test_search_finds_by_phone_even_if_name_differs() {
    let mut book = sample_book();
    let _ = book
        .find_mut("Jane Amelina")
        .unwrap()
        .add_phone("5555555555")
        .unwrap();

    let results = book.search("555");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name().as_str(), "Jane Amelina");

    let hits = book.search_hits("555");
    assert_eq!(hits[0].field, SearchableField::Phone);
    assert_eq!(hits[0].matched, "5555555555");

    assert!(book.search("Dima").is_empty());
}

#[test]
fn test_search_is_case_sensitive_substring() {
    let book = sample_book();
    assert_eq!(book.search("Amelina").len(), 2);
    assert!(book.search("amelina").is_empty());
    assert_eq!(book.search("Jane").len(), 1);
}

#[test]
fn test_edit_phone_through_book() {
    let mut book = sample_book();
    let _ = book.add_record(olha());
    assert_eq!(book.delete("Jane Amelina"), DeleteOutcome::Deleted);
    assert_eq!(book.delete("Jane Amelina"), DeleteOutcome::NotFound);

    let record = book.find_mut("Anna Amelina").unwrap();
    assert_eq!(
        record.edit_phone("1234567890", "5555555555"),
        Ok(EditOutcome::Updated)
    );
    assert_eq!(
        record.edit_phone("0000000000", "1111111111"),
        Err(ValidationError::PhoneNotFound("0000000000".to_string()))
    );

    let record = book.find("Anna Amelina").unwrap();
    assert_eq!(phone_strs(record), vec!["5555555555", "9876543210"]);
    assert_eq!(names(&book), vec!["Anna Amelina", "Olha Nilson"]);
}

#[test]
fn test_record_display_lists_phones() {
    assert_eq!(
        anna().to_string(),
        "Contact name: Anna Amelina, phones: 1234567890; 9876543210"
    );
}

#[test]
fn test_days_to_birthday_through_book() {
    let book = sample_book();
    let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();

    assert_eq!(book.find("Jane Amelina").unwrap().days_to_birthday(today), Some(3));
    // 2024-12-20 -> 2025-05-02
    assert_eq!(book.find("Anna Amelina").unwrap().days_to_birthday(today), Some(133));

    let upcoming = book.upcoming_birthdays(today, 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].0.name().as_str(), "Jane Amelina");
}
