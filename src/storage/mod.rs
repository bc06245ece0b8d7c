//! Persistence of address books.
//!
//! The codec maps a book to and from its JSON document; stores decide where
//! that document lives.

pub mod codec;
mod json_file;
mod traits;

pub use codec::DecodedBook;
pub use json_file::JsonFileStore;
pub use traits::BookStore;
