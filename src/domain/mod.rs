//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar attributes of a
//! contact: its name, phone numbers and birthday. These value objects
//! validate at construction time and prevent invalid data from being
//! represented in the system.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::PhoneNumber;
