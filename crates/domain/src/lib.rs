//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod user;

pub use user::{EMAIL_MAX_LENGTH, EmailAddress, User, UserId};
