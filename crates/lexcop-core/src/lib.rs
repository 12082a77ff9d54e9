//! Shared leaf types for the lexcop identifier spell checker.
//!
//! This crate holds the small vocabulary every other crate speaks:
//!
//! - [`enums`] -- token classification and grammatical word classes
//! - [`character`] -- character classification and simple case mapping
//!
//! It deliberately contains no algorithms; the checking logic lives in
//! `lexcop-en`.

pub mod character;
pub mod enums;
