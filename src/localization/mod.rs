//! Localization for Indian languages
//!
//! - `tables`: embedded translation data
//! - `catalog`: immutable lookup structure built once at startup

pub mod tables;
pub mod catalog;

pub use catalog::{LocalizationCatalog, Language, TextDirection, DEFAULT_LANGUAGE};
