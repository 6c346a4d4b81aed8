//! Lokalise domain module.
//!
//! A thin async client for the Lokalise REST API (v2) plus the subset of its
//! data model that the key tools read and write.

mod client;
mod error;
pub mod models;

pub use client::LokaliseClient;
pub use error::ApiError;
pub use models::{KeyId, KeyName, NewKey, Translation, TranslationKey};
