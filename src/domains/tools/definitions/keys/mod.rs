//! Lokalise key tools.
//!
//! - `create`: create a key with translations
//! - `delete`: delete a key by id
//! - `get`: look a key up by name and show its details

pub mod common;
pub mod create;
pub mod delete;
pub mod get;

pub use create::{CreateKeyParams, CreateKeyTool, Translations};
pub use delete::{DeleteKeyParams, DeleteKeyTool};
pub use get::{GetKeyParams, GetKeyTool};
