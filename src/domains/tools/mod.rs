//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the operations MCP clients can invoke; here they are the three
//! Lokalise key operations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool descriptors and the dispatcher
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/keys/` (e.g., `update.rs`)
//! 2. Define params, `parse()`, `execute()` and `to_tool()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add a `KeyTool` variant in `registry.rs`; the compiler points at every
//!    `match` that needs the new arm

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::{KeyTool, ToolRegistry};
