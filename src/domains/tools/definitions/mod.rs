//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod keys;

pub use keys::{
    CreateKeyParams, CreateKeyTool, DeleteKeyParams, DeleteKeyTool, GetKeyParams, GetKeyTool,
};
