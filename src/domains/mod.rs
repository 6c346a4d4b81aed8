//! Domains module containing business logic organized by bounded contexts.
//!
//! - **lokalise**: REST client and wire models for the Lokalise API
//! - **tools**: MCP tools built on top of the client

pub mod lokalise;
pub mod tools;
