//! Configuration model for rowlint.
//!
//! This module defines the Config struct that describes the expected row
//! layout: column count, which column holds the level code, the allowed
//! levels, and which line prefixes mark directives. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), defaults
//! matching the idiom dataset, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
