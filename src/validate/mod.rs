//! Structural validation of `INSERT ... VALUES (...) ON CONFLICT` lines.
//!
//! Each non-directive line is checked for:
//! - a recognisable values clause
//! - the expected number of values (quote-aware split, `''` escapes)
//! - an allowed level code in the level column
//!
//! Every violation is collected; the scan never stops early.

mod clause;
mod line;
mod tokenizer;
mod types;
mod validator;


// Re-export public API
pub use clause::extract_values_clause;
pub use line::{LineKind, classify_line};
pub use tokenizer::split_values;
pub use types::{Finding, FindingKind, ScanReport, format_value_list};
pub use validator::{
    is_allowed_level, normalize_level, validate_file, validate_line, validate_source,
};
