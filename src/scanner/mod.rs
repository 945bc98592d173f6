//! Comment-Stripping Scanner
//!
//! This module provides a single-pass scanner that removes SQL comments
//! from source text while leaving quoted regions untouched:
//!
//! - **Line comments**: `-- ...` up to the end of the line
//! - **Block comments**: `/* ... */`, possibly spanning lines, non-nesting
//! - **Quoted regions**: `'...'`, `"..."` and `[...]` are copied verbatim,
//!   so comment markers inside them are inert
//!
//! Blank-line runs in the remaining text collapse to a single newline and
//! leading whitespace is dropped. Truncated input (an unterminated comment
//! or literal at end of input) is never an error; see [`Scanner::finish`]
//! for the end-of-input behaviour.

pub mod api;
pub mod error;
pub mod state;

pub use api::{strip_sql_comments, strip_sql_comments_from_file, strip_sql_comments_from_reader};
pub use error::{StripError, StripResult};
pub use state::Scanner;

#[cfg(test)]
mod tests;
