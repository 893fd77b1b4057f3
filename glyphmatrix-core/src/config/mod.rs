//! Board configuration
//!
//! Typed configuration plus a small `no_std` parser for the TOML subset
//! used by the embedded `board.toml`.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
