//! Utility functions

pub mod datetime;
pub mod parse;

pub use parse::{try_parse_decimal, try_parse_int};
