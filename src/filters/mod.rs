//! The Filters module holds the two text transformations
//! shipped by this crate.
//! 
//! Both operate on a token list: the input text split on
//! commas, with each element trimmed of surrounding whitespace.
//! `hex` turns a list of decimal integers into hex lines, and
//! `labels` resolves `name:` definitions and `$name` references.

pub mod error;
pub mod hex;
pub mod labels;
pub mod tokens;
