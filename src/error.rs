//! Error types for tag conversions.
//!
//! The path accessor itself never fails: missing paths and tag mismatches
//! degrade to default values. [`Error`] is only produced by the strict
//! conversions: [`TagID::try_from`](crate::TagID), [`TagMatch::try_from`](crate::TagMatch)
//! and `TryFrom<Value>` for the payload types.
//!
//! # Example
//!
//! ```
//! use nbt_path::{Error, TagID, Value};
//!
//! assert!(matches!(TagID::try_from(13u8), Err(Error::InvalidTagType(13))));
//!
//! let result = i32::try_from(Value::from("hi"));
//! assert!(matches!(
//!     result,
//!     Err(Error::TagMismatch { expected: TagID::Int, actual: TagID::String })
//! ));
//! ```

use std::fmt::{self, Display};

use crate::TagID;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A raw tag id outside `0..=12` (and not the numeric wildcard, where
    /// that is accepted).
    InvalidTagType(u8),

    /// A value was converted into a payload of a different tag.
    TagMismatch { expected: TagID, actual: TagID },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::TagMismatch { expected, actual } => formatter.write_str(&format!(
                "tag mismatch: expected {:#04x}, got {:#04x}",
                *expected as u8, *actual as u8
            )),
        }
    }
}

impl std::error::Error for Error {}
