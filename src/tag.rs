//! Type tags of the NBT tag tree.
//!
//! [`TagID`] is the raw numbering every NBT host agrees on. [`TagMatch`] is
//! what a presence test compares a leaf against, including the "any numeric"
//! wildcard. The zero-sized markers ([`Int`], [`String`], ...) drive the
//! generic accessors such as [`Compound::get_`](crate::Compound::get_).

use crate::{Error, Result, Value};

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TagID {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagID {
    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: End, Byte, Short, Int, Long, Float, Double.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_path::TagID;
    ///
    /// assert!(TagID::Int.is_primitive());
    /// assert!(!TagID::List.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::End
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Returns `true` for the six number tags: Byte, Short, Int, Long, Float
    /// and Double. This is the set [`TagMatch::AnyNumeric`] accepts.
    ///
    /// ```
    /// use nbt_path::TagID;
    ///
    /// assert!(TagID::Byte.is_numeric());
    /// assert!(TagID::Double.is_numeric());
    /// assert!(!TagID::End.is_numeric());
    /// assert!(!TagID::IntArray.is_numeric());
    /// ```
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` if this is an array tag type: ByteArray, IntArray or
    /// LongArray.
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Returns `true` if this tag contains other values: List or Compound.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}

impl TryFrom<u8> for TagID {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            12 => Self::LongArray,
            _ => return Err(Error::InvalidTagType(value)),
        })
    }
}

/// What a presence test compares a stored leaf against.
///
/// ```
/// use nbt_path::{TagID, TagMatch};
///
/// assert!(TagMatch::from(TagID::Int).matches(TagID::Int));
/// assert!(!TagMatch::from(TagID::Int).matches(TagID::Long));
/// assert!(TagMatch::AnyNumeric.matches(TagID::Float));
/// assert!(!TagMatch::AnyNumeric.matches(TagID::String));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TagMatch {
    Exact(TagID),
    AnyNumeric,
}

impl TagMatch {
    /// Raw id hosts use on the wire for the numeric wildcard.
    pub const ANY_NUMERIC_ID: u8 = 99;

    #[inline]
    pub const fn matches(self, tag_id: TagID) -> bool {
        match self {
            Self::Exact(expected) => expected as u8 == tag_id as u8,
            Self::AnyNumeric => tag_id.is_numeric(),
        }
    }
}

impl From<TagID> for TagMatch {
    #[inline]
    fn from(tag_id: TagID) -> Self {
        Self::Exact(tag_id)
    }
}

impl TryFrom<u8> for TagMatch {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if value == Self::ANY_NUMERIC_ID {
            return Ok(Self::AnyNumeric);
        }
        TagID::try_from(value).map(Self::Exact)
    }
}

/// A tag type known at compile time.
///
/// Implemented by the zero-sized markers in this module. `Type` is the payload
/// a [`Value`] of this tag carries.
pub trait NBT: Copy + 'static {
    const TAG_ID: TagID;
    type Type: Default;

    fn ref_(value: &Value) -> Option<&Self::Type>;

    fn mut_(value: &mut Value) -> Option<&mut Self::Type>;

    fn into_(value: Value) -> Option<Self::Type>;
}

macro_rules! define_tag {
    ($($name:ident => $payload:ty),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Debug)]
            pub struct $name;

            impl NBT for $name {
                const TAG_ID: TagID = TagID::$name;
                type Type = $payload;

                #[inline]
                fn ref_(value: &Value) -> Option<&Self::Type> {
                    match value {
                        Value::$name(payload) => Some(payload),
                        _ => None,
                    }
                }

                #[inline]
                fn mut_(value: &mut Value) -> Option<&mut Self::Type> {
                    match value {
                        Value::$name(payload) => Some(payload),
                        _ => None,
                    }
                }

                #[inline]
                fn into_(value: Value) -> Option<Self::Type> {
                    match value {
                        Value::$name(payload) => Some(payload),
                        _ => None,
                    }
                }
            }
        )*
    };
}

define_tag!(
    End => (),
    Byte => i8,
    Short => i16,
    Int => i32,
    Long => i64,
    Float => f32,
    Double => f64,
    ByteArray => Vec<i8>,
    String => std::string::String,
    List => Vec<Value>,
    Compound => crate::Compound,
    IntArray => Vec<i32>,
    LongArray => Vec<i64>,
);
