use crate::{Compound, Error, NBT, Result, TagID};

/// A single node of the tag tree.
///
/// Every variant corresponds to one [`TagID`]. A [`Compound`] value is itself
/// a mapping, which is what makes the tree hierarchical.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    End(()),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    /// Element homogeneity is not checked here.
    List(Vec<Value>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::End(())
    }
}

impl Value {
    #[inline]
    pub const fn tag_id(&self) -> TagID {
        match self {
            Value::End(_) => TagID::End,
            Value::Byte(_) => TagID::Byte,
            Value::Short(_) => TagID::Short,
            Value::Int(_) => TagID::Int,
            Value::Long(_) => TagID::Long,
            Value::Float(_) => TagID::Float,
            Value::Double(_) => TagID::Double,
            Value::ByteArray(_) => TagID::ByteArray,
            Value::String(_) => TagID::String,
            Value::List(_) => TagID::List,
            Value::Compound(_) => TagID::Compound,
            Value::IntArray(_) => TagID::IntArray,
            Value::LongArray(_) => TagID::LongArray,
        }
    }

    #[inline]
    pub fn is_<T: NBT>(&self) -> bool {
        self.tag_id() == T::TAG_ID
    }

    #[inline]
    pub fn ref_<T: NBT>(&self) -> Option<&T::Type> {
        T::ref_(self)
    }

    #[inline]
    pub fn mut_<T: NBT>(&mut self) -> Option<&mut T::Type> {
        T::mut_(self)
    }

    #[inline]
    pub fn into_<T: NBT>(self) -> Option<T::Type> {
        T::into_(self)
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Value::Byte(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            Value::Short(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(value) => Some(value),
            _ => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident($payload:ty)),* $(,)?) => {
        $(
            impl From<$payload> for Value {
                #[inline]
                fn from(value: $payload) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_payload!(
    End(()),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<Value>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Byte(value as i8)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<&[i8]> for Value {
    #[inline]
    fn from(value: &[i8]) -> Self {
        Value::ByteArray(value.to_vec())
    }
}

impl From<&[i32]> for Value {
    #[inline]
    fn from(value: &[i32]) -> Self {
        Value::IntArray(value.to_vec())
    }
}

impl From<&[i64]> for Value {
    #[inline]
    fn from(value: &[i64]) -> Self {
        Value::LongArray(value.to_vec())
    }
}

macro_rules! impl_try_from_value {
    ($($tag:ident => $payload:ty),* $(,)?) => {
        $(
            impl TryFrom<Value> for $payload {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let actual = value.tag_id();
                    value.into_::<crate::tag::$tag>().ok_or(Error::TagMismatch {
                        expected: TagID::$tag,
                        actual,
                    })
                }
            }
        )*
    };
}

impl_try_from_value!(
    Byte => i8,
    Short => i16,
    Int => i32,
    Long => i64,
    Float => f32,
    Double => f64,
    ByteArray => Vec<i8>,
    String => String,
    Compound => Compound,
    IntArray => Vec<i32>,
    LongArray => Vec<i64>,
);
