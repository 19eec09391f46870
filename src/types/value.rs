//! Dynamic values passed through the host-facing channel
//!
//! Construction arguments and `is_view` inputs arrive as loosely typed
//! values, the way a host runtime hands them over. `Value` is that channel.

use std::fmt;

use super::{BufferView, TO_STRING_TAG};
use crate::dispatch::Buffer;
use crate::error::BufferError;

/// Largest integer exactly representable as an IEEE-754 double (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Coarse classification of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    List,
    Buffer,
    View,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Buffer => TO_STRING_TAG,
            ValueKind::View => "view",
        };
        f.write_str(name)
    }
}

/// Any value a caller may hand to the constructor or to `is_view`
#[derive(Debug, Clone)]
pub enum Value<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(&'a str),
    List(Vec<Value<'a>>),
    Buffer(&'a Buffer),
    View(BufferView<'a>),
}

impl<'a> Value<'a> {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Buffer(_) => ValueKind::Buffer,
            Value::View(_) => ValueKind::View,
        }
    }

    /// True for the closed set of view variants
    pub fn is_view(&self) -> bool {
        matches!(self, Value::View(_))
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self, Value::Buffer(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&BufferView<'a>> {
        match self {
            Value::View(v) => Some(v),
            _ => None,
        }
    }

    /// Convert to a byte length
    ///
    /// Non-numbers are a type error. Numbers must be non-negative integers no
    /// greater than [`MAX_SAFE_INTEGER`]; anything else is a range error.
    pub fn to_index(&self) -> Result<u64, BufferError> {
        let n = match self {
            Value::Number(n) => *n,
            other => {
                return Err(BufferError::NotNumeric {
                    actual: other.kind(),
                });
            }
        };

        // NaN fails every comparison, so it lands here through is_finite
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > MAX_SAFE_INTEGER as f64 {
            return Err(BufferError::InvalidLength { requested: n });
        }
        Ok(n as u64)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::Number(v.into())
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Value::Number(v.into())
    }
}

// Above 2^53 the conversion rounds, but never down to MAX_SAFE_INTEGER or below
impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<u64> for Value<'_> {
    fn from(v: u64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::String(v)
    }
}

impl<'a> From<&'a Buffer> for Value<'a> {
    fn from(v: &'a Buffer) -> Self {
        Value::Buffer(v)
    }
}

impl<'a> From<BufferView<'a>> for Value<'a> {
    fn from(v: BufferView<'a>) -> Self {
        Value::View(v)
    }
}
