//! Runtime values that can be coerced against or inferred into a descriptor.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Shape of a NULL value.
///
/// `Untyped` is the absent value; the others are the "no value" sentinel
/// of a particular shape and are still type-checked during coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlNullType {
    Untyped,
    Bool,
    U8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Binary,
    Guid,
    Decimal,
    Money,
    DateTime,
    Xml,
}

/// A single runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL, optionally carrying the shape it stands in for.
    Null(SqlNullType),
    Bool(bool),
    U8(u8),
    /// Never accepted.
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    /// Never accepted.
    U16(u16),
    /// Never accepted.
    U32(u32),
    /// Never accepted.
    U64(u64),
    F32(f32),
    F64(f64),
    /// Single character.
    Char(char),
    String(String),
    /// Character buffer.
    Chars(Vec<char>),
    Binary(Vec<u8>),
    Guid(Uuid),
    Decimal(Decimal),
    Money(Decimal),
    DateTime(NaiveDateTime),
    /// Time span, stored with 100 ns tick resolution.
    Time(Duration),
    DateTimeOffset(DateTime<FixedOffset>),
    Xml(String),
}

impl SqlValue {
    /// Untyped NULL.
    pub const NULL: SqlValue = SqlValue::Null(SqlNullType::Untyped);

    /// Check if the value is NULL (typed or not).
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null(_))
    }

    /// Runtime type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null(SqlNullType::Untyped) => "Null",
            SqlValue::Null(_) => "TypedNull",
            SqlValue::Bool(_) => "Boolean",
            SqlValue::U8(_) => "Byte",
            SqlValue::I8(_) => "SByte",
            SqlValue::I16(_) => "Int16",
            SqlValue::I32(_) => "Int32",
            SqlValue::I64(_) => "Int64",
            SqlValue::U16(_) => "UInt16",
            SqlValue::U32(_) => "UInt32",
            SqlValue::U64(_) => "UInt64",
            SqlValue::F32(_) => "Single",
            SqlValue::F64(_) => "Double",
            SqlValue::Char(_) => "Char",
            SqlValue::String(_) => "String",
            SqlValue::Chars(_) => "Chars",
            SqlValue::Binary(_) => "Binary",
            SqlValue::Guid(_) => "Guid",
            SqlValue::Decimal(_) => "Decimal",
            SqlValue::Money(_) => "Money",
            SqlValue::DateTime(_) => "DateTime",
            SqlValue::Time(_) => "TimeSpan",
            SqlValue::DateTimeOffset(_) => "DateTimeOffset",
            SqlValue::Xml(_) => "Xml",
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) | SqlValue::Xml(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            SqlValue::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Try to get the value as an exact decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            SqlValue::Decimal(d) | SqlValue::Money(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get the value as a NaiveDateTime.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to widen an integer value to i64.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            SqlValue::U8(v) => Some(*v as i64),
            SqlValue::I16(v) => Some(*v as i64),
            SqlValue::I32(v) => Some(*v as i64),
            SqlValue::I64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null(_) => write!(f, "NULL"),
            SqlValue::Bool(b) => write!(f, "{}", b),
            SqlValue::U8(v) => write!(f, "{}", v),
            SqlValue::I8(v) => write!(f, "{}", v),
            SqlValue::I16(v) => write!(f, "{}", v),
            SqlValue::I32(v) => write!(f, "{}", v),
            SqlValue::I64(v) => write!(f, "{}", v),
            SqlValue::U16(v) => write!(f, "{}", v),
            SqlValue::U32(v) => write!(f, "{}", v),
            SqlValue::U64(v) => write!(f, "{}", v),
            SqlValue::F32(v) => write!(f, "{}", v),
            SqlValue::F64(v) => write!(f, "{}", v),
            SqlValue::Char(c) => write!(f, "{}", c),
            SqlValue::String(s) => write!(f, "{}", s),
            SqlValue::Chars(chars) => {
                let s: String = chars.iter().collect();
                write!(f, "{}", s)
            }
            SqlValue::Binary(bytes) => write!(f, "<BINARY: {} bytes>", bytes.len()),
            SqlValue::Guid(g) => write!(f, "{}", g),
            SqlValue::Decimal(d) | SqlValue::Money(d) => write!(f, "{}", d),
            SqlValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            SqlValue::Time(span) => write!(f, "{}", span),
            SqlValue::DateTimeOffset(dto) => write!(f, "{}", dto.format("%Y-%m-%d %H:%M:%S%.f %:z")),
            SqlValue::Xml(s) => write!(f, "{}", s),
        }
    }
}
