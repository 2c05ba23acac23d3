//! Closed catalog of column kinds.
//!
//! Every piece of construction, coercion and inference logic switches on
//! this enum, so adding a kind is a compile error until every match
//! handles it.

use std::fmt;

/// Column data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlKind {
    /// 64-bit signed integer.
    BigInt,
    /// Fixed-length binary.
    Binary,
    /// Single bit (logical).
    Bit,
    /// Fixed-length narrow text.
    Char,
    /// Date and time, 3.33 ms resolution.
    DateTime,
    /// Exact decimal with precision and scale.
    Decimal,
    /// 64-bit floating point.
    Float,
    /// Large-object binary (unlimited).
    Image,
    /// 32-bit signed integer.
    Int,
    /// Currency, 8 bytes.
    Money,
    /// Fixed-length national text.
    NChar,
    /// Large-object national text (unlimited).
    NText,
    /// Variable-length national text.
    NVarChar,
    /// 32-bit floating point.
    Real,
    /// 16-byte unique identifier.
    UniqueIdentifier,
    /// Date and time, minute resolution, narrow range.
    SmallDateTime,
    /// 16-bit signed integer.
    SmallInt,
    /// Currency, 4 bytes.
    SmallMoney,
    /// Large-object narrow text (unlimited).
    Text,
    /// Row version, 8 bytes of fixed binary.
    Timestamp,
    /// 8-bit unsigned integer.
    TinyInt,
    /// Variable-length binary.
    VarBinary,
    /// Variable-length narrow text.
    VarChar,
    /// Dynamically typed cell.
    Variant,
    /// XML document, optionally schema-bound.
    Xml,
    /// User-defined CLR type. Never constructible.
    Udt,
    /// Ordered tuple of field descriptors, optionally multi-row.
    Structured,
    /// Date without time of day.
    Date,
    /// Time of day with fractional-second scale.
    Time,
    /// Date and time with fractional-second scale.
    DateTime2,
    /// Date and time with zone offset and fractional-second scale.
    DateTimeOffset,
}

impl SqlKind {
    /// All kinds, in default-table order.
    pub const ALL: [SqlKind; 31] = [
        SqlKind::BigInt,
        SqlKind::Binary,
        SqlKind::Bit,
        SqlKind::Char,
        SqlKind::DateTime,
        SqlKind::Decimal,
        SqlKind::Float,
        SqlKind::Image,
        SqlKind::Int,
        SqlKind::Money,
        SqlKind::NChar,
        SqlKind::NText,
        SqlKind::NVarChar,
        SqlKind::Real,
        SqlKind::UniqueIdentifier,
        SqlKind::SmallDateTime,
        SqlKind::SmallInt,
        SqlKind::SmallMoney,
        SqlKind::Text,
        SqlKind::Timestamp,
        SqlKind::TinyInt,
        SqlKind::VarBinary,
        SqlKind::VarChar,
        SqlKind::Variant,
        SqlKind::Xml,
        SqlKind::Udt,
        SqlKind::Structured,
        SqlKind::Date,
        SqlKind::Time,
        SqlKind::DateTime2,
        SqlKind::DateTimeOffset,
    ];

    /// Canonical server type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlKind::BigInt => "bigint",
            SqlKind::Binary => "binary",
            SqlKind::Bit => "bit",
            SqlKind::Char => "char",
            SqlKind::DateTime => "datetime",
            SqlKind::Decimal => "decimal",
            SqlKind::Float => "float",
            SqlKind::Image => "image",
            SqlKind::Int => "int",
            SqlKind::Money => "money",
            SqlKind::NChar => "nchar",
            SqlKind::NText => "ntext",
            SqlKind::NVarChar => "nvarchar",
            SqlKind::Real => "real",
            SqlKind::UniqueIdentifier => "uniqueidentifier",
            SqlKind::SmallDateTime => "smalldatetime",
            SqlKind::SmallInt => "smallint",
            SqlKind::SmallMoney => "smallmoney",
            SqlKind::Text => "text",
            SqlKind::Timestamp => "timestamp",
            SqlKind::TinyInt => "tinyint",
            SqlKind::VarBinary => "varbinary",
            SqlKind::VarChar => "varchar",
            SqlKind::Variant => "sql_variant",
            SqlKind::Xml => "xml",
            SqlKind::Udt => "udt",
            SqlKind::Structured => "table",
            SqlKind::Date => "date",
            SqlKind::Time => "time",
            SqlKind::DateTime2 => "datetime2",
            SqlKind::DateTimeOffset => "datetimeoffset",
        }
    }

    /// Look up a kind by its server type name (case-insensitive).
    pub fn from_type_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.iter().copied().find(|k| k.type_name() == lower)
    }

    /// char, nchar.
    pub fn is_fixed_length_text(&self) -> bool {
        matches!(self, SqlKind::Char | SqlKind::NChar)
    }

    /// varchar, nvarchar, text, ntext.
    pub fn is_var_length_text(&self) -> bool {
        matches!(
            self,
            SqlKind::VarChar | SqlKind::NVarChar | SqlKind::Text | SqlKind::NText
        )
    }

    /// Any kind whose values are character strings.
    pub fn is_text(&self) -> bool {
        self.is_fixed_length_text() || self.is_var_length_text()
    }

    /// binary, timestamp.
    pub fn is_fixed_length_binary(&self) -> bool {
        matches!(self, SqlKind::Binary | SqlKind::Timestamp)
    }

    /// varbinary, image.
    pub fn is_var_length_binary(&self) -> bool {
        matches!(self, SqlKind::VarBinary | SqlKind::Image)
    }

    /// Any kind whose values are byte strings.
    pub fn is_binary(&self) -> bool {
        self.is_fixed_length_binary() || self.is_var_length_binary()
    }

    /// nchar, nvarchar, ntext.
    pub fn is_national(&self) -> bool {
        matches!(self, SqlKind::NChar | SqlKind::NVarChar | SqlKind::NText)
    }

    /// text, ntext, image: always unlimited.
    pub fn is_large_object(&self) -> bool {
        matches!(self, SqlKind::Text | SqlKind::NText | SqlKind::Image)
    }

    /// time, datetime2, datetimeoffset: carry a fractional-second scale.
    pub fn is_time_family(&self) -> bool {
        matches!(
            self,
            SqlKind::Time | SqlKind::DateTime2 | SqlKind::DateTimeOffset
        )
    }

    /// Kinds that may use the unlimited max length sentinel.
    pub fn allows_unlimited_length(&self) -> bool {
        self.is_large_object()
            || matches!(
                self,
                SqlKind::VarChar | SqlKind::NVarChar | SqlKind::VarBinary | SqlKind::Xml
            )
    }

    /// Largest concrete max length for sized text and binary kinds.
    pub fn concrete_length_limit(&self) -> Option<i64> {
        use crate::constants::{MAX_ANSI_LENGTH, MAX_BINARY_LENGTH, MAX_UNICODE_LENGTH};
        match self {
            SqlKind::NChar | SqlKind::NVarChar => Some(MAX_UNICODE_LENGTH),
            SqlKind::Char | SqlKind::VarChar => Some(MAX_ANSI_LENGTH),
            SqlKind::Binary | SqlKind::VarBinary => Some(MAX_BINARY_LENGTH),
            _ => None,
        }
    }
}

impl fmt::Display for SqlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
