//! Value coercion against a descriptor.
//!
//! Each runtime value shape has its own `adjust_*` method on
//! [`Descriptor`]; [`Descriptor::adjust`] dispatches a [`SqlValue`] to the
//! right one.
//!
//! | Kind family | Module |
//! |-------------|--------|
//! | bit, integers, float, real, money, uniqueidentifier | `numeric` |
//! | char, nchar, varchar, nvarchar, text, ntext | `text` |
//! | binary, timestamp, varbinary, image | `binary` |
//! | decimal | `decimal` |
//! | datetime, smalldatetime, date, time, datetime2, datetimeoffset | `time` |
//!
//! structured, xml and sql_variant descriptors have no coercion rules and
//! reject every value.

mod binary;
mod decimal;
mod numeric;
mod text;
mod time;

pub(crate) use decimal::decimal_precision;
pub(crate) use time::infer_scale_from_ticks;

use crate::error::{Error, Result};
use crate::types::{Descriptor, SqlKind, SqlNullType, SqlValue};

impl Descriptor {
    /// Validate `value` against this descriptor and return it adjusted
    /// (padded, truncated or rescaled) to fit.
    ///
    /// Unsigned integers wider than a byte and `i8` are rejected with
    /// `UnsupportedRuntimeType` whatever the kind. An untyped NULL passes
    /// through unchanged.
    pub fn adjust(&self, value: SqlValue) -> Result<SqlValue> {
        let kind = self.kind();
        let adjusted = match value {
            other @ (SqlValue::I8(_) | SqlValue::U16(_) | SqlValue::U32(_) | SqlValue::U64(_)) => {
                return Err(Error::unsupported_runtime_type(other.type_name()));
            }
            _ if matches!(
                kind,
                SqlKind::Structured | SqlKind::Xml | SqlKind::Variant | SqlKind::Udt
            ) =>
            {
                return Err(Error::UnsupportedKind { kind });
            }
            SqlValue::Null(shape) => {
                self.adjust_null(shape)?;
                SqlValue::Null(shape)
            }
            SqlValue::Bool(v) => SqlValue::Bool(self.adjust_bool(v)?),
            SqlValue::U8(v) => SqlValue::U8(self.adjust_u8(v)?),
            SqlValue::I16(v) => SqlValue::I16(self.adjust_i16(v)?),
            SqlValue::I32(v) => SqlValue::I32(self.adjust_i32(v)?),
            SqlValue::I64(v) => SqlValue::I64(self.adjust_i64(v)?),
            SqlValue::F32(v) => SqlValue::F32(self.adjust_f32(v)?),
            SqlValue::F64(v) => SqlValue::F64(self.adjust_f64(v)?),
            SqlValue::Char(c) => SqlValue::Char(self.adjust_char(c)?),
            SqlValue::String(s) => SqlValue::String(self.adjust_string(s)?),
            SqlValue::Chars(chars) => SqlValue::Chars(self.adjust_chars(chars)?),
            SqlValue::Binary(bytes) => SqlValue::Binary(self.adjust_binary(bytes)?),
            SqlValue::Guid(g) => SqlValue::Guid(self.adjust_guid(g)?),
            SqlValue::Decimal(d) => SqlValue::Decimal(self.adjust_decimal(d)?),
            SqlValue::Money(m) => SqlValue::Money(self.adjust_money(m)?),
            SqlValue::DateTime(dt) => SqlValue::DateTime(self.adjust_datetime(dt)?),
            SqlValue::Time(span) => SqlValue::Time(self.adjust_time(span)?),
            SqlValue::DateTimeOffset(dto) => {
                SqlValue::DateTimeOffset(self.adjust_datetime_offset(dto)?)
            }
            SqlValue::Xml(_) => return Err(Error::invalid_type(kind, "Xml")),
        };
        Ok(adjusted)
    }

    /// A typed NULL must still match the kind; an untyped one always does.
    fn adjust_null(&self, shape: SqlNullType) -> Result<()> {
        let kind = self.kind();
        let accepted = match shape {
            SqlNullType::Untyped => true,
            SqlNullType::Bool => kind == SqlKind::Bit,
            SqlNullType::U8 => kind == SqlKind::TinyInt,
            SqlNullType::I16 => kind == SqlKind::SmallInt,
            SqlNullType::I32 => kind == SqlKind::Int,
            SqlNullType::I64 => kind == SqlKind::BigInt,
            SqlNullType::F32 => kind == SqlKind::Real,
            SqlNullType::F64 => kind == SqlKind::Float,
            SqlNullType::String => kind.is_text(),
            SqlNullType::Binary => kind.is_binary(),
            SqlNullType::Guid => kind == SqlKind::UniqueIdentifier,
            SqlNullType::Decimal => matches!(
                kind,
                SqlKind::Decimal | SqlKind::Money | SqlKind::SmallMoney
            ),
            SqlNullType::Money => matches!(kind, SqlKind::Money | SqlKind::SmallMoney),
            SqlNullType::DateTime => matches!(
                kind,
                SqlKind::DateTime | SqlKind::SmallDateTime | SqlKind::DateTime2 | SqlKind::Date
            ),
            // xml descriptors are rejected before coercion
            SqlNullType::Xml => false,
        };
        if accepted {
            Ok(())
        } else {
            Err(Error::invalid_type(kind, "TypedNull"))
        }
    }

    /// Fail unless the descriptor is exactly `expected`.
    pub(crate) fn expect_kind(&self, expected: SqlKind, value_type: &'static str) -> Result<()> {
        if self.kind() != expected {
            return Err(Error::invalid_type(self.kind(), value_type));
        }
        Ok(())
    }

    /// Concrete max length as `usize`, `None` when unlimited.
    pub(crate) fn length_limit(&self) -> Option<usize> {
        if self.is_unlimited() {
            None
        } else {
            Some(self.max_length().max(0) as usize)
        }
    }
}
