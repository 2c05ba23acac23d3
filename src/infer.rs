//! Descriptor inference from a runtime value.

use chrono::Timelike;
use tracing::debug;

use crate::adjust::{decimal_precision, infer_scale_from_ticks};
use crate::constants::{
    MAX_BINARY_LENGTH, MAX_LENGTH_UNLIMITED, MAX_UNICODE_LENGTH, NANOS_PER_TICK,
};
use crate::error::{Error, Result};
use crate::types::{Descriptor, SqlKind, SqlNullType, SqlValue};

/// `max(1, length)`, or the unlimited sentinel past `limit`.
fn clamp_length(length: usize, limit: i64) -> i64 {
    let length = length.max(1) as i64;
    if length > limit {
        MAX_LENGTH_UNLIMITED
    } else {
        length
    }
}

/// Kind whose defaults a typed NULL of `shape` stands for.
fn null_kind(shape: SqlNullType) -> Option<SqlKind> {
    let kind = match shape {
        SqlNullType::Untyped => return None,
        SqlNullType::Bool => SqlKind::Bit,
        SqlNullType::U8 => SqlKind::TinyInt,
        SqlNullType::I16 => SqlKind::SmallInt,
        SqlNullType::I32 => SqlKind::Int,
        SqlNullType::I64 => SqlKind::BigInt,
        SqlNullType::F32 => SqlKind::Real,
        SqlNullType::F64 => SqlKind::Float,
        SqlNullType::String => SqlKind::NVarChar,
        SqlNullType::Binary => SqlKind::VarBinary,
        SqlNullType::Guid => SqlKind::UniqueIdentifier,
        SqlNullType::Decimal => SqlKind::Decimal,
        SqlNullType::Money => SqlKind::Money,
        SqlNullType::DateTime => SqlKind::DateTime,
        SqlNullType::Xml => SqlKind::Xml,
    };
    Some(kind)
}

impl Descriptor {
    /// Pick a kind from the shape of `value` and derive its descriptor.
    ///
    /// Text infers nvarchar sized to the value (unlimited past 4000
    /// characters), bytes infer varbinary (unlimited past 8000), decimals
    /// carry their own precision and scale, and time spans and zoned
    /// timestamps get the smallest scale that represents them exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use sql_metadata_rs::{Descriptor, SqlKind, SqlValue};
    ///
    /// let d = Descriptor::infer(&SqlValue::String("hello".into()), "greeting").unwrap();
    /// assert_eq!(d.kind(), SqlKind::NVarChar);
    /// assert_eq!(d.max_length(), 5);
    /// ```
    pub fn infer(value: &SqlValue, name: &str) -> Result<Descriptor> {
        let builder = match value {
            SqlValue::Null(shape) => {
                let kind = null_kind(*shape).ok_or_else(|| Error::argument_required("value"))?;
                match kind {
                    SqlKind::NVarChar => Descriptor::builder(kind).max_length(MAX_UNICODE_LENGTH),
                    SqlKind::VarBinary => Descriptor::builder(kind).max_length(MAX_BINARY_LENGTH),
                    _ => Descriptor::builder(kind),
                }
            }
            SqlValue::I8(_) | SqlValue::U16(_) | SqlValue::U32(_) | SqlValue::U64(_) => {
                return Err(Error::unsupported_runtime_type(value.type_name()));
            }
            SqlValue::Bool(_) => Descriptor::builder(SqlKind::Bit),
            SqlValue::U8(_) => Descriptor::builder(SqlKind::TinyInt),
            SqlValue::I16(_) => Descriptor::builder(SqlKind::SmallInt),
            SqlValue::I32(_) => Descriptor::builder(SqlKind::Int),
            SqlValue::I64(_) => Descriptor::builder(SqlKind::BigInt),
            SqlValue::F32(_) => Descriptor::builder(SqlKind::Real),
            SqlValue::F64(_) => Descriptor::builder(SqlKind::Float),
            SqlValue::Guid(_) => Descriptor::builder(SqlKind::UniqueIdentifier),
            SqlValue::Char(_) => Descriptor::builder(SqlKind::NVarChar).max_length(1),
            SqlValue::String(s) => Descriptor::builder(SqlKind::NVarChar)
                .max_length(clamp_length(s.chars().count(), MAX_UNICODE_LENGTH)),
            SqlValue::Chars(chars) => Descriptor::builder(SqlKind::NVarChar)
                .max_length(clamp_length(chars.len(), MAX_UNICODE_LENGTH)),
            SqlValue::Binary(bytes) => Descriptor::builder(SqlKind::VarBinary)
                .max_length(clamp_length(bytes.len(), MAX_BINARY_LENGTH)),
            SqlValue::Decimal(d) => Descriptor::builder(SqlKind::Decimal)
                .precision(decimal_precision(d))
                .scale(d.scale() as u8),
            SqlValue::Money(_) => Descriptor::builder(SqlKind::Money),
            SqlValue::DateTime(_) => Descriptor::builder(SqlKind::DateTime),
            SqlValue::Time(span) => {
                let ticks = span.subsec_nanos() as i64 / NANOS_PER_TICK;
                Descriptor::builder(SqlKind::Time).scale(infer_scale_from_ticks(ticks))
            }
            SqlValue::DateTimeOffset(dto) => {
                let ticks = dto.nanosecond() as i64 / NANOS_PER_TICK;
                Descriptor::builder(SqlKind::DateTimeOffset).scale(infer_scale_from_ticks(ticks))
            }
            SqlValue::Xml(_) => Descriptor::builder(SqlKind::Xml),
        };

        let descriptor = builder.name(name).build()?;
        debug!(
            value_type = value.type_name(),
            kind = %descriptor.kind(),
            "inferred column descriptor"
        );
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, NaiveDate};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn infer(value: SqlValue) -> Descriptor {
        Descriptor::infer(&value, "col").unwrap()
    }

    #[test]
    fn test_exact_shapes_map_one_to_one() {
        let cases = [
            (SqlValue::Bool(true), SqlKind::Bit),
            (SqlValue::U8(1), SqlKind::TinyInt),
            (SqlValue::I16(1), SqlKind::SmallInt),
            (SqlValue::I32(1), SqlKind::Int),
            (SqlValue::I64(1), SqlKind::BigInt),
            (SqlValue::F32(1.0), SqlKind::Real),
            (SqlValue::F64(1.0), SqlKind::Float),
            (SqlValue::Guid(Uuid::nil()), SqlKind::UniqueIdentifier),
            (SqlValue::Money(Decimal::ONE), SqlKind::Money),
            (SqlValue::Xml("<a/>".to_string()), SqlKind::Xml),
        ];
        for (value, kind) in cases {
            let d = infer(value);
            assert_eq!(d.kind(), kind);
            assert_eq!(d, Descriptor::builder(kind).name("col").build().unwrap());
        }
    }

    #[test]
    fn test_text_lengths() {
        assert_eq!(infer(SqlValue::String(String::new())).max_length(), 1);
        assert_eq!(infer(SqlValue::String("abc".to_string())).max_length(), 3);
        assert_eq!(infer(SqlValue::String("x".repeat(4000))).max_length(), 4000);
        assert_eq!(infer(SqlValue::String("x".repeat(4001))).max_length(), -1);
        assert_eq!(infer(SqlValue::Chars(vec!['a'; 7])).max_length(), 7);

        let d = infer(SqlValue::Char('z'));
        assert_eq!((d.kind(), d.max_length()), (SqlKind::NVarChar, 1));
    }

    #[test]
    fn test_binary_lengths() {
        let d = infer(SqlValue::Binary(vec![]));
        assert_eq!((d.kind(), d.max_length()), (SqlKind::VarBinary, 1));
        assert_eq!(infer(SqlValue::Binary(vec![0; 8000])).max_length(), 8000);
        assert_eq!(infer(SqlValue::Binary(vec![0; 8001])).max_length(), -1);
    }

    #[test]
    fn test_decimal_carries_precision_and_scale() {
        let d = infer(SqlValue::Decimal(Decimal::from_str("123.45").unwrap()));
        assert_eq!((d.kind(), d.precision(), d.scale()), (SqlKind::Decimal, 5, 2));

        let d = infer(SqlValue::Decimal(Decimal::from_str("0.001").unwrap()));
        assert_eq!((d.precision(), d.scale()), (3, 3));
    }

    #[test]
    fn test_time_scale_inference() {
        let d = infer(SqlValue::Time(Duration::seconds(90)));
        assert_eq!((d.kind(), d.scale()), (SqlKind::Time, 0));

        let d = infer(SqlValue::Time(Duration::milliseconds(1500)));
        assert_eq!(d.scale(), 1);

        let d = infer(SqlValue::Time(Duration::nanoseconds(1_234_567_800)));
        assert_eq!(d.scale(), 7);
    }

    #[test]
    fn test_time_scale_inference_for_long_spans() {
        let d = infer(SqlValue::Time(Duration::days(200_000)));
        assert_eq!((d.kind(), d.scale()), (SqlKind::Time, 0));

        let span = Duration::days(200_000) + Duration::milliseconds(120);
        assert_eq!(infer(SqlValue::Time(span)).scale(), 2);
    }

    #[test]
    fn test_datetime_offset_scale_inference() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let value = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 250)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap();
        let d = infer(SqlValue::DateTimeOffset(value));
        assert_eq!((d.kind(), d.scale()), (SqlKind::DateTimeOffset, 2));
    }

    #[test]
    fn test_typed_null_defaults() {
        let d = infer(SqlValue::Null(SqlNullType::Decimal));
        assert_eq!((d.precision(), d.scale()), (18, 0));

        let d = infer(SqlValue::Null(SqlNullType::String));
        assert_eq!((d.kind(), d.max_length()), (SqlKind::NVarChar, 4000));

        let d = infer(SqlValue::Null(SqlNullType::Binary));
        assert_eq!((d.kind(), d.max_length()), (SqlKind::VarBinary, 8000));

        let d = infer(SqlValue::Null(SqlNullType::DateTime));
        assert_eq!(d.kind(), SqlKind::DateTime);
    }

    #[test]
    fn test_untyped_null_requires_value() {
        assert_eq!(
            Descriptor::infer(&SqlValue::NULL, "col"),
            Err(Error::argument_required("value"))
        );
    }

    #[test]
    fn test_blacklisted_shapes() {
        for value in [SqlValue::I8(1), SqlValue::U16(1), SqlValue::U32(1), SqlValue::U64(1)] {
            assert!(matches!(
                Descriptor::infer(&value, "col"),
                Err(Error::UnsupportedRuntimeType { .. })
            ));
        }
    }

    #[test]
    fn test_name_is_checked_and_kept() {
        let d = infer(SqlValue::I32(1));
        assert_eq!(d.name(), "col");
        let err = Descriptor::infer(&SqlValue::I32(1), &"n".repeat(129));
        assert!(matches!(err, Err(Error::NameTooLong { .. })));
    }
}
