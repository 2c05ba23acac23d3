//! Per-kind default attributes.
//!
//! One canonical entry per kind, in `SqlKind::ALL` order. Consulted to seed
//! every new descriptor and to answer default queries.

use super::compare::CompareOptions;
use super::kind::SqlKind;
use crate::constants::MAX_LENGTH_UNLIMITED;

/// Default attributes of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindDefaults {
    pub kind: SqlKind,
    pub max_length: i64,
    pub precision: u8,
    pub scale: u8,
    pub locale_id: i64,
    pub compare_options: CompareOptions,
    pub partial_length: bool,
}

const fn entry(
    kind: SqlKind,
    max_length: i64,
    precision: u8,
    scale: u8,
    compare_options: CompareOptions,
) -> KindDefaults {
    KindDefaults {
        kind,
        max_length,
        precision,
        scale,
        locale_id: 0,
        compare_options,
        partial_length: false,
    }
}

const NO_CMP: CompareOptions = CompareOptions::NONE;
const STR_CMP: CompareOptions = CompareOptions::DEFAULT_STRING;

static DEFAULTS: [KindDefaults; 31] = [
    entry(SqlKind::BigInt, 8, 19, 0, NO_CMP),
    entry(SqlKind::Binary, 1, 0, 0, NO_CMP),
    entry(SqlKind::Bit, 1, 1, 0, NO_CMP),
    entry(SqlKind::Char, 1, 0, 0, STR_CMP),
    entry(SqlKind::DateTime, 8, 23, 3, NO_CMP),
    entry(SqlKind::Decimal, 9, 18, 0, NO_CMP),
    entry(SqlKind::Float, 8, 53, 0, NO_CMP),
    entry(SqlKind::Image, MAX_LENGTH_UNLIMITED, 0, 0, NO_CMP),
    entry(SqlKind::Int, 4, 10, 0, NO_CMP),
    entry(SqlKind::Money, 8, 19, 4, NO_CMP),
    entry(SqlKind::NChar, 1, 0, 0, STR_CMP),
    entry(SqlKind::NText, MAX_LENGTH_UNLIMITED, 0, 0, STR_CMP),
    entry(SqlKind::NVarChar, 4000, 0, 0, STR_CMP),
    entry(SqlKind::Real, 4, 24, 0, NO_CMP),
    entry(SqlKind::UniqueIdentifier, 16, 0, 0, NO_CMP),
    entry(SqlKind::SmallDateTime, 4, 16, 0, NO_CMP),
    entry(SqlKind::SmallInt, 2, 5, 0, NO_CMP),
    entry(SqlKind::SmallMoney, 4, 10, 4, NO_CMP),
    entry(SqlKind::Text, MAX_LENGTH_UNLIMITED, 0, 0, STR_CMP),
    entry(SqlKind::Timestamp, 8, 0, 0, NO_CMP),
    entry(SqlKind::TinyInt, 1, 3, 0, NO_CMP),
    entry(SqlKind::VarBinary, 8000, 0, 0, NO_CMP),
    entry(SqlKind::VarChar, 8000, 0, 0, STR_CMP),
    entry(SqlKind::Variant, 8016, 0, 0, NO_CMP),
    KindDefaults {
        kind: SqlKind::Xml,
        max_length: MAX_LENGTH_UNLIMITED,
        precision: 0,
        scale: 0,
        locale_id: 0,
        compare_options: STR_CMP,
        partial_length: true,
    },
    entry(SqlKind::Udt, 0, 0, 0, NO_CMP),
    entry(SqlKind::Structured, 0, 0, 0, NO_CMP),
    entry(SqlKind::Date, 3, 10, 0, NO_CMP),
    entry(SqlKind::Time, 5, 0, 7, NO_CMP),
    entry(SqlKind::DateTime2, 8, 0, 7, NO_CMP),
    entry(SqlKind::DateTimeOffset, 10, 0, 7, NO_CMP),
];

impl KindDefaults {
    /// Default attributes for `kind`.
    pub fn for_kind(kind: SqlKind) -> &'static KindDefaults {
        &DEFAULTS[kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_kind_order() {
        for (i, kind) in SqlKind::ALL.iter().enumerate() {
            assert_eq!(DEFAULTS[i].kind, *kind);
            assert_eq!(KindDefaults::for_kind(*kind).kind, *kind);
        }
    }

    #[test]
    fn test_selected_defaults() {
        let dec = KindDefaults::for_kind(SqlKind::Decimal);
        assert_eq!((dec.max_length, dec.precision, dec.scale), (9, 18, 0));

        let nvarchar = KindDefaults::for_kind(SqlKind::NVarChar);
        assert_eq!(nvarchar.max_length, 4000);
        assert_eq!(nvarchar.compare_options, CompareOptions::DEFAULT_STRING);

        let dto = KindDefaults::for_kind(SqlKind::DateTimeOffset);
        assert_eq!((dto.max_length, dto.scale), (10, 7));

        assert!(KindDefaults::for_kind(SqlKind::Xml).partial_length);
        assert!(!KindDefaults::for_kind(SqlKind::VarChar).partial_length);
    }
}
