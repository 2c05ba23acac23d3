//! Integration tests for the coercion and inference guarantees of the
//! public API.

use std::str::FromStr;

use chrono::Duration;
use rust_decimal::Decimal;
use sql_metadata_rs::{Descriptor, Error, SqlKind, SqlValue};

fn sized(kind: SqlKind, max_length: i64) -> Descriptor {
    Descriptor::builder(kind).max_length(max_length).build().unwrap()
}

fn text_len(value: &SqlValue) -> usize {
    match value {
        SqlValue::String(s) => s.chars().count(),
        SqlValue::Binary(b) => b.len(),
        other => panic!("Expected text or binary, got {:?}", other),
    }
}

#[test]
fn test_fixed_length_padding_is_idempotent() {
    for kind in [SqlKind::Char, SqlKind::NChar] {
        for length in [1, 5, 40] {
            let d = sized(kind, length);
            let exact = "q".repeat(length as usize);
            let adjusted = d.adjust(SqlValue::String(exact.clone())).unwrap();
            assert_eq!(adjusted, SqlValue::String(exact), "{} length {}", kind, length);
        }
    }
}

#[test]
fn test_truncation_yields_exact_max_length() {
    let cases = [
        (SqlKind::Char, 3),
        (SqlKind::NChar, 3),
        (SqlKind::VarChar, 10),
        (SqlKind::NVarChar, 10),
    ];
    for (kind, length) in cases {
        let d = sized(kind, length);
        let adjusted = d.adjust(SqlValue::String("z".repeat(50))).unwrap();
        assert_eq!(text_len(&adjusted), length as usize, "{}", kind);
    }
    for kind in [SqlKind::Binary, SqlKind::VarBinary] {
        let d = sized(kind, 6);
        let adjusted = d.adjust(SqlValue::Binary(vec![1; 50])).unwrap();
        assert_eq!(text_len(&adjusted), 6, "{}", kind);
    }
}

#[test]
fn test_unlimited_never_truncates() {
    let descriptors = [
        sized(SqlKind::VarChar, -1),
        sized(SqlKind::NVarChar, -1),
        Descriptor::default_for(SqlKind::Text).unwrap(),
        Descriptor::default_for(SqlKind::NText).unwrap(),
    ];
    for d in &descriptors {
        for length in [0, 1, 10_000] {
            let adjusted = d.adjust(SqlValue::String("a".repeat(length))).unwrap();
            assert_eq!(text_len(&adjusted), length, "{} length {}", d.kind(), length);
        }
    }

    let binaries = [
        sized(SqlKind::VarBinary, -1),
        Descriptor::default_for(SqlKind::Image).unwrap(),
    ];
    for d in &binaries {
        for length in [0, 1, 10_000] {
            let adjusted = d.adjust(SqlValue::Binary(vec![3; length])).unwrap();
            assert_eq!(text_len(&adjusted), length, "{} length {}", d.kind(), length);
        }
    }
}

#[test]
fn test_decimal_rescale_truncates() {
    let d = Descriptor::builder(SqlKind::Decimal)
        .precision(5)
        .scale(2)
        .build()
        .unwrap();
    let adjusted = d
        .adjust(SqlValue::Decimal(Decimal::from_str("1.239").unwrap()))
        .unwrap();
    assert_eq!(adjusted, SqlValue::Decimal(Decimal::from_str("1.23").unwrap()));
}

#[test]
fn test_time_truncation_by_scale() {
    let span = Duration::nanoseconds(1_234_567_800);

    let ms = Descriptor::builder(SqlKind::Time).scale(3).build().unwrap();
    assert_eq!(
        ms.adjust(SqlValue::Time(span)).unwrap(),
        SqlValue::Time(Duration::milliseconds(1234))
    );

    let whole = Descriptor::builder(SqlKind::Time).scale(0).build().unwrap();
    assert_eq!(
        whole.adjust(SqlValue::Time(span)).unwrap(),
        SqlValue::Time(Duration::seconds(1))
    );
}

#[test]
fn test_inferred_text_length_round_trip() {
    for length in [1, 2, 100, 3999, 4000] {
        let d = Descriptor::infer(&SqlValue::String("v".repeat(length)), "p").unwrap();
        assert_eq!(d.max_length(), length as i64);
    }
    for length in [4001, 9000] {
        let d = Descriptor::infer(&SqlValue::String("v".repeat(length)), "p").unwrap();
        assert_eq!(d.max_length(), -1);
        assert!(d.is_unlimited());
    }
}

#[test]
fn test_decimal_band_table() {
    for (precision, expected) in [(9, 5), (10, 9), (28, 13), (29, 17)] {
        let d = Descriptor::builder(SqlKind::Decimal)
            .precision(precision)
            .build()
            .unwrap();
        assert_eq!(d.max_length(), expected, "precision {}", precision);
    }
}

#[test]
fn test_range_rejection() {
    for precision in [0, 39] {
        assert_eq!(
            Descriptor::builder(SqlKind::Decimal).precision(precision).build(),
            Err(Error::PrecisionOutOfRange { precision })
        );
    }

    let small_money = Descriptor::default_for(SqlKind::SmallMoney).unwrap();
    let result = small_money.adjust(SqlValue::Money(Decimal::from_str("300000.0").unwrap()));
    assert!(matches!(result, Err(Error::InvalidType { .. })));
}

#[test]
fn test_kind_and_shape_blacklists() {
    assert_eq!(
        Descriptor::builder(SqlKind::Udt).build(),
        Err(Error::UnsupportedKind { kind: SqlKind::Udt })
    );

    for kind in SqlKind::ALL {
        let Ok(d) = Descriptor::builder(kind).max_length(10).build() else {
            continue;
        };
        assert_eq!(
            d.adjust(SqlValue::U32(7)),
            Err(Error::UnsupportedRuntimeType { type_name: "UInt32" }),
            "{}",
            kind
        );
    }
}
