//! Length limits and lookup tables shared by descriptor construction,
//! coercion and inference.
//!
//! These constants mirror the limits of the SQL Server type system.

/// Max length sentinel for large-object and streamed columns.
pub const MAX_LENGTH_UNLIMITED: i64 = -1;

// Concrete length limits
pub const MAX_UNICODE_LENGTH: i64 = 4000;
pub const MAX_ANSI_LENGTH: i64 = 8000;
pub const MAX_BINARY_LENGTH: i64 = 8000;

/// Maximum length of a column, parameter or type name part.
pub const MAX_NAME_LENGTH: usize = 128;

// Decimal limits
pub const MAX_DECIMAL_PRECISION: u8 = 38;
pub const MAX_DECIMAL_SCALE: u8 = 38;

/// Maximum fractional-second digits for time, datetime2 and datetimeoffset.
pub const MAX_TIME_SCALE: u8 = 7;

/// Default locale id (en-US) used when the host does not supply one.
pub const DEFAULT_LOCALE_ID: i64 = 1033;

// Time ticks (100 ns units)
pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const NANOS_PER_TICK: i64 = 100;

/// Largest tick count a time column accepts (23:59:59.9999999).
pub const TIME_MAX_TICKS: i64 = 863_999_999_999;

/// Storage length of a decimal, indexed by `precision - 1`.
///
/// Banded: 1-9 => 5, 10-19 => 9, 20-28 => 13, 29-38 => 17.
pub const MAX_LEN_FROM_PRECISION: [u8; 38] = [
    5, 5, 5, 5, 5, 5, 5, 5, 5, //
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, //
    13, 13, 13, 13, 13, 13, 13, 13, 13, //
    17, 17, 17, 17, 17, 17, 17, 17, 17, 17,
];

/// Bytes subtracted from the base length of a time-family column, indexed
/// by scale.
pub const TIME_LEN_OFFSET_FROM_SCALE: [u8; 8] = [2, 2, 2, 1, 1, 0, 0, 0];

/// Ticks per retained unit, indexed by scale.
pub const UNIT_TICKS_FROM_SCALE: [i64; 8] = [
    10_000_000, 1_000_000, 100_000, 10_000, 1_000, 100, 10, 1,
];
