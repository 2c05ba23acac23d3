//! Date and time coercion.
//!
//! Time-family kinds keep only `scale` fractional-second digits: the tick
//! count (100 ns units) is truncated to the unit implied by the scale.
//!
//! | Scale | Ticks per unit |
//! |-------|----------------|
//! | 0     | 10,000,000 (1 s) |
//! | 3     | 10,000 (1 ms) |
//! | 7     | 1 (100 ns) |

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

use crate::constants::{NANOS_PER_TICK, TIME_MAX_TICKS, UNIT_TICKS_FROM_SCALE};
use crate::error::{Error, Result};
use crate::types::{Descriptor, SqlKind};

/// smalldatetime range: [1899-12-31 23:59:29.999, 2079-06-06 23:59:29.998].
fn small_datetime_bounds() -> Option<(NaiveDateTime, NaiveDateTime)> {
    let min = NaiveDate::from_ymd_opt(1899, 12, 31)?.and_hms_milli_opt(23, 59, 29, 999)?;
    let max = NaiveDate::from_ymd_opt(2079, 6, 6)?.and_hms_milli_opt(23, 59, 29, 998)?;
    Some((min, max))
}

/// Smallest scale whose unit evenly divides `ticks`, 7 if none does.
pub(crate) fn infer_scale_from_ticks(ticks: i64) -> u8 {
    for scale in 0..7u8 {
        if ticks % UNIT_TICKS_FROM_SCALE[scale as usize] == 0 {
            return scale;
        }
    }
    7
}

/// Truncate a tick count to the unit of `scale`.
fn truncate_ticks(ticks: i64, scale: u8) -> i64 {
    let unit = UNIT_TICKS_FROM_SCALE[scale as usize];
    ticks / unit * unit
}

/// Truncate the sub-second nanoseconds of a timestamp to the unit of `scale`.
fn truncate_nanos(nanos: u32, scale: u8) -> u32 {
    let unit = (UNIT_TICKS_FROM_SCALE[scale as usize] * NANOS_PER_TICK) as u32;
    nanos / unit * unit
}

impl Descriptor {
    /// Date-time value for datetime, smalldatetime, datetime2 or date.
    ///
    /// datetime passes through, smalldatetime is range-checked, datetime2
    /// is truncated to the column scale and date drops the time of day.
    pub fn adjust_datetime(&self, value: NaiveDateTime) -> Result<NaiveDateTime> {
        let kind = self.kind();
        match kind {
            SqlKind::DateTime => Ok(value),
            SqlKind::SmallDateTime => {
                let in_range = small_datetime_bounds()
                    .map(|(min, max)| value >= min && value <= max)
                    .unwrap_or(false);
                if in_range {
                    Ok(value)
                } else {
                    Err(Error::invalid_type(kind, "DateTime"))
                }
            }
            SqlKind::DateTime2 => value
                .with_nanosecond(truncate_nanos(value.nanosecond(), self.scale()))
                .ok_or_else(|| Error::invalid_type(kind, "DateTime")),
            SqlKind::Date => value
                .date()
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| Error::invalid_type(kind, "DateTime")),
            _ => Err(Error::invalid_type(kind, "DateTime")),
        }
    }

    /// Time span for a time column: must lie within one day, then is
    /// truncated to the column scale.
    pub fn adjust_time(&self, value: Duration) -> Result<Duration> {
        self.expect_kind(SqlKind::Time, "TimeSpan")?;
        let max = Duration::nanoseconds(TIME_MAX_TICKS * NANOS_PER_TICK);
        if value < Duration::zero() || value > max {
            return Err(Error::invalid_type(SqlKind::Time, "TimeSpan"));
        }
        let ticks = value.num_nanoseconds().unwrap_or_default() / NANOS_PER_TICK;
        Ok(Duration::nanoseconds(
            truncate_ticks(ticks, self.scale()) * NANOS_PER_TICK,
        ))
    }

    /// Zoned timestamp for a datetimeoffset column: truncated to the column
    /// scale, offset preserved.
    pub fn adjust_datetime_offset(
        &self,
        value: DateTime<FixedOffset>,
    ) -> Result<DateTime<FixedOffset>> {
        self.expect_kind(SqlKind::DateTimeOffset, "DateTimeOffset")?;
        value
            .with_nanosecond(truncate_nanos(value.nanosecond(), self.scale()))
            .ok_or_else(|| Error::invalid_type(SqlKind::DateTimeOffset, "DateTimeOffset"))
    }
}
