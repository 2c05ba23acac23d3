//! Decimal coercion.
//!
//! A value whose scale differs from the column's is first rescaled by
//! truncation toward zero (never rounding), then checked against the
//! column precision. Values with more integer digits than
//! `precision - scale` cannot be represented and are rejected.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

use crate::error::{Error, Result};
use crate::types::{Descriptor, SqlKind};

/// Largest scale a `rust_decimal::Decimal` can carry.
const MAX_VALUE_SCALE: u32 = 28;

fn digit_count(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Precision of a decimal value: its significant digits, never less than
/// its scale.
pub(crate) fn decimal_precision(value: &Decimal) -> u8 {
    let digits = digit_count(value.mantissa().unsigned_abs());
    digits.max(value.scale()) as u8
}

/// Digits to the left of the decimal point (0 for |value| < 1).
fn integer_digits(value: &Decimal) -> u32 {
    if value.trunc().is_zero() {
        return 0;
    }
    digit_count(value.mantissa().unsigned_abs()).saturating_sub(value.scale())
}

impl Descriptor {
    /// Decimal value for a decimal, money or smallmoney column.
    ///
    /// For decimal columns the value is truncated to the column scale.
    /// `Decimal` holds at most 28 fractional digits, so columns with a
    /// larger scale receive values at scale 28. A value whose mantissa
    /// cannot be widened to the column scale fails with `InvalidType`.
    pub fn adjust_decimal(&self, value: Decimal) -> Result<Decimal> {
        match self.kind() {
            SqlKind::Decimal => self.rescale_decimal(value),
            SqlKind::Money | SqlKind::SmallMoney => {
                self.verify_money_range(value, "Decimal")?;
                Ok(value)
            }
            kind => Err(Error::invalid_type(kind, "Decimal")),
        }
    }

    fn rescale_decimal(&self, value: Decimal) -> Result<Decimal> {
        let target_scale = (self.scale() as u32).min(MAX_VALUE_SCALE);
        let mut adjusted = value;
        if adjusted.scale() != target_scale {
            if adjusted.scale() > target_scale {
                adjusted = adjusted.round_dp_with_strategy(target_scale, RoundingStrategy::ToZero);
            }
            adjusted.rescale(target_scale);
            if adjusted.scale() != target_scale {
                return Err(Error::invalid_type(self.kind(), "Decimal"));
            }
            trace!(
                from_scale = value.scale(),
                to_scale = target_scale,
                "rescaled decimal value"
            );
        }

        let allowed = self.precision() as u32 - self.scale() as u32;
        if integer_digits(&adjusted) > allowed {
            return Err(Error::invalid_type(self.kind(), "Decimal"));
        }
        Ok(adjusted)
    }
}
