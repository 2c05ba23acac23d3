//! Exact-numeric, logical, money and unique-identifier coercion.
//!
//! The runtime shape must map 1:1 onto the kind; values pass through
//! untouched. smallmoney additionally enforces its range.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::{Descriptor, SqlKind};

/// Smallest smallmoney value (-214748.3648).
pub(crate) fn small_money_min() -> Decimal {
    Decimal::new(-2_147_483_648, 4)
}

/// Largest smallmoney value (214748.3647).
pub(crate) fn small_money_max() -> Decimal {
    Decimal::new(2_147_483_647, 4)
}

impl Descriptor {
    pub fn adjust_bool(&self, value: bool) -> Result<bool> {
        self.expect_kind(SqlKind::Bit, "Boolean")?;
        Ok(value)
    }

    pub fn adjust_u8(&self, value: u8) -> Result<u8> {
        self.expect_kind(SqlKind::TinyInt, "Byte")?;
        Ok(value)
    }

    pub fn adjust_i16(&self, value: i16) -> Result<i16> {
        self.expect_kind(SqlKind::SmallInt, "Int16")?;
        Ok(value)
    }

    pub fn adjust_i32(&self, value: i32) -> Result<i32> {
        self.expect_kind(SqlKind::Int, "Int32")?;
        Ok(value)
    }

    pub fn adjust_i64(&self, value: i64) -> Result<i64> {
        self.expect_kind(SqlKind::BigInt, "Int64")?;
        Ok(value)
    }

    pub fn adjust_f32(&self, value: f32) -> Result<f32> {
        self.expect_kind(SqlKind::Real, "Single")?;
        Ok(value)
    }

    pub fn adjust_f64(&self, value: f64) -> Result<f64> {
        self.expect_kind(SqlKind::Float, "Double")?;
        Ok(value)
    }

    pub fn adjust_guid(&self, value: Uuid) -> Result<Uuid> {
        self.expect_kind(SqlKind::UniqueIdentifier, "Guid")?;
        Ok(value)
    }

    /// Money value for a money or smallmoney column.
    pub fn adjust_money(&self, value: Decimal) -> Result<Decimal> {
        match self.kind() {
            SqlKind::Money | SqlKind::SmallMoney => {
                self.verify_money_range(value, "Money")?;
                Ok(value)
            }
            kind => Err(Error::invalid_type(kind, "Money")),
        }
    }

    /// smallmoney values must lie within [-214748.3648, 214748.3647].
    pub(crate) fn verify_money_range(&self, value: Decimal, value_type: &'static str) -> Result<()> {
        if self.kind() == SqlKind::SmallMoney
            && (value < small_money_min() || value > small_money_max())
        {
            return Err(Error::invalid_type(self.kind(), value_type));
        }
        Ok(())
    }
}
