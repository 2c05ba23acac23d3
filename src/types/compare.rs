//! Text comparison flags and table-valued-parameter sort order.

use std::fmt;
use std::ops::BitOr;

use crate::error::{Error, Result};

/// Flag set controlling text comparison semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompareOptions(u32);

impl CompareOptions {
    pub const NONE: CompareOptions = CompareOptions(0);
    pub const IGNORE_CASE: CompareOptions = CompareOptions(0x0001);
    pub const IGNORE_NON_SPACE: CompareOptions = CompareOptions(0x0002);
    pub const IGNORE_KANA_TYPE: CompareOptions = CompareOptions(0x0008);
    pub const IGNORE_WIDTH: CompareOptions = CompareOptions(0x0010);
    pub const BINARY_SORT2: CompareOptions = CompareOptions(0x4000);
    pub const BINARY_SORT: CompareOptions = CompareOptions(0x8000);

    /// Default options for text columns: ignore case, kana type and width.
    pub const DEFAULT_STRING: CompareOptions = CompareOptions(0x0001 | 0x0008 | 0x0010);

    const IGNORE_MASK: u32 = 0x0001 | 0x0002 | 0x0008 | 0x0010;

    /// Create from raw bits. Not validated.
    pub const fn from_bits(bits: u32) -> Self {
        CompareOptions(bits)
    }

    /// Raw bits.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set.
    pub fn contains(&self, other: CompareOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Accepts exactly binary sort, or any subset of the ignore-* flags.
    pub fn validate(self) -> Result<Self> {
        if self == Self::BINARY_SORT || self.0 & !Self::IGNORE_MASK == 0 {
            Ok(self)
        } else {
            Err(Error::InvalidCompareOptions { bits: self.0 })
        }
    }
}

impl BitOr for CompareOptions {
    type Output = CompareOptions;

    fn bitor(self, rhs: Self) -> Self::Output {
        CompareOptions(self.0 | rhs.0)
    }
}

impl fmt::Display for CompareOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names = [
            (Self::IGNORE_CASE, "IgnoreCase"),
            (Self::IGNORE_NON_SPACE, "IgnoreNonSpace"),
            (Self::IGNORE_KANA_TYPE, "IgnoreKanaType"),
            (Self::IGNORE_WIDTH, "IgnoreWidth"),
            (Self::BINARY_SORT2, "BinarySort2"),
            (Self::BINARY_SORT, "BinarySort"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", set.join(" | "))
    }
}

/// Sort order of a table-valued-parameter column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Unspecified,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Sort order and ordinal come as a pair: unspecified exactly when the
    /// ordinal is -1.
    pub fn validate_with_ordinal(self, ordinal: i32) -> Result<()> {
        if (self == SortOrder::Unspecified) != (ordinal == -1) {
            return Err(Error::SortOrderMismatch {
                order: self,
                ordinal,
            });
        }
        Ok(())
    }
}
