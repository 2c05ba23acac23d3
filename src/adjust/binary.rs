//! Byte-string coercion.
//!
//! binary and timestamp copy short values into a zero-filled buffer of
//! exactly max length; oversized values are truncated. varbinary and image
//! only truncate, and never when max length is unlimited.

use tracing::trace;

use crate::error::{Error, Result};
use crate::types::Descriptor;

impl Descriptor {
    pub fn adjust_binary(&self, value: Vec<u8>) -> Result<Vec<u8>> {
        let kind = self.kind();
        if !kind.is_binary() {
            return Err(Error::invalid_type(kind, "Binary"));
        }
        let limit = self.length_limit();

        if kind.is_fixed_length_binary() {
            if let Some(width) = limit {
                if value.len() < width {
                    let mut padded = vec![0u8; width];
                    padded[..value.len()].copy_from_slice(&value);
                    trace!(from = value.len(), to = width, "zero-padded fixed-length binary");
                    return Ok(padded);
                }
            }
        }

        let mut value = value;
        if let Some(limit) = limit {
            if value.len() > limit {
                trace!(from = value.len(), to = limit, "truncated binary");
                value.truncate(limit);
            }
        }
        Ok(value)
    }
}
