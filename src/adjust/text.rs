//! Character-string coercion.
//!
//! char and nchar right-pad short values with spaces up to max length.
//! Independently of padding, any value longer than a concrete max length is
//! right-truncated, so an oversized value assigned to a fixed-length column
//! is clipped rather than rejected. Var-length kinds only truncate.

use tracing::trace;

use crate::error::{Error, Result};
use crate::types::Descriptor;

impl Descriptor {
    fn check_text_kind(&self, value_type: &'static str) -> Result<()> {
        if self.kind().is_text() {
            Ok(())
        } else {
            Err(Error::invalid_type(self.kind(), value_type))
        }
    }

    /// Pad width for char/nchar columns, `None` for every other kind.
    fn pad_width(&self) -> Option<usize> {
        if self.kind().is_fixed_length_text() {
            self.length_limit()
        } else {
            None
        }
    }

    pub fn adjust_string(&self, value: String) -> Result<String> {
        self.check_text_kind("String")?;
        let mut value = value;
        let mut length = value.chars().count();

        if let Some(width) = self.pad_width() {
            if length < width {
                value.extend(std::iter::repeat(' ').take(width - length));
                trace!(from = length, to = width, "padded fixed-length text");
                length = width;
            }
        }
        if let Some(limit) = self.length_limit() {
            if length > limit {
                let cut = value
                    .char_indices()
                    .nth(limit)
                    .map(|(idx, _)| idx)
                    .unwrap_or(value.len());
                value.truncate(cut);
                trace!(from = length, to = limit, "truncated text");
            }
        }
        Ok(value)
    }

    pub fn adjust_chars(&self, value: Vec<char>) -> Result<Vec<char>> {
        self.check_text_kind("Chars")?;
        let mut value = value;

        if let Some(width) = self.pad_width() {
            if value.len() < width {
                value.resize(width, ' ');
            }
        }
        if let Some(limit) = self.length_limit() {
            if value.len() > limit {
                trace!(from = value.len(), to = limit, "truncated text");
                value.truncate(limit);
            }
        }
        Ok(value)
    }

    /// A single character fits char/nchar(1) and any var-length text
    /// column of at least one character.
    pub fn adjust_char(&self, value: char) -> Result<char> {
        let kind = self.kind();
        let fits = if kind.is_fixed_length_text() {
            self.max_length() == 1
        } else {
            kind.is_var_length_text() && (self.is_unlimited() || self.max_length() >= 1)
        };
        if !fits {
            return Err(Error::invalid_type(kind, "Char"));
        }
        Ok(value)
    }
}
