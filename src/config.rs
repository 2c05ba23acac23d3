//! Host-supplied environment for descriptor construction.

use crate::constants::DEFAULT_LOCALE_ID;

/// Resolves the locale id stamped onto text and variant descriptors built
/// without an explicit locale.
pub trait LocaleProvider {
    /// Locale id of the current culture.
    fn current_locale_id(&self) -> i64;
}

/// Options for building descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOptions {
    /// Locale id of the host's current culture (default: 1033, en-US).
    pub locale_id: i64,
}

impl MetadataOptions {
    /// Create options with the default locale.
    pub fn new() -> Self {
        Self {
            locale_id: DEFAULT_LOCALE_ID,
        }
    }

    /// Set the current-culture locale id.
    ///
    /// # Example
    ///
    /// ```
    /// use sql_metadata_rs::{Descriptor, MetadataOptions, SqlKind};
    ///
    /// let options = MetadataOptions::new().with_locale_id(1031);
    /// let d = Descriptor::builder(SqlKind::NVarChar)
    ///     .max_length(20)
    ///     .options(&options)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(d.locale_id(), 1031);
    /// ```
    pub fn with_locale_id(mut self, locale_id: i64) -> Self {
        self.locale_id = locale_id;
        self
    }
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleProvider for MetadataOptions {
    fn current_locale_id(&self) -> i64 {
        self.locale_id
    }
}
