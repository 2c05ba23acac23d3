//! SQL column metadata for Rust
//!
//! Descriptors for server column and parameter types, a coercion engine
//! that adjusts runtime values to fit a descriptor, and inference of a
//! descriptor from a value.
//!
//! # Example
//!
//! ```
//! use sql_metadata_rs::{Descriptor, Result, SqlKind, SqlValue};
//!
//! fn main() -> Result<()> {
//!     // Build a fixed-length column and pad a short value into it
//!     let code = Descriptor::builder(SqlKind::NChar)
//!         .name("code")
//!         .max_length(5)
//!         .build()?;
//!     let padded = code.adjust(SqlValue::String("ab".into()))?;
//!     assert_eq!(padded, SqlValue::String("ab   ".into()));
//!
//!     // Let the value pick its own descriptor
//!     let inferred = Descriptor::infer(&SqlValue::I64(7), "total")?;
//!     assert_eq!(inferred.kind(), SqlKind::BigInt);
//!
//!     Ok(())
//! }
//! ```

pub mod adjust;
pub mod config;
pub mod constants;
pub mod error;
mod infer;
pub mod types;

// Re-export main types
pub use config::{LocaleProvider, MetadataOptions};
pub use error::{Error, Result};
pub use types::{
    ColumnInfo, CompareOptions, Descriptor, DescriptorBuilder, ExtendedDescriptor,
    ExtendedDescriptorBuilder, ExtendedProperties, KindDefaults, QueryColumnDescriptor, Record,
    SortOrder, SqlKind, SqlNullType, SqlValue, XmlSchemaCollection,
};
