//! Extended column metadata and the shared column list of a result set.
//!
//! These types decorate a [`Descriptor`] with column identity and
//! provenance. They are built once per column definition and never
//! mutated afterwards.

use super::descriptor::{validate_name, Descriptor};
use crate::error::{Error, Result};

/// Maximum number of parts in a multi-part type name
/// (`database.schema.type`).
const MAX_TYPE_NAME_PARTS: usize = 3;

/// A descriptor plus column identity, provenance and key flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedDescriptor {
    descriptor: Descriptor,
    type_name_parts: Vec<String>,
    allows_null: bool,
    server_name: Option<String>,
    catalog_name: Option<String>,
    schema_name: Option<String>,
    table_name: Option<String>,
    column_name: Option<String>,
    is_key: bool,
    is_identity: bool,
    is_column_set: bool,
}

impl ExtendedDescriptor {
    /// Start decorating `descriptor`.
    pub fn builder(descriptor: Descriptor) -> ExtendedDescriptorBuilder {
        ExtendedDescriptorBuilder {
            column: ExtendedDescriptor {
                descriptor,
                type_name_parts: Vec::new(),
                allows_null: true,
                server_name: None,
                catalog_name: None,
                schema_name: None,
                table_name: None,
                column_name: None,
                is_key: false,
                is_identity: false,
                is_column_set: false,
            },
        }
    }

    /// Column name, taken from the underlying descriptor.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Multi-part name of the xml schema collection or structured type.
    pub fn type_name_parts(&self) -> &[String] {
        &self.type_name_parts
    }

    pub fn allows_null(&self) -> bool {
        self.allows_null
    }

    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    pub fn catalog_name(&self) -> Option<&str> {
        self.catalog_name.as_deref()
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Name of the base column this one originates from.
    pub fn column_name(&self) -> Option<&str> {
        self.column_name.as_deref()
    }

    pub fn is_key(&self) -> bool {
        self.is_key
    }

    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    pub fn is_column_set(&self) -> bool {
        self.is_column_set
    }
}

/// Builder for [`ExtendedDescriptor`].
#[derive(Debug, Clone)]
pub struct ExtendedDescriptorBuilder {
    column: ExtendedDescriptor,
}

impl ExtendedDescriptorBuilder {
    pub fn with_type_name_parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column.type_name_parts = parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allows_null(mut self, allows_null: bool) -> Self {
        self.column.allows_null = allows_null;
        self
    }

    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.column.server_name = Some(name.into());
        self
    }

    pub fn with_catalog_name(mut self, name: impl Into<String>) -> Self {
        self.column.catalog_name = Some(name.into());
        self
    }

    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.column.schema_name = Some(name.into());
        self
    }

    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.column.table_name = Some(name.into());
        self
    }

    pub fn with_column_name(mut self, name: impl Into<String>) -> Self {
        self.column.column_name = Some(name.into());
        self
    }

    pub fn with_key(mut self, is_key: bool) -> Self {
        self.column.is_key = is_key;
        self
    }

    pub fn with_identity(mut self, is_identity: bool) -> Self {
        self.column.is_identity = is_identity;
        self
    }

    pub fn with_column_set(mut self, is_column_set: bool) -> Self {
        self.column.is_column_set = is_column_set;
        self
    }

    /// Validate the type name parts and return the column.
    ///
    /// Fails with `InvalidTypeName` for more than three parts and with
    /// `NameTooLong` when any part exceeds 128 characters.
    pub fn build(self) -> Result<ExtendedDescriptor> {
        let parts = self.column.type_name_parts.len();
        if parts > MAX_TYPE_NAME_PARTS {
            return Err(Error::InvalidTypeName { parts });
        }
        for part in &self.column.type_name_parts {
            validate_name(part)?;
        }
        Ok(self.column)
    }
}

/// A column of a query result set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryColumnDescriptor {
    column: ExtendedDescriptor,
    is_read_only: bool,
    is_expression: bool,
    is_aliased: bool,
    is_hidden: bool,
}

impl QueryColumnDescriptor {
    pub fn new(column: ExtendedDescriptor) -> Self {
        Self {
            column,
            is_read_only: false,
            is_expression: false,
            is_aliased: false,
            is_hidden: false,
        }
    }

    pub fn with_read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    /// Computed column.
    pub fn with_expression(mut self, is_expression: bool) -> Self {
        self.is_expression = is_expression;
        self
    }

    pub fn with_aliased(mut self, is_aliased: bool) -> Self {
        self.is_aliased = is_aliased;
        self
    }

    pub fn with_hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    pub fn name(&self) -> &str {
        self.column.name()
    }

    pub fn descriptor(&self) -> &Descriptor {
        self.column.descriptor()
    }

    pub fn extended(&self) -> &ExtendedDescriptor {
        &self.column
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    pub fn is_expression(&self) -> bool {
        self.is_expression
    }

    pub fn is_aliased(&self) -> bool {
        self.is_aliased
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }
}

impl From<Descriptor> for QueryColumnDescriptor {
    fn from(descriptor: Descriptor) -> Self {
        Self::new(ExtendedDescriptor::builder(descriptor).column)
    }
}

/// Shared column information for all records of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<QueryColumnDescriptor>,
}

impl ColumnInfo {
    /// Create new column info from columns.
    pub fn new(columns: Vec<QueryColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// Create column info from bare descriptors, with default extended
    /// metadata.
    pub fn from_descriptors(descriptors: Vec<Descriptor>) -> Self {
        Self {
            columns: descriptors.into_iter().map(QueryColumnDescriptor::from).collect(),
        }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&QueryColumnDescriptor> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let name_upper = name.to_uppercase();
        self.columns
            .iter()
            .position(|c| c.name().to_uppercase() == name_upper)
    }
}
