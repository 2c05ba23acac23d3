//! Record type holding one coerced value per column.

use std::sync::Arc;

use super::column::{ColumnInfo, QueryColumnDescriptor};
use super::value::SqlValue;
use crate::error::{Error, Result};

/// A row of values shaped by a shared [`ColumnInfo`].
///
/// Every value stored through [`Record::set`] has been adjusted against
/// its column's descriptor.
#[derive(Debug, Clone)]
pub struct Record {
    /// Column values.
    values: Vec<SqlValue>,
    /// Shared column information (reference counted).
    column_info: Arc<ColumnInfo>,
}

impl Record {
    /// Create a record with every value set to NULL.
    pub fn new(column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values: vec![SqlValue::NULL; column_info.len()],
            column_info,
        }
    }

    /// Create a record from one value per column, adjusting each.
    pub fn from_values(values: Vec<SqlValue>, column_info: Arc<ColumnInfo>) -> Result<Self> {
        let mut record = Self::new(column_info);
        for (index, value) in values.into_iter().enumerate() {
            record.set(index, value)?;
        }
        Ok(record)
    }

    /// Adjust `value` against the column at `index` and store it.
    pub fn set(&mut self, index: usize, value: SqlValue) -> Result<()> {
        let count = self.values.len();
        let column = self
            .column_info
            .get(index)
            .ok_or(Error::ColumnIndexOutOfRange { index, count })?;
        let adjusted = column.descriptor().adjust(value)?;
        self.values[index] = adjusted;
        Ok(())
    }

    /// Set a value by column name (case-insensitive).
    pub fn set_by_name(&mut self, name: &str, value: SqlValue) -> Result<()> {
        let index = self
            .column_info
            .find_by_name(name)
            .ok_or_else(|| Error::ColumnNotFound {
                name: name.to_string(),
            })?;
        self.set(index, value)
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&SqlValue> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Get column information.
    pub fn columns(&self) -> &[QueryColumnDescriptor] {
        &self.column_info.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &SqlValue> {
        self.values.iter()
    }
}

impl IntoIterator for Record {
    type Item = SqlValue;
    type IntoIter = std::vec::IntoIter<SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a SqlValue;
    type IntoIter = std::slice::Iter<'a, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
