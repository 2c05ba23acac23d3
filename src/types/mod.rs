//! Column kinds, descriptors and runtime values.

mod column;
mod compare;
mod defaults;
mod descriptor;
mod kind;
mod record;
mod value;

pub use column::{ColumnInfo, ExtendedDescriptor, ExtendedDescriptorBuilder, QueryColumnDescriptor};
pub use compare::{CompareOptions, SortOrder};
pub use defaults::KindDefaults;
pub use descriptor::{Descriptor, DescriptorBuilder, ExtendedProperties, XmlSchemaCollection};
pub use kind::SqlKind;
pub use record::Record;
pub use value::{SqlNullType, SqlValue};
