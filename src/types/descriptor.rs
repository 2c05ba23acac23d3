//! Column descriptor and its validating builder.
//!
//! A descriptor is seeded from the kind's default attributes and then
//! overridden per kind family with the caller's length, precision, scale,
//! locale and compare options. Once built it is immutable and can be
//! shared freely; coercion and inference only read it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::compare::{CompareOptions, SortOrder};
use super::defaults::KindDefaults;
use super::kind::SqlKind;
use crate::config::LocaleProvider;
use crate::constants::{
    DEFAULT_LOCALE_ID, MAX_DECIMAL_PRECISION, MAX_LENGTH_UNLIMITED, MAX_LEN_FROM_PRECISION,
    MAX_NAME_LENGTH, MAX_TIME_SCALE, TIME_LEN_OFFSET_FROM_SCALE,
};
use crate::error::{Error, Result};

/// Frozen bag of extended properties attached to a descriptor.
pub type ExtendedProperties = Arc<BTreeMap<String, serde_json::Value>>;

/// Identity of the XML schema collection a typed xml column is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlSchemaCollection {
    pub database: Option<String>,
    pub owning_schema: Option<String>,
    pub name: String,
}

/// Immutable description of a column or parameter type.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    name: String,
    kind: SqlKind,
    max_length: i64,
    precision: u8,
    scale: u8,
    locale_id: i64,
    compare_options: CompareOptions,
    is_multi_valued: bool,
    fields: Arc<[Descriptor]>,
    extended_properties: Option<ExtendedProperties>,
    partial_length: bool,
    xml_schema: Option<XmlSchemaCollection>,
    use_server_default: bool,
    is_unique_key: bool,
    sort_order: SortOrder,
    sort_ordinal: i32,
}

impl Descriptor {
    /// Start building a descriptor of `kind`.
    pub fn builder(kind: SqlKind) -> DescriptorBuilder {
        DescriptorBuilder::new(kind)
    }

    /// Descriptor carrying the default attributes of `kind`.
    ///
    /// Fails with `UnsupportedKind` for user-defined types.
    pub fn default_for(kind: SqlKind) -> Result<Self> {
        if kind == SqlKind::Udt {
            return Err(Error::UnsupportedKind { kind });
        }
        Ok(Self::seed(kind))
    }

    fn seed(kind: SqlKind) -> Self {
        let defaults = KindDefaults::for_kind(kind);
        Self {
            name: String::new(),
            kind,
            max_length: defaults.max_length,
            precision: defaults.precision,
            scale: defaults.scale,
            locale_id: defaults.locale_id,
            compare_options: defaults.compare_options,
            is_multi_valued: false,
            fields: Arc::from(Vec::new()),
            extended_properties: None,
            partial_length: defaults.partial_length,
            xml_schema: None,
            use_server_default: false,
            is_unique_key: false,
            sort_order: SortOrder::Unspecified,
            sort_ordinal: -1,
        }
    }

    /// Streaming variant of this descriptor.
    ///
    /// Partial-length descriptors are returned unchanged. Otherwise xml
    /// fails with `UnsupportedKind`; it streams in its own representation.
    /// varchar, nvarchar and varbinary become unlimited partial-length
    /// descriptors with precision and scale cleared. Every other kind is
    /// returned unchanged.
    pub fn to_partial_length(&self) -> Result<Descriptor> {
        if self.partial_length {
            return Ok(self.clone());
        }
        if self.kind == SqlKind::Xml {
            return Err(Error::UnsupportedKind { kind: self.kind });
        }
        match self.kind {
            SqlKind::VarChar | SqlKind::NVarChar | SqlKind::VarBinary => {
                let mut partial = self.clone();
                partial.max_length = MAX_LENGTH_UNLIMITED;
                partial.precision = 0;
                partial.scale = 0;
                partial.partial_length = true;
                Ok(partial)
            }
            _ => Ok(self.clone()),
        }
    }

    /// Column or parameter name (empty when none was supplied).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SqlKind {
        self.kind
    }

    /// Canonical server type name of the kind.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Max length in characters or bytes, `-1` for unlimited. For
    /// structured descriptors this is the field count.
    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    /// Whether max length is the unlimited sentinel.
    pub fn is_unlimited(&self) -> bool {
        self.max_length == MAX_LENGTH_UNLIMITED
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn locale_id(&self) -> i64 {
        self.locale_id
    }

    pub fn compare_options(&self) -> CompareOptions {
        self.compare_options
    }

    /// Structured descriptors only: whether values carry many rows.
    pub fn is_multi_valued(&self) -> bool {
        self.is_multi_valued
    }

    /// Structured descriptors only: ordered field descriptors.
    pub fn fields(&self) -> &[Descriptor] {
        &self.fields
    }

    pub fn extended_properties(&self) -> Option<&ExtendedProperties> {
        self.extended_properties.as_ref()
    }

    /// Whether values are transferred as a stream.
    pub fn is_partial_length(&self) -> bool {
        self.partial_length
    }

    pub fn xml_schema_collection(&self) -> Option<&XmlSchemaCollection> {
        self.xml_schema.as_ref()
    }

    pub fn use_server_default(&self) -> bool {
        self.use_server_default
    }

    pub fn is_unique_key(&self) -> bool {
        self.is_unique_key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Sort ordinal, `-1` when the sort order is unspecified.
    pub fn sort_ordinal(&self) -> i32 {
        self.sort_ordinal
    }
}

/// Reject names longer than 128 characters.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(Error::NameTooLong {
            name: name.to_string(),
            length,
        });
    }
    Ok(())
}

/// Builder for [`Descriptor`].
///
/// # Example
///
/// ```
/// use sql_metadata_rs::{Descriptor, SqlKind};
///
/// let d = Descriptor::builder(SqlKind::Decimal)
///     .name("price")
///     .precision(10)
///     .scale(2)
///     .build()
///     .unwrap();
/// assert_eq!(d.max_length(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    kind: SqlKind,
    name: Option<String>,
    max_length: Option<i64>,
    precision: Option<u8>,
    scale: Option<u8>,
    locale_id: Option<i64>,
    compare_options: Option<CompareOptions>,
    fields: Vec<Descriptor>,
    is_multi_valued: bool,
    extended_properties: Option<BTreeMap<String, serde_json::Value>>,
    xml_database: Option<String>,
    xml_owning_schema: Option<String>,
    xml_collection_name: Option<String>,
    use_server_default: bool,
    is_unique_key: bool,
    sort_order: SortOrder,
    sort_ordinal: i32,
    current_locale_id: i64,
}

impl DescriptorBuilder {
    pub fn new(kind: SqlKind) -> Self {
        Self {
            kind,
            name: None,
            max_length: None,
            precision: None,
            scale: None,
            locale_id: None,
            compare_options: None,
            fields: Vec::new(),
            is_multi_valued: false,
            extended_properties: None,
            xml_database: None,
            xml_owning_schema: None,
            xml_collection_name: None,
            use_server_default: false,
            is_unique_key: false,
            sort_order: SortOrder::Unspecified,
            sort_ordinal: -1,
            current_locale_id: DEFAULT_LOCALE_ID,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Max length; `-1` requests the unlimited sentinel.
    pub fn max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn locale_id(mut self, locale_id: i64) -> Self {
        self.locale_id = Some(locale_id);
        self
    }

    pub fn compare_options(mut self, compare_options: CompareOptions) -> Self {
        self.compare_options = Some(compare_options);
        self
    }

    /// Field descriptors of a structured kind.
    pub fn fields(mut self, fields: Vec<Descriptor>) -> Self {
        self.fields = fields;
        self
    }

    pub fn multi_valued(mut self, is_multi_valued: bool) -> Self {
        self.is_multi_valued = is_multi_valued;
        self
    }

    /// Extended properties; frozen when the descriptor is built.
    pub fn extended_properties(mut self, properties: BTreeMap<String, serde_json::Value>) -> Self {
        self.extended_properties = Some(properties);
        self
    }

    /// XML schema collection of a typed xml column.
    pub fn xml_schema_collection(
        mut self,
        database: Option<&str>,
        owning_schema: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        self.xml_database = database.map(str::to_string);
        self.xml_owning_schema = owning_schema.map(str::to_string);
        self.xml_collection_name = name.map(str::to_string);
        self
    }

    pub fn use_server_default(mut self, use_server_default: bool) -> Self {
        self.use_server_default = use_server_default;
        self
    }

    pub fn unique_key(mut self, is_unique_key: bool) -> Self {
        self.is_unique_key = is_unique_key;
        self
    }

    /// Sort order and ordinal of a table-valued-parameter column.
    pub fn sort(mut self, order: SortOrder, ordinal: i32) -> Self {
        self.sort_order = order;
        self.sort_ordinal = ordinal;
        self
    }

    /// Take the fallback locale from the host's current culture.
    pub fn options(mut self, provider: &dyn LocaleProvider) -> Self {
        self.current_locale_id = provider.current_locale_id();
        self
    }

    /// Validate and construct the descriptor.
    pub fn build(self) -> Result<Descriptor> {
        let kind = self.kind;
        if kind == SqlKind::Udt {
            return Err(Error::UnsupportedKind { kind });
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        self.sort_order.validate_with_ordinal(self.sort_ordinal)?;

        let mut d = Descriptor::seed(kind);
        // Only the canonical defaults stream; built descriptors never do.
        d.partial_length = false;

        match kind {
            SqlKind::Binary | SqlKind::VarBinary => {
                d.max_length = self.sized_length()?;
            }
            SqlKind::Char | SqlKind::NChar | SqlKind::VarChar | SqlKind::NVarChar => {
                d.max_length = self.sized_length()?;
                self.apply_collation(&mut d)?;
            }
            SqlKind::Text | SqlKind::NText | SqlKind::Image => {
                let length = self.max_length.unwrap_or(MAX_LENGTH_UNLIMITED);
                if length != MAX_LENGTH_UNLIMITED {
                    return Err(Error::length_out_of_range(kind, length));
                }
                d.max_length = length;
                if kind != SqlKind::Image {
                    self.apply_collation(&mut d)?;
                }
            }
            SqlKind::Decimal => {
                let precision = self.precision.unwrap_or(d.precision);
                let scale = self.scale.unwrap_or(d.scale);
                if precision == 0 || precision > MAX_DECIMAL_PRECISION {
                    return Err(Error::PrecisionOutOfRange { precision });
                }
                if scale > precision {
                    return Err(Error::ScaleOutOfRange { scale });
                }
                d.precision = precision;
                d.scale = scale;
                d.max_length = MAX_LEN_FROM_PRECISION[precision as usize - 1] as i64;
            }
            SqlKind::Time | SqlKind::DateTime2 | SqlKind::DateTimeOffset => {
                let scale = self.scale.unwrap_or(d.scale);
                if scale > MAX_TIME_SCALE {
                    return Err(Error::TimeScaleOutOfRange { scale });
                }
                d.scale = scale;
                d.max_length -= TIME_LEN_OFFSET_FROM_SCALE[scale as usize] as i64;
            }
            SqlKind::Structured => {
                d.max_length = self.fields.len() as i64;
                d.is_multi_valued = self.is_multi_valued;
                d.fields = Arc::from(self.fields.clone());
            }
            SqlKind::Xml => {
                if self.xml_collection_name.is_none()
                    && (self.xml_database.is_some() || self.xml_owning_schema.is_some())
                {
                    return Err(Error::argument_required("xml_schema_collection_name"));
                }
                d.xml_schema = self
                    .xml_collection_name
                    .clone()
                    .map(|name| XmlSchemaCollection {
                        database: self.xml_database.clone(),
                        owning_schema: self.xml_owning_schema.clone(),
                        name,
                    });
            }
            SqlKind::Variant => {
                d.locale_id = self.locale_id.unwrap_or(self.current_locale_id);
            }
            SqlKind::BigInt
            | SqlKind::Bit
            | SqlKind::DateTime
            | SqlKind::Float
            | SqlKind::Int
            | SqlKind::Money
            | SqlKind::Real
            | SqlKind::UniqueIdentifier
            | SqlKind::SmallDateTime
            | SqlKind::SmallInt
            | SqlKind::SmallMoney
            | SqlKind::Timestamp
            | SqlKind::TinyInt
            | SqlKind::Date => {}
            SqlKind::Udt => return Err(Error::UnsupportedKind { kind }),
        }

        d.name = self.name.unwrap_or_default();
        d.extended_properties = self.extended_properties.map(Arc::new);
        d.use_server_default = self.use_server_default;
        d.is_unique_key = self.is_unique_key;
        d.sort_order = self.sort_order;
        d.sort_ordinal = self.sort_ordinal;

        debug!(
            kind = %d.kind,
            max_length = d.max_length,
            precision = d.precision,
            scale = d.scale,
            "built column descriptor"
        );
        Ok(d)
    }

    /// Concrete length of a sized text or binary kind, or the unlimited
    /// sentinel for the var-length ones.
    fn sized_length(&self) -> Result<i64> {
        let kind = self.kind;
        let length = self
            .max_length
            .ok_or_else(|| Error::argument_required("max_length"))?;
        if length == MAX_LENGTH_UNLIMITED && kind.allows_unlimited_length() {
            return Ok(length);
        }
        let limit = kind
            .concrete_length_limit()
            .ok_or(Error::UnsupportedKind { kind })?;
        if length < 0 || length > limit {
            return Err(Error::length_out_of_range(kind, length));
        }
        Ok(length)
    }

    fn apply_collation(&self, d: &mut Descriptor) -> Result<()> {
        d.locale_id = self.locale_id.unwrap_or(self.current_locale_id);
        if let Some(options) = self.compare_options {
            d.compare_options = options.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetadataOptions;

    #[test]
    fn test_decimal_band_lengths() {
        for (precision, expected) in [(1, 5), (9, 5), (10, 9), (19, 9), (20, 13), (28, 13), (29, 17), (38, 17)] {
            let d = Descriptor::builder(SqlKind::Decimal)
                .precision(precision)
                .scale(0)
                .build()
                .unwrap();
            assert_eq!(d.max_length(), expected, "precision {}", precision);
        }
    }

    #[test]
    fn test_decimal_out_of_range() {
        let err = Descriptor::builder(SqlKind::Decimal).precision(0).build();
        assert_eq!(err, Err(Error::PrecisionOutOfRange { precision: 0 }));

        let err = Descriptor::builder(SqlKind::Decimal).precision(39).build();
        assert_eq!(err, Err(Error::PrecisionOutOfRange { precision: 39 }));

        let err = Descriptor::builder(SqlKind::Decimal).precision(5).scale(6).build();
        assert_eq!(err, Err(Error::ScaleOutOfRange { scale: 6 }));
    }

    #[test]
    fn test_decimal_defaults() {
        let d = Descriptor::builder(SqlKind::Decimal).build().unwrap();
        assert_eq!((d.precision(), d.scale(), d.max_length()), (18, 0, 9));
    }

    #[test]
    fn test_time_family_lengths() {
        let cases = [
            (SqlKind::Time, 0, 3),
            (SqlKind::Time, 3, 4),
            (SqlKind::Time, 7, 5),
            (SqlKind::DateTime2, 2, 6),
            (SqlKind::DateTime2, 5, 8),
            (SqlKind::DateTimeOffset, 4, 9),
            (SqlKind::DateTimeOffset, 7, 10),
        ];
        for (kind, scale, expected) in cases {
            let d = Descriptor::builder(kind).scale(scale).build().unwrap();
            assert_eq!(d.max_length(), expected, "{} scale {}", kind, scale);
            assert_eq!(d.scale(), scale);
        }
    }

    #[test]
    fn test_time_scale_out_of_range() {
        let err = Descriptor::builder(SqlKind::Time).scale(8).build();
        assert_eq!(err, Err(Error::TimeScaleOutOfRange { scale: 8 }));
    }

    #[test]
    fn test_text_length_limits() {
        assert!(Descriptor::builder(SqlKind::NVarChar).max_length(4000).build().is_ok());
        assert_eq!(
            Descriptor::builder(SqlKind::NVarChar).max_length(4001).build(),
            Err(Error::length_out_of_range(SqlKind::NVarChar, 4001))
        );
        assert!(Descriptor::builder(SqlKind::VarChar).max_length(8000).build().is_ok());
        assert!(Descriptor::builder(SqlKind::NChar).max_length(4001).build().is_err());
        assert!(Descriptor::builder(SqlKind::Char).max_length(-2).build().is_err());
    }

    #[test]
    fn test_unlimited_sentinel_only_for_var_kinds() {
        let d = Descriptor::builder(SqlKind::VarBinary).max_length(-1).build().unwrap();
        assert!(d.is_unlimited());
        assert!(Descriptor::builder(SqlKind::NVarChar).max_length(-1).build().is_ok());
        assert_eq!(
            Descriptor::builder(SqlKind::Binary).max_length(-1).build(),
            Err(Error::length_out_of_range(SqlKind::Binary, -1))
        );
        assert!(Descriptor::builder(SqlKind::NChar).max_length(-1).build().is_err());
    }

    #[test]
    fn test_sized_kinds_require_length() {
        assert_eq!(
            Descriptor::builder(SqlKind::VarChar).build(),
            Err(Error::argument_required("max_length"))
        );
    }

    #[test]
    fn test_large_objects_require_sentinel() {
        let d = Descriptor::builder(SqlKind::NText).build().unwrap();
        assert!(d.is_unlimited());
        assert!(Descriptor::builder(SqlKind::Image).max_length(-1).build().is_ok());
        assert_eq!(
            Descriptor::builder(SqlKind::Text).max_length(100).build(),
            Err(Error::length_out_of_range(SqlKind::Text, 100))
        );
    }

    #[test]
    fn test_collation() {
        let d = Descriptor::builder(SqlKind::NVarChar)
            .max_length(10)
            .locale_id(1036)
            .compare_options(CompareOptions::BINARY_SORT)
            .build()
            .unwrap();
        assert_eq!(d.locale_id(), 1036);
        assert_eq!(d.compare_options(), CompareOptions::BINARY_SORT);

        let d = Descriptor::builder(SqlKind::Char).max_length(3).build().unwrap();
        assert_eq!(d.locale_id(), 1033);
        assert_eq!(d.compare_options(), CompareOptions::DEFAULT_STRING);

        let err = Descriptor::builder(SqlKind::VarChar)
            .max_length(10)
            .compare_options(CompareOptions::BINARY_SORT | CompareOptions::IGNORE_WIDTH)
            .build();
        assert!(matches!(err, Err(Error::InvalidCompareOptions { .. })));
    }

    #[test]
    fn test_locale_from_options() {
        let options = MetadataOptions::new().with_locale_id(1041);
        let d = Descriptor::builder(SqlKind::Variant)
            .options(&options)
            .build()
            .unwrap();
        assert_eq!(d.locale_id(), 1041);

        let d = Descriptor::builder(SqlKind::Int).options(&options).build().unwrap();
        assert_eq!(d.locale_id(), 0);
    }

    #[test]
    fn test_udt_always_rejected() {
        assert_eq!(
            Descriptor::builder(SqlKind::Udt).max_length(10).build(),
            Err(Error::UnsupportedKind { kind: SqlKind::Udt })
        );
        assert!(Descriptor::default_for(SqlKind::Udt).is_err());
    }

    #[test]
    fn test_name_too_long() {
        let name = "x".repeat(129);
        let err = Descriptor::builder(SqlKind::Int).name(name).build();
        assert!(matches!(err, Err(Error::NameTooLong { length: 129, .. })));
        assert!(Descriptor::builder(SqlKind::Int).name("y".repeat(128)).build().is_ok());
    }

    #[test]
    fn test_structured() {
        let fields = vec![
            Descriptor::builder(SqlKind::Int).name("id").build().unwrap(),
            Descriptor::builder(SqlKind::NVarChar).name("label").max_length(50).build().unwrap(),
        ];
        let d = Descriptor::builder(SqlKind::Structured)
            .fields(fields)
            .multi_valued(true)
            .build()
            .unwrap();
        assert_eq!(d.max_length(), 2);
        assert!(d.is_multi_valued());
        assert_eq!(d.fields()[1].name(), "label");
        assert!(Descriptor::default_for(SqlKind::Int).unwrap().fields().is_empty());
    }

    #[test]
    fn test_xml_schema_collection() {
        let d = Descriptor::builder(SqlKind::Xml)
            .xml_schema_collection(Some("db"), Some("dbo"), Some("Orders"))
            .build()
            .unwrap();
        let schema = d.xml_schema_collection().unwrap();
        assert_eq!(schema.name, "Orders");
        assert_eq!(schema.owning_schema.as_deref(), Some("dbo"));
        assert!(!d.is_partial_length());

        let err = Descriptor::builder(SqlKind::Xml)
            .xml_schema_collection(Some("db"), None, None)
            .build();
        assert_eq!(err, Err(Error::argument_required("xml_schema_collection_name")));
    }

    #[test]
    fn test_sort_order_validation() {
        let d = Descriptor::builder(SqlKind::Int)
            .unique_key(true)
            .sort(SortOrder::Descending, 0)
            .build()
            .unwrap();
        assert!(d.is_unique_key());
        assert_eq!(d.sort_order(), SortOrder::Descending);

        let err = Descriptor::builder(SqlKind::Int).sort(SortOrder::Ascending, -1).build();
        assert!(matches!(err, Err(Error::SortOrderMismatch { .. })));
    }

    #[test]
    fn test_extended_properties_frozen() {
        let mut props = BTreeMap::new();
        props.insert("caption".to_string(), serde_json::json!("Price"));
        let d = Descriptor::builder(SqlKind::Money)
            .extended_properties(props)
            .build()
            .unwrap();
        let shared = d.clone();
        let a = d.extended_properties().unwrap();
        let b = shared.extended_properties().unwrap();
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(a.get("caption"), Some(&serde_json::json!("Price")));
    }

    #[test]
    fn test_to_partial_length() {
        let d = Descriptor::builder(SqlKind::NVarChar).max_length(100).build().unwrap();
        let partial = d.to_partial_length().unwrap();
        assert!(partial.is_partial_length());
        assert!(partial.is_unlimited());
        assert_eq!((partial.precision(), partial.scale()), (0, 0));
        assert_eq!(partial.locale_id(), d.locale_id());

        let again = partial.to_partial_length().unwrap();
        assert_eq!(again, partial);

        let int = Descriptor::default_for(SqlKind::Int).unwrap();
        assert_eq!(int.to_partial_length().unwrap(), int);

        let xml = Descriptor::builder(SqlKind::Xml).build().unwrap();
        assert_eq!(
            xml.to_partial_length(),
            Err(Error::UnsupportedKind { kind: SqlKind::Xml })
        );
    }

    #[test]
    fn test_default_xml_is_already_partial() {
        let xml = Descriptor::default_for(SqlKind::Xml).unwrap();
        assert!(xml.is_partial_length());
        assert_eq!(xml.to_partial_length(), Ok(xml.clone()));

        let built = Descriptor::builder(SqlKind::Xml).build().unwrap();
        assert!(!built.is_partial_length());
        assert_ne!(built, xml);
    }
}
