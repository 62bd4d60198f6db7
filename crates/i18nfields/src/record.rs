//! In-memory model instances.

use std::collections::BTreeMap;
use std::sync::Arc;

use i18nfields_core::{ColumnSource, ColumnStore, Error, Result, TranslatedString, Value};
use i18nfields_schema::{BoundField, ModelSchema};
use serde_json::{Map, Value as JsonValue};

use crate::accessor::{TranslationInput, get_translated, json_type_name, set_translated};

/// One instance of a model: column values keyed by physical column name.
///
/// Translatable fields have no entry of their own; they are read and
/// written through their per-language columns.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<ModelSchema>,
    values: BTreeMap<String, Value>,
}

impl Record {
    /// An empty record; every column reads as absent.
    pub fn new(schema: impl Into<Arc<ModelSchema>>) -> Self {
        Self {
            schema: schema.into(),
            values: BTreeMap::new(),
        }
    }

    /// Build a record from named values.
    ///
    /// Plain columns are set first, then translatable fields are written in
    /// the order given. A `null` translatable value is skipped. Any name
    /// that is neither a column nor a translatable field is rejected.
    pub fn create<I, K>(schema: impl Into<Arc<ModelSchema>>, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, JsonValue)>,
        K: AsRef<str>,
    {
        let mut record = Self::new(schema);
        let mut deferred = Vec::new();

        for (name, value) in fields {
            let name = name.as_ref();
            if record.schema.is_translatable(name) {
                if !value.is_null() {
                    deferred.push((name.to_string(), value));
                }
                continue;
            }
            let value = Value::try_from(value).map_err(|rejected| Error::UnsupportedValueType {
                field: name.to_string(),
                found: json_type_name(&rejected).to_string(),
            })?;
            record.set(name, value)?;
        }

        for (name, value) in deferred {
            let input = TranslationInput::from_json(&name, value)?;
            record.set_translated(&name, input)?;
        }

        tracing::debug!(
            table = %record.schema.table_name(),
            columns = record.values.len(),
            "Created record"
        );
        Ok(record)
    }

    /// The model this record belongs to.
    pub fn schema(&self) -> &Arc<ModelSchema> {
        &self.schema
    }

    /// Raw value of a physical column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Set a physical column.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> Result<()> {
        if !self.schema.has_column(column) {
            return Err(self.unknown(column));
        }
        self.values.insert(column.to_string(), value.into());
        Ok(())
    }

    /// Read a translatable field.
    ///
    /// `Ok(None)` means no language has a stored text.
    pub fn translated(&self, field: &str) -> Result<Option<TranslatedString>> {
        let bound = self.bound(field)?;
        Ok(get_translated(self, bound, self.schema.languages()))
    }

    /// Write a translatable field.
    pub fn set_translated(&mut self, field: &str, input: impl Into<TranslationInput>) -> Result<()> {
        let schema = Arc::clone(&self.schema);
        let bound = schema
            .translatable(field)
            .ok_or_else(|| self.unknown(field))?;
        set_translated(self, bound, input)
    }

    /// Every physical column as JSON, absent columns as `null`.
    pub fn to_json(&self) -> Map<String, JsonValue> {
        self.schema
            .column_names()
            .map(|column| {
                let value = self.values.get(column).map_or(JsonValue::Null, Value::to_json);
                (column.to_string(), value)
            })
            .collect()
    }

    fn bound(&self, field: &str) -> Result<&BoundField> {
        self.schema
            .translatable(field)
            .ok_or_else(|| self.unknown(field))
    }

    fn unknown(&self, field: &str) -> Error {
        Error::UnknownField {
            table: self.schema.table_name().to_string(),
            field: field.to_string(),
        }
    }
}

impl ColumnSource for Record {
    fn column(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }
}

impl ColumnStore for Record {
    fn set_column(&mut self, column: &str, value: Value) {
        self.values.insert(column.to_string(), value);
    }
}
