//! Declarative model schemas.
//!
//! A [`ModelSchema`] is built once per model description and then shared by
//! everything that needs to know the model's shape: record construction, the
//! field accessor and the projection layer. It carries the translatable-field
//! registry explicitly instead of discovering it from mutable shared state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use i18nfields_core::{LanguageConfig, SqlType};
//! use i18nfields_schema::{FieldDef, ModelSchema};
//!
//! let config = Arc::new(LanguageConfig::new(["en", "fr"]).unwrap());
//! let schema = ModelSchema::builder("product", config)
//!     .field(FieldDef::new("id", SqlType::BigInt).primary_key())
//!     .translatable("name", FieldDef::varchar("name", 255).nullable())
//!     .translatable("description", FieldDef::text("description").nullable())
//!     .build()
//!     .unwrap();
//!
//! assert!(schema.is_translatable("name"));
//! assert_eq!(schema.columns().len(), 7);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use i18nfields_core::{Error, LanguageConfig, Result};

use crate::field::FieldDef;
use crate::registry::TranslatableRegistry;
use crate::translatable::{BoundField, TranslatableField};

/// The complete, immutable description of one model.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    table_name: String,
    config: Arc<LanguageConfig>,
    /// All physical columns, in ordinal order.
    columns: Vec<FieldDef>,
    translatable: Vec<BoundField>,
    registry: TranslatableRegistry,
}

impl ModelSchema {
    /// Start declaring a model mapped to `table_name`.
    pub fn builder(
        table_name: impl Into<String>,
        config: impl Into<Arc<LanguageConfig>>,
    ) -> ModelSchemaBuilder {
        ModelSchemaBuilder {
            table_name: table_name.into(),
            config: config.into(),
            entries: Vec::new(),
            error: None,
        }
    }

    /// The table this model maps to.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The language configuration the schema was built with.
    pub fn languages(&self) -> &LanguageConfig {
        &self.config
    }

    /// Shared handle to the language configuration.
    pub fn config(&self) -> Arc<LanguageConfig> {
        Arc::clone(&self.config)
    }

    /// Every physical column, in ordinal order.
    pub fn columns(&self) -> &[FieldDef] {
        &self.columns
    }

    /// Physical column names, in ordinal order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a physical column.
    pub fn column(&self, name: &str) -> Option<&FieldDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether `name` is a physical column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// The translatable-field registry.
    pub fn translatable_fields(&self) -> &TranslatableRegistry {
        &self.registry
    }

    /// Whether `name` is a translatable logical field.
    pub fn is_translatable(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// The bound translatable field called `name`.
    pub fn translatable(&self, name: &str) -> Option<&BoundField> {
        self.translatable.iter().find(|f| f.logical_name() == name)
    }

    /// All bound translatable fields, in declaration order.
    pub fn bound_fields(&self) -> &[BoundField] {
        &self.translatable
    }

    /// Primary key column names.
    pub fn primary_key(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }
}

enum Entry {
    Plain(FieldDef),
    Translatable(String, TranslatableField),
}

/// Builder for [`ModelSchema`].
///
/// Declaration errors are held until [`build`](Self::build) so declarations
/// can be chained.
pub struct ModelSchemaBuilder {
    table_name: String,
    config: Arc<LanguageConfig>,
    entries: Vec<Entry>,
    error: Option<Error>,
}

impl ModelSchemaBuilder {
    /// Declare a plain column.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.entries.push(Entry::Plain(field));
        self
    }

    /// Declare a translatable field from its base text field.
    pub fn translatable(mut self, name: impl Into<String>, base: FieldDef) -> Self {
        let name = name.into();
        match TranslatableField::new(base) {
            Ok(field) => self.entries.push(Entry::Translatable(name, field)),
            Err(err) => {
                let err = match err {
                    Error::UnsupportedFieldKind { sql_type, .. } => {
                        Error::UnsupportedFieldKind { field: name, sql_type }
                    }
                    other => other,
                };
                if self.error.is_none() {
                    self.error = Some(err);
                }
            }
        }
        self
    }

    /// Declare an already-wrapped translatable field.
    pub fn translatable_field(mut self, name: impl Into<String>, field: TranslatableField) -> Self {
        self.entries.push(Entry::Translatable(name.into(), field));
        self
    }

    /// Assign ordinals, expand translatable fields and check for clashes.
    ///
    /// Ordinals follow declaration order; a translatable field takes one
    /// ordinal per language of the configured set.
    pub fn build(self) -> Result<ModelSchema> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut columns = Vec::new();
        let mut translatable = Vec::new();
        let mut registry = TranslatableRegistry::new();
        let mut ordinal = 0;

        for entry in self.entries {
            match entry {
                Entry::Plain(mut field) => {
                    field.ordinal = ordinal;
                    ordinal += 1;
                    columns.push(field);
                }
                Entry::Translatable(name, field) => {
                    let bound = field.bind(&name, &self.config, ordinal);
                    ordinal += self.config.len();
                    columns.extend(bound.columns().iter().cloned());
                    registry.register(name);
                    translatable.push(bound);
                }
            }
        }

        let mut seen = HashSet::new();
        for name in columns
            .iter()
            .map(|c| c.name.as_str())
            .chain(translatable.iter().map(BoundField::logical_name))
        {
            if !seen.insert(name) {
                return Err(Error::DuplicateColumn {
                    table: self.table_name.clone(),
                    column: name.to_string(),
                });
            }
        }

        tracing::debug!(
            table = %self.table_name,
            columns = columns.len(),
            translatable = registry.len(),
            "Built model schema"
        );

        Ok(ModelSchema {
            table_name: self.table_name,
            config: self.config,
            columns,
            translatable,
            registry,
        })
    }
}
