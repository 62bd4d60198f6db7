//! Physical field definitions.

use i18nfields_core::SqlType;
use serde::{Deserialize, Serialize};

/// A physical column on a model.
///
/// Translatable fields are declared with a `FieldDef` describing the base
/// kind; the schema builder clones it once per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column name in the database.
    pub name: String,
    /// SQL type.
    pub sql_type: SqlType,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether this is a primary key column.
    pub primary_key: bool,
    /// Human-readable label.
    pub label: Option<String>,
    /// Default value expression (SQL).
    pub default: Option<String>,
    /// Whether generic forms may set this column directly.
    pub editable: bool,
    /// Position of the column within its model, assigned by the schema builder.
    pub ordinal: usize,
}

impl FieldDef {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
            primary_key: false,
            label: None,
            default: None,
            editable: true,
            ordinal: 0,
        }
    }

    /// A bounded string field, VARCHAR(`max_length`).
    pub fn varchar(name: impl Into<String>, max_length: u32) -> Self {
        Self::new(name, SqlType::Varchar(max_length))
    }

    /// An unbounded text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, SqlType::Text)
    }

    /// A slug field.
    pub fn slug(name: impl Into<String>, max_length: u32) -> Self {
        Self::new(name, SqlType::Slug(max_length))
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark as primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Set the human-readable label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set default value expression.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Label, falling back to the column name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
