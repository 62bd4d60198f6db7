//! Translatable text fields for SQL models.
//!
//! A translatable field is one logical field of a model backed by one
//! physical column per configured language, named `<field>_<language>`.
//! Reads return a [`TranslatedString`] that resolves the best available text
//! for a requested language; writes accept a per-language mapping, a
//! container, plain text or null.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use i18nfields::prelude::*;
//!
//! let config = Arc::new(LanguageConfig::new(["en", "fr"]).unwrap());
//! let schema = ModelSchema::builder("product", config)
//!     .field(FieldDef::new("id", SqlType::BigInt).primary_key())
//!     .translatable("name", FieldDef::varchar("name", 255).nullable())
//!     .build()
//!     .unwrap();
//!
//! let mut laptop = Record::new(schema);
//! laptop.set_translated("name", [("en", "Laptop"), ("fr", "Portable")]).unwrap();
//!
//! let name = laptop.translated("name").unwrap().unwrap();
//! assert_eq!(name.resolve("fr-CA"), "Portable");
//! assert_eq!(name.current_value("it"), "");
//! ```
//!
//! # Crates
//!
//! - `i18nfields-core`: languages, the container, values and errors.
//! - `i18nfields-schema`: field definitions, per-language fanout, the
//!   model schema and its translatable-field registry.
//! - `i18nfields-query`: projection expansion for value queries.

pub mod accessor;
pub mod record;

pub use accessor::{TranslationInput, get_translated, set_translated};
pub use record::Record;

pub use i18nfields_core::{
    ActiveLanguage, ColumnSource, ColumnStore, DEFAULT_LANGUAGE, DEFAULT_LANGUAGE_ENV, Error,
    ErrorKind, LANGUAGES_ENV, LanguageConfig, LazyText, Localized, Result, SqlType,
    TranslatedString, Value, base_language, column_name, translate_each, translate_each_with,
    validate_language_code,
};
pub use i18nfields_query::{
    Dialect, Filter, ModelQuery, OrderBy, ProjectionItem, QueryParts, QuerySource,
    TranslatableValues, ValuesQuery, expand_projection, project_row,
};
pub use i18nfields_schema::{
    BoundField, FieldDef, ModelSchema, ModelSchemaBuilder, TranslatableField,
    TranslatableRegistry,
};

/// Everything needed to declare models and work with translatable fields.
pub mod prelude {
    pub use crate::{
        ActiveLanguage, ColumnSource, ColumnStore, Dialect, Error, ErrorKind, FieldDef,
        LanguageConfig, ModelQuery, ModelSchema, QuerySource, Record, Result, SqlType,
        TranslatableField, TranslatableValues, TranslatedString, TranslationInput, Value,
        translate_each,
    };
}
