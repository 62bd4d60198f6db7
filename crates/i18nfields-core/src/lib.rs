//! Core types for i18nfields.
//!
//! `i18nfields-core` is the **foundation layer** of the workspace. It owns the
//! vocabulary every other crate speaks:
//!
//! - **Languages**: [`LanguageConfig`] is the fixed, ordered language set
//!   (`"default"` first) plus the optional default-language override, and
//!   [`column_name`] is the bit-exact `<field>_<language>` naming rule.
//! - **Values**: [`TranslatedString`] maps languages to text and resolves
//!   reads through the fallback chain; [`Value`] is a dynamic column value.
//! - **Rows**: [`ColumnSource`]/[`ColumnStore`] give by-name access to an
//!   instance's physical columns.
//! - **Errors**: [`Error`] with its [`ErrorKind`] classification.
//!
//! # Who Uses This Crate
//!
//! - `i18nfields-schema` expands logical fields into per-language columns.
//! - `i18nfields-query` turns logical field names into per-language projections.
//! - `i18nfields` (the facade) reads and writes records through the container.

pub mod error;
pub mod identifiers;
pub mod language;
pub mod lazy;
pub mod row;
pub mod translated;
pub mod types;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use identifiers::{quote_ident, quote_ident_mysql, quote_literal};
pub use language::{
    DEFAULT_LANGUAGE, DEFAULT_LANGUAGE_ENV, LANGUAGES_ENV, LanguageConfig, base_language,
    column_name, validate_language_code,
};
pub use lazy::{LazyText, translate_each, translate_each_with};
pub use row::{ColumnSource, ColumnStore};
pub use translated::{ActiveLanguage, Localized, TranslatedString};
pub use types::SqlType;
pub use value::Value;
