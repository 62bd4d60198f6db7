//! Reading and writing translatable fields through their physical columns.
//!
//! A translatable field stores nothing under its logical name. Reads gather
//! the per-language columns into a [`TranslatedString`]; writes scatter a
//! [`TranslationInput`] back over them.

use std::collections::BTreeMap;

use i18nfields_core::{
    ColumnSource, ColumnStore, DEFAULT_LANGUAGE, Error, LanguageConfig, Result, TranslatedString,
    Value,
};
use i18nfields_schema::BoundField;
use serde_json::Value as JsonValue;

/// What can be written to a translatable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationInput {
    /// Per-language texts. `None` clears that language's column. Languages
    /// not present are left alone.
    Map(BTreeMap<String, Option<String>>),
    /// Every translation held by the container.
    Translated(TranslatedString),
    /// Plain text: only the `"default"` column is written.
    Text(String),
    /// Clear every column of the field.
    Null,
}

impl TranslationInput {
    /// Interpret a dynamic JSON value written to `field`.
    ///
    /// Numbers, booleans, arrays and mappings holding anything other than
    /// text or null are type errors.
    pub fn from_json(field: &str, value: JsonValue) -> Result<Self> {
        Self::try_from(value).map_err(|rejected| Error::UnsupportedValueType {
            field: field.to_string(),
            found: json_type_name(&rejected).to_string(),
        })
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// On failure the offending value is handed back: the whole input, or the
/// first non-text entry of a mapping.
impl TryFrom<JsonValue> for TranslationInput {
    type Error = JsonValue;

    fn try_from(value: JsonValue) -> std::result::Result<Self, Self::Error> {
        match value {
            JsonValue::Null => Ok(TranslationInput::Null),
            JsonValue::String(text) => Ok(TranslationInput::Text(text)),
            JsonValue::Object(entries) => entries
                .into_iter()
                .map(|(lang, text)| match text {
                    JsonValue::String(text) => Ok((lang, Some(text))),
                    JsonValue::Null => Ok((lang, None)),
                    other => Err(other),
                })
                .collect::<std::result::Result<BTreeMap<_, _>, _>>()
                .map(TranslationInput::Map),
            other => Err(other),
        }
    }
}

impl From<TranslatedString> for TranslationInput {
    fn from(value: TranslatedString) -> Self {
        TranslationInput::Translated(value)
    }
}

impl From<&TranslatedString> for TranslationInput {
    fn from(value: &TranslatedString) -> Self {
        TranslationInput::Translated(value.clone())
    }
}

impl From<String> for TranslationInput {
    fn from(text: String) -> Self {
        TranslationInput::Text(text)
    }
}

impl From<&str> for TranslationInput {
    fn from(text: &str) -> Self {
        TranslationInput::Text(text.to_string())
    }
}

impl From<Option<String>> for TranslationInput {
    fn from(text: Option<String>) -> Self {
        text.map_or(TranslationInput::Null, TranslationInput::Text)
    }
}

impl From<BTreeMap<String, Option<String>>> for TranslationInput {
    fn from(map: BTreeMap<String, Option<String>>) -> Self {
        TranslationInput::Map(map)
    }
}

impl From<BTreeMap<String, String>> for TranslationInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        TranslationInput::Map(map.into_iter().map(|(k, v)| (k, Some(v))).collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for TranslationInput {
    fn from(entries: [(&str, &str); N]) -> Self {
        TranslationInput::Map(
            entries
                .into_iter()
                .map(|(lang, text)| (lang.to_string(), Some(text.to_string())))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, Option<&str>); N]> for TranslationInput {
    fn from(entries: [(&str, Option<&str>); N]) -> Self {
        TranslationInput::Map(
            entries
                .into_iter()
                .map(|(lang, text)| (lang.to_string(), text.map(str::to_string)))
                .collect(),
        )
    }
}

/// Gather `field`'s columns into a container.
///
/// Null and empty columns are skipped. Returns `None` when no language has
/// a stored text. The container carries the configured default-language
/// override.
pub fn get_translated<S: ColumnSource + ?Sized>(
    store: &S,
    field: &BoundField,
    config: &LanguageConfig,
) -> Option<TranslatedString> {
    let mut translated = TranslatedString::new();
    for (lang, column) in field.language_columns() {
        if let Some(text) = store.column(column).and_then(Value::as_translation) {
            translated.set(lang, text);
        }
    }

    if translated.is_empty() {
        return None;
    }
    translated.set_default_language(config.default_language().map(str::to_string));
    Some(translated)
}

/// Scatter `input` over `field`'s columns.
///
/// Languages are validated before anything is written, so an invalid input
/// leaves the store untouched.
#[tracing::instrument(level = "debug", skip(store, field, input), fields(field = %field.logical_name()))]
pub fn set_translated<S: ColumnStore + ?Sized>(
    store: &mut S,
    field: &BoundField,
    input: impl Into<TranslationInput>,
) -> Result<()> {
    let writes: Vec<(&str, Value)> = match input.into() {
        TranslationInput::Map(map) => resolve_columns(field, map.into_iter())?,
        TranslationInput::Translated(translated) => resolve_columns(
            field,
            translated
                .into_map()
                .into_iter()
                .map(|(lang, text)| (lang, Some(text))),
        )?,
        TranslationInput::Text(text) => {
            let column = column_for(field, DEFAULT_LANGUAGE)?;
            vec![(column, Value::Text(text))]
        }
        TranslationInput::Null => field
            .language_columns()
            .map(|(_, column)| (column, Value::Null))
            .collect(),
    };

    tracing::trace!(columns = writes.len(), "Writing translatable field");
    for (column, value) in writes {
        store.set_column(column, value);
    }
    Ok(())
}

fn column_for<'f>(field: &'f BoundField, language: &str) -> Result<&'f str> {
    field
        .column_for(language)
        .ok_or_else(|| Error::UnsupportedLanguage {
            field: field.logical_name().to_string(),
            language: language.to_string(),
        })
}

fn resolve_columns(
    field: &BoundField,
    entries: impl Iterator<Item = (String, Option<String>)>,
) -> Result<Vec<(&str, Value)>> {
    entries
        .map(|(lang, text)| {
            let column = column_for(field, &lang)?;
            Ok((column, text.map_or(Value::Null, Value::Text)))
        })
        .collect()
}
