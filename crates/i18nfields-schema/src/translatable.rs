//! Translatable field declaration and per-language column fanout.
//!
//! A [`TranslatableField`] wraps a text [`FieldDef`]. Binding it to a logical
//! name produces a [`BoundField`]: one physical column per language of the
//! configured set, named `<logical>_<language>`.
//!
//! ```
//! use i18nfields_core::LanguageConfig;
//! use i18nfields_schema::{FieldDef, TranslatableField};
//!
//! let config = LanguageConfig::new(["en", "pt-BR"]).unwrap();
//! let bound = TranslatableField::new(FieldDef::varchar("title", 200))
//!     .unwrap()
//!     .bind("title", &config, 0);
//!
//! let names: Vec<_> = bound.columns().iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["title_default", "title_en", "title_pt_BR"]);
//! ```

use i18nfields_core::{Error, LanguageConfig, Result, column_name};

use crate::field::FieldDef;

/// A translatable text field before it is attached to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableField {
    base: FieldDef,
}

impl TranslatableField {
    /// Wrap a base field.
    ///
    /// Only bounded strings, slugs and unbounded text can be translated;
    /// any other kind is a configuration error.
    pub fn new(base: FieldDef) -> Result<Self> {
        if !base.sql_type.is_text() {
            return Err(Error::UnsupportedFieldKind {
                field: base.name.clone(),
                sql_type: base.sql_type.sql_name(),
            });
        }
        Ok(Self { base })
    }

    /// The wrapped base field.
    pub fn base(&self) -> &FieldDef {
        &self.base
    }

    /// Translatable fields are never set directly by generic forms.
    pub const fn editable(&self) -> bool {
        false
    }

    /// Expand into per-language columns.
    ///
    /// Column `idx` of the language set gets ordinal `first_ordinal + idx`,
    /// label `"<label> (<language>)"` and is not editable on its own.
    pub fn bind(&self, logical_name: &str, config: &LanguageConfig, first_ordinal: usize) -> BoundField {
        let label = self.base.label.as_deref().unwrap_or(logical_name);

        let columns: Vec<FieldDef> = config
            .languages()
            .iter()
            .enumerate()
            .map(|(idx, lang)| FieldDef {
                name: column_name(logical_name, lang),
                label: Some(format!("{} ({})", label, lang)),
                editable: false,
                ordinal: first_ordinal + idx,
                ..self.base.clone()
            })
            .collect();

        tracing::debug!(
            field = %logical_name,
            columns = columns.len(),
            first_ordinal,
            "Expanded translatable field"
        );

        BoundField {
            logical_name: logical_name.to_string(),
            languages: config.languages().to_vec(),
            columns,
        }
    }
}

/// A translatable field attached to a model under a logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    logical_name: String,
    languages: Vec<String>,
    columns: Vec<FieldDef>,
}

impl BoundField {
    /// The logical attribute name.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Physical columns, one per language, in language-set order.
    pub fn columns(&self) -> &[FieldDef] {
        &self.columns
    }

    /// `(language, column name)` pairs in language-set order.
    pub fn language_columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages
            .iter()
            .zip(&self.columns)
            .map(|(lang, col)| (lang.as_str(), col.name.as_str()))
    }

    /// Column name storing `language`, if the language is configured.
    pub fn column_for(&self, language: &str) -> Option<&str> {
        self.language_columns()
            .find(|(lang, _)| *lang == language)
            .map(|(_, col)| col)
    }

    /// Languages covered by this field.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18nfields_core::SqlType;

    fn config() -> LanguageConfig {
        LanguageConfig::new(["en", "fr"]).unwrap()
    }

    #[test]
    fn test_rejects_non_text_kinds() {
        let err = TranslatableField::new(FieldDef::new("count", SqlType::Integer)).unwrap_err();
        assert!(err.is_config());

        assert!(TranslatableField::new(FieldDef::new("flag", SqlType::Boolean)).is_err());
        assert!(TranslatableField::new(FieldDef::new("doc", SqlType::Json)).is_err());
    }

    #[test]
    fn test_accepts_text_kinds() {
        assert!(TranslatableField::new(FieldDef::varchar("name", 255)).is_ok());
        assert!(TranslatableField::new(FieldDef::text("body")).is_ok());
        let slug = TranslatableField::new(FieldDef::slug("slug", 50)).unwrap();
        assert!(!slug.editable());
    }

    #[test]
    fn test_bind_expands_every_language() {
        let bound = TranslatableField::new(FieldDef::varchar("name", 255).nullable())
            .unwrap()
            .bind("name", &config(), 3);

        assert_eq!(bound.logical_name(), "name");
        let columns = bound.columns();
        assert_eq!(columns.len(), 3);

        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["name_default", "name_en", "name_fr"]);

        let ordinals: Vec<_> = columns.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, [3, 4, 5]);

        for column in columns {
            assert_eq!(column.sql_type, SqlType::Varchar(255));
            assert!(column.nullable);
            assert!(!column.editable);
        }
    }

    #[test]
    fn test_bind_labels() {
        let labelled = TranslatableField::new(FieldDef::text("body").label("Body text"))
            .unwrap()
            .bind("body", &config(), 0);
        assert_eq!(labelled.columns()[1].label.as_deref(), Some("Body text (en)"));

        let unlabelled = TranslatableField::new(FieldDef::text("body"))
            .unwrap()
            .bind("description", &config(), 0);
        assert_eq!(
            unlabelled.columns()[0].label.as_deref(),
            Some("description (default)")
        );
    }

    #[test]
    fn test_column_for() {
        let config = LanguageConfig::new(["en", "pt-BR"]).unwrap();
        let bound = TranslatableField::new(FieldDef::text("body"))
            .unwrap()
            .bind("body", &config, 0);
        assert_eq!(bound.column_for("default"), Some("body_default"));
        assert_eq!(bound.column_for("pt-BR"), Some("body_pt_BR"));
        assert_eq!(bound.column_for("it"), None);
    }

    #[test]
    fn test_bind_is_deterministic() {
        let field = TranslatableField::new(FieldDef::text("body")).unwrap();
        assert_eq!(field.bind("body", &config(), 7), field.bind("body", &config(), 7));
    }
}
