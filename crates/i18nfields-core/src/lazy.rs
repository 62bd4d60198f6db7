//! Text evaluated once per language.
//!
//! [`LazyText`] is anything that can render itself for a given language:
//! closures over a message catalog, or another [`TranslatedString`].
//! [`translate_each`] turns such a source into a stored [`TranslatedString`]
//! by rendering it for every configured language.

use crate::language::{DEFAULT_LANGUAGE, LanguageConfig};
use crate::translated::TranslatedString;

/// Text whose content depends on the language it is rendered in.
pub trait LazyText {
    /// Render the text for `language`.
    fn render(&self, language: &str) -> String;
}

impl<F> LazyText for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, language: &str) -> String {
        self(language)
    }
}

impl LazyText for TranslatedString {
    fn render(&self, language: &str) -> String {
        self.resolve(language)
    }
}

/// Render `source` in every configured language.
///
/// If every language produced the same text the result collapses to a single
/// `"default"` translation.
///
/// ```
/// use i18nfields_core::{LanguageConfig, translate_each};
///
/// let config = LanguageConfig::new(["en", "fr"]).unwrap();
/// let greeting = translate_each(&config, &|lang: &str| match lang {
///     "fr" => "Bonjour".to_string(),
///     _ => "Hello".to_string(),
/// });
/// assert_eq!(greeting.resolve("fr"), "Bonjour");
/// ```
pub fn translate_each<L>(config: &LanguageConfig, source: &L) -> TranslatedString
where
    L: LazyText + ?Sized,
{
    translate_each_with(config, source, |text| text)
}

/// Like [`translate_each`], passing every rendering through `formatter`.
pub fn translate_each_with<L, F>(config: &LanguageConfig, source: &L, formatter: F) -> TranslatedString
where
    L: LazyText + ?Sized,
    F: Fn(String) -> String,
{
    let rendered: Vec<(&str, String)> = config
        .configured()
        .iter()
        .map(|lang| (lang.as_str(), formatter(source.render(lang))))
        .collect();

    let uniform = rendered
        .first()
        .is_some_and(|(_, first)| rendered.iter().all(|(_, text)| text == first));

    let mut value = if uniform {
        let text = rendered
            .into_iter()
            .next()
            .map(|(_, text)| text)
            .unwrap_or_default();
        std::iter::once((DEFAULT_LANGUAGE, text)).collect()
    } else {
        rendered.into_iter().collect::<TranslatedString>()
    };

    if let Some(default_language) = config.default_language() {
        value = value.with_default_language(default_language);
    }
    tracing::debug!(languages = value.len(), uniform, "Rendered text per language");
    value
}
