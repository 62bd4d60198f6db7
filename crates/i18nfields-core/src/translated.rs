//! The translated string container.
//!
//! A [`TranslatedString`] holds one text per language and behaves like plain
//! text in whichever language the caller asks for. Resolution falls back from
//! a regional code to its base subtag, then to the default translation, and
//! finally to empty text. It never fails.
//!
//! ```
//! use i18nfields_core::TranslatedString;
//!
//! let name: TranslatedString = [("en", "Laptop"), ("fr", "Ordinateur portable")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(name.resolve("fr"), "Ordinateur portable");
//! assert_eq!(name.resolve("en-GB"), "Laptop");
//! assert_eq!(name.resolve("it"), "");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::language::{DEFAULT_LANGUAGE, base_language};
use crate::lazy::LazyText;

/// Source of the language a value should be rendered in.
///
/// The active language belongs to the caller (usually the request being
/// served); it is passed in on every read and never cached.
pub trait ActiveLanguage {
    /// The active language code, if any.
    fn active_language(&self) -> Option<&str>;
}

impl ActiveLanguage for str {
    fn active_language(&self) -> Option<&str> {
        Some(self)
    }
}

impl ActiveLanguage for String {
    fn active_language(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl ActiveLanguage for Option<&str> {
    fn active_language(&self) -> Option<&str> {
        *self
    }
}

impl ActiveLanguage for Option<String> {
    fn active_language(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<T: ActiveLanguage + ?Sized> ActiveLanguage for &T {
    fn active_language(&self) -> Option<&str> {
        (**self).active_language()
    }
}

/// A text value with one translation per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedString {
    translations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_language: Option<String>,
}

impl TranslatedString {
    /// Create an empty value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `language` as fallback when there is no `"default"` translation.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Set or clear the default-language override.
    pub fn set_default_language(&mut self, language: Option<String>) {
        self.default_language = language;
    }

    /// The default-language override carried by this value.
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Store or overwrite one translation.
    ///
    /// Language membership is not checked here; the field accessor does that.
    pub fn set(&mut self, language: impl Into<String>, text: impl Into<String>) {
        let language = language.into();
        let text = text.into();
        tracing::trace!(language = %language, text = %text, "Set translation");
        self.translations.insert(language, text);
    }

    /// Remove one translation, returning it.
    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.translations.remove(language)
    }

    /// The stored translation for exactly `language`, without fallback.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }

    /// Whether a translation is stored for exactly `language`.
    pub fn contains(&self, language: &str) -> bool {
        self.translations.contains_key(language)
    }

    /// Text for `language`, following the fallback chain.
    ///
    /// Exact match first, then the base subtag of a regional code
    /// (`en-US` -> `en`), then [`default_translation`](Self::default_translation).
    /// An explicitly stored empty string is a value and stops the chain.
    pub fn resolve(&self, language: &str) -> String {
        let found = self.get(language).or_else(|| {
            base_language(language).and_then(|base| self.get(base))
        });
        let text = match found {
            Some(text) => text.to_string(),
            None => self.default_translation(),
        };
        tracing::trace!(language = %language, text = %text, "Resolved translation");
        text
    }

    /// The fallback text.
    ///
    /// The `"default"` translation if present, otherwise the translation for
    /// the default-language override, otherwise empty text.
    pub fn default_translation(&self) -> String {
        let key = if self.contains(DEFAULT_LANGUAGE) {
            Some(DEFAULT_LANGUAGE)
        } else {
            self.default_language.as_deref()
        };
        key.and_then(|k| self.get(k))
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Text in the caller's active language.
    ///
    /// Without an active language this is the default translation.
    pub fn current_value(&self, active: &(impl ActiveLanguage + ?Sized)) -> String {
        match active.active_language() {
            Some(language) => self.resolve(language),
            None => self.default_translation(),
        }
    }

    /// A [`Display`](fmt::Display) view rendering the value in `active`.
    pub fn localized<'a, A: ActiveLanguage + ?Sized>(&'a self, active: &'a A) -> Localized<'a, A> {
        Localized {
            value: self,
            active,
        }
    }

    /// Languages that have a stored translation, in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        self.translations.keys().map(String::as_str).collect()
    }

    /// Iterate over `(language, text)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.translations
            .iter()
            .map(|(lang, text)| (lang.as_str(), text.as_str()))
    }

    /// Number of stored translations.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// True when no translation is stored.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Borrow the underlying mapping.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.translations
    }

    /// Consume the value, returning the underlying mapping.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.translations
    }

    /// Concatenate with another translated value.
    ///
    /// The result covers the union of both language sets; for each language
    /// both sides are resolved (each with its own fallback) and joined.
    ///
    /// The result keeps the left default-language override, or the right one
    /// when the left has none. A language outside the union resolves through
    /// that override to its joined text, not to each side's own fallback.
    pub fn concat(&self, other: &TranslatedString) -> TranslatedString {
        let mut languages: Vec<&str> = self.languages();
        for lang in other.languages() {
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }

        let translations = languages
            .into_iter()
            .map(|lang| {
                let mut text = self.resolve(lang);
                text.push_str(&other.resolve(lang));
                (lang.to_string(), text)
            })
            .collect();

        TranslatedString {
            translations,
            default_language: self
                .default_language
                .clone()
                .or_else(|| other.default_language.clone()),
        }
    }

    /// Append plain text to every translation.
    pub fn concat_text(&self, text: &str) -> TranslatedString {
        self.map_languages(|_| text.to_string())
    }

    /// Append text rendered per language to every translation.
    pub fn concat_lazy(&self, lazy: &(impl LazyText + ?Sized)) -> TranslatedString {
        self.map_languages(|lang| lazy.render(lang))
    }

    /// Prepend plain text to every translation.
    pub fn prepend_text(&self, text: &str) -> TranslatedString {
        let translations = self
            .translations
            .keys()
            .map(|lang| {
                let mut joined = text.to_string();
                joined.push_str(&self.resolve(lang));
                (lang.clone(), joined)
            })
            .collect();
        TranslatedString {
            translations,
            default_language: self.default_language.clone(),
        }
    }

    fn map_languages<F>(&self, suffix: F) -> TranslatedString
    where
        F: Fn(&str) -> String,
    {
        let translations = self
            .translations
            .keys()
            .map(|lang| {
                let mut text = self.resolve(lang);
                text.push_str(&suffix(lang));
                (lang.clone(), text)
            })
            .collect();
        TranslatedString {
            translations,
            default_language: self.default_language.clone(),
        }
    }
}

/// Renders a [`TranslatedString`] in a given active language.
pub struct Localized<'a, A: ActiveLanguage + ?Sized> {
    value: &'a TranslatedString,
    active: &'a A,
}

impl<A: ActiveLanguage + ?Sized> fmt::Display for Localized<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.current_value(self.active))
    }
}

impl<A: ActiveLanguage + ?Sized> fmt::Debug for Localized<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localized")
            .field("value", self.value)
            .field("active", &self.active.active_language())
            .finish()
    }
}

/// Renders the default translation.
impl fmt::Display for TranslatedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default_translation())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslatedString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TranslatedString {
            translations: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            default_language: None,
        }
    }
}

impl From<BTreeMap<String, String>> for TranslatedString {
    fn from(translations: BTreeMap<String, String>) -> Self {
        TranslatedString {
            translations,
            default_language: None,
        }
    }
}

/// Plain text becomes the `"default"` translation.
impl From<&str> for TranslatedString {
    fn from(text: &str) -> Self {
        std::iter::once((DEFAULT_LANGUAGE, text)).collect()
    }
}

impl From<String> for TranslatedString {
    fn from(text: String) -> Self {
        TranslatedString::from(text.as_str())
    }
}

impl Add<&TranslatedString> for &TranslatedString {
    type Output = TranslatedString;

    fn add(self, rhs: &TranslatedString) -> TranslatedString {
        self.concat(rhs)
    }
}

impl Add<TranslatedString> for TranslatedString {
    type Output = TranslatedString;

    fn add(self, rhs: TranslatedString) -> TranslatedString {
        self.concat(&rhs)
    }
}

impl Add<&TranslatedString> for TranslatedString {
    type Output = TranslatedString;

    fn add(self, rhs: &TranslatedString) -> TranslatedString {
        self.concat(rhs)
    }
}

impl Add<&str> for &TranslatedString {
    type Output = TranslatedString;

    fn add(self, rhs: &str) -> TranslatedString {
        self.concat_text(rhs)
    }
}

impl Add<&str> for TranslatedString {
    type Output = TranslatedString;

    fn add(self, rhs: &str) -> TranslatedString {
        self.concat_text(rhs)
    }
}

impl Add<&TranslatedString> for &str {
    type Output = TranslatedString;

    fn add(self, rhs: &TranslatedString) -> TranslatedString {
        rhs.prepend_text(self)
    }
}
