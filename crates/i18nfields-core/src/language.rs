//! Language configuration.
//!
//! The language set is fixed when the configuration is built and never
//! mutated afterwards. It always starts with the [`DEFAULT_LANGUAGE`]
//! pseudo-language, followed by the configured locale codes in order.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Key of the fallback translation.
pub const DEFAULT_LANGUAGE: &str = "default";

/// Environment variable holding the comma-separated configured languages.
pub const LANGUAGES_ENV: &str = "I18N_LANGUAGES";

/// Environment variable holding the optional default-language override.
pub const DEFAULT_LANGUAGE_ENV: &str = "I18N_DEFAULT_LANGUAGE";

fn language_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("language code pattern is valid")
    })
}

/// Check that `code` looks like a language tag (`en`, `pt-BR`, `zh-Hans-CN`).
pub fn validate_language_code(code: &str) -> Result<()> {
    if language_code_regex().is_match(code) {
        Ok(())
    } else {
        Err(Error::InvalidLanguageCode(code.to_string()))
    }
}

/// Physical column name for one language of a logical field.
///
/// Hyphens in the language code become underscores so the result is a plain
/// identifier: `column_name("title", "pt-BR") == "title_pt_BR"`.
#[must_use]
pub fn column_name(field: &str, language: &str) -> String {
    format!("{}_{}", field, language.replace('-', "_"))
}

/// Base subtag of a regional language code (`en-US` -> `en`).
///
/// Returns `None` when the code has no regional part.
#[must_use]
pub fn base_language(language: &str) -> Option<&str> {
    language
        .split_once('-')
        .map(|(base, _)| base)
        .filter(|base| !base.is_empty())
}

/// Supported languages and the optional default-language override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LanguageConfigRepr", into = "LanguageConfigRepr")]
pub struct LanguageConfig {
    /// `"default"` followed by the configured codes.
    all: Vec<String>,
    default_language: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct LanguageConfigRepr {
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_language: Option<String>,
}

impl TryFrom<LanguageConfigRepr> for LanguageConfig {
    type Error = Error;

    fn try_from(repr: LanguageConfigRepr) -> Result<Self> {
        let config = LanguageConfig::new(repr.languages)?;
        match repr.default_language {
            Some(code) => config.with_default_language(code),
            None => Ok(config),
        }
    }
}

impl From<LanguageConfig> for LanguageConfigRepr {
    fn from(config: LanguageConfig) -> Self {
        let mut all = config.all;
        all.remove(0);
        LanguageConfigRepr {
            languages: all,
            default_language: config.default_language,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            all: vec![DEFAULT_LANGUAGE.to_string()],
            default_language: None,
        }
    }
}

impl LanguageConfig {
    /// Build a configuration from the supported locale codes.
    ///
    /// Codes are validated; duplicates and explicit `"default"` entries are
    /// dropped with a warning.
    pub fn new<I, S>(languages: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = vec![DEFAULT_LANGUAGE.to_string()];
        for code in languages {
            let code = code.into();
            validate_language_code(&code)?;
            if code == DEFAULT_LANGUAGE {
                tracing::warn!(
                    language = %code,
                    "Ignoring explicit default language entry; it is always first"
                );
                continue;
            }
            if all.contains(&code) {
                tracing::warn!(language = %code, "Ignoring duplicate language code");
                continue;
            }
            all.push(code);
        }
        Ok(Self {
            all,
            default_language: None,
        })
    }

    /// Set the language used as fallback when a value has no `"default"` entry.
    pub fn with_default_language(mut self, code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        validate_language_code(&code)?;
        self.default_language = Some(code);
        Ok(self)
    }

    /// Read the configuration from `I18N_LANGUAGES` / `I18N_DEFAULT_LANGUAGE`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_vars(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_env_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let languages = lookup(LANGUAGES_ENV).unwrap_or_default();
        let config = Self::new(
            languages
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty()),
        )?;

        match lookup(DEFAULT_LANGUAGE_ENV) {
            Some(code) if !code.trim().is_empty() => config.with_default_language(code.trim()),
            _ => Ok(config),
        }
    }

    /// Parse a JSON document of the form
    /// `{"languages": ["en", "fr"], "default_language": "en"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The full language set, `"default"` first.
    pub fn languages(&self) -> &[String] {
        &self.all
    }

    /// The configured locale codes, without `"default"`.
    pub fn configured(&self) -> &[String] {
        &self.all[1..]
    }

    /// Whether `language` belongs to the full set.
    pub fn contains(&self, language: &str) -> bool {
        self.all.iter().any(|l| l == language)
    }

    /// The default-language override, if any.
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Number of languages in the full set (always at least one).
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Never true: the set always holds `"default"`.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
