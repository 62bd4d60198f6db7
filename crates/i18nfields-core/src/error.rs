//! Error types for i18nfields.
//!
//! Every failure is synchronous and raised straight to the caller. Errors are
//! grouped by [`ErrorKind`] so callers can tell a misdeclared model apart from
//! a bad write.

use std::error::Error as StdError;
use std::fmt;

/// Result alias used across the i18nfields crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The model or language configuration is invalid. Raised while the
    /// schema is being declared, never during a write.
    Config,
    /// A write referenced something outside the declared vocabulary
    /// (unknown language, unknown field).
    Validation,
    /// A write supplied a value of a shape that cannot be stored.
    Type,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Config => write!(f, "configuration error"),
            ErrorKind::Validation => write!(f, "validation error"),
            ErrorKind::Type => write!(f, "type error"),
        }
    }
}

/// Errors raised by i18nfields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A translatable field wraps a primitive kind that is not text.
    UnsupportedFieldKind {
        /// Logical field name (or the base field's name before binding).
        field: String,
        /// SQL name of the rejected kind.
        sql_type: String,
    },
    /// A configured language code is malformed.
    InvalidLanguageCode(String),
    /// Two fields of one model expand to the same physical column.
    DuplicateColumn {
        /// Table the model maps to.
        table: String,
        /// The clashing column name.
        column: String,
    },
    /// Configuration input could not be read or parsed.
    InvalidConfig(String),
    /// A write used a language that is not part of the configured set.
    UnsupportedLanguage {
        /// Logical field being written.
        field: String,
        /// The offending language code.
        language: String,
    },
    /// A field name is not declared on the model.
    UnknownField {
        /// Table the model maps to.
        table: String,
        /// The unknown name.
        field: String,
    },
    /// A write supplied a value that is neither a mapping, a translated
    /// string, plain text, nor null.
    UnsupportedValueType {
        /// Logical field being written.
        field: String,
        /// Short description of what was found.
        found: String,
    },
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFieldKind { .. }
            | Error::InvalidLanguageCode(_)
            | Error::DuplicateColumn { .. }
            | Error::InvalidConfig(_) => ErrorKind::Config,
            Error::UnsupportedLanguage { .. } | Error::UnknownField { .. } => {
                ErrorKind::Validation
            }
            Error::UnsupportedValueType { .. } => ErrorKind::Type,
        }
    }

    /// True for configuration errors.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self.kind(), ErrorKind::Config)
    }

    /// True for validation errors.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    /// True for type errors.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self.kind(), ErrorKind::Type)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedFieldKind { field, sql_type } => write!(
                f,
                "field type {} is not supported for translatable field '{}'",
                sql_type, field
            ),
            Error::InvalidLanguageCode(code) => write!(f, "invalid language code: '{}'", code),
            Error::DuplicateColumn { table, column } => {
                write!(f, "duplicate column '{}' on table '{}'", column, table)
            }
            Error::InvalidConfig(msg) => write!(f, "invalid language configuration: {}", msg),
            Error::UnsupportedLanguage { field, language } => write!(
                f,
                "language '{}' is not supported (field '{}')",
                language, field
            ),
            Error::UnknownField { table, field } => {
                write!(f, "unknown field '{}' on table '{}'", field, table)
            }
            Error::UnsupportedValueType { field, found } => write!(
                f,
                "type {} is not supported for translatable field '{}'",
                found, field
            ),
        }
    }
}

impl StdError for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let config = Error::UnsupportedFieldKind {
            field: "title".to_string(),
            sql_type: "INTEGER".to_string(),
        };
        assert_eq!(config.kind(), ErrorKind::Config);
        assert!(config.is_config());

        let validation = Error::UnsupportedLanguage {
            field: "title".to_string(),
            language: "es".to_string(),
        };
        assert!(validation.is_validation());

        let ty = Error::UnsupportedValueType {
            field: "title".to_string(),
            found: "number".to_string(),
        };
        assert!(ty.is_type());
        assert!(!ty.is_validation());
    }

    #[test]
    fn test_display_names_the_language() {
        let err = Error::UnsupportedLanguage {
            field: "title".to_string(),
            language: "es".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "language 'es' is not supported (field 'title')"
        );
    }
}
