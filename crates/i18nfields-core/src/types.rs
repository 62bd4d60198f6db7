//! Primitive SQL column types.

use serde::{Deserialize, Serialize};

/// SQL type of a physical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    /// BOOLEAN
    Boolean,
    /// INTEGER
    Integer,
    /// BIGINT
    BigInt,
    /// DOUBLE PRECISION
    Double,
    /// Bounded string, VARCHAR(n)
    Varchar(u32),
    /// Bounded URL-safe string, stored as VARCHAR(n)
    Slug(u32),
    /// Unbounded text
    Text,
    /// TIMESTAMP
    Timestamp,
    /// JSON document
    Json,
}

impl SqlType {
    /// The SQL name used in DDL.
    pub fn sql_name(&self) -> String {
        match self {
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Double => "DOUBLE PRECISION".to_string(),
            SqlType::Varchar(n) | SqlType::Slug(n) => format!("VARCHAR({})", n),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
            SqlType::Json => "JSON".to_string(),
        }
    }

    /// Whether this is one of the text kinds a translatable field may wrap.
    pub const fn is_text(&self) -> bool {
        matches!(self, SqlType::Varchar(_) | SqlType::Slug(_) | SqlType::Text)
    }

    /// Maximum length for bounded kinds.
    pub const fn max_length(&self) -> Option<u32> {
        match self {
            SqlType::Varchar(n) | SqlType::Slug(n) => Some(*n),
            _ => None,
        }
    }
}
