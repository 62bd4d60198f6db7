//! SQL dialects.

use i18nfields_core::{quote_ident, quote_ident_mysql};

/// Target SQL dialect for rendered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// PostgreSQL
    #[default]
    Postgres,
    /// SQLite
    Sqlite,
    /// MySQL / MariaDB
    MySql,
}

impl Dialect {
    /// Quote an identifier for this dialect.
    pub fn quote_identifier(self, name: &str) -> String {
        match self {
            Dialect::Postgres | Dialect::Sqlite => quote_ident(name),
            Dialect::MySql => quote_ident_mysql(name),
        }
    }

    /// Bind parameter placeholder for the 1-based `index`.
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }

    /// Function building a JSON object from alternating keys and values.
    pub const fn json_object_fn(self) -> &'static str {
        match self {
            Dialect::Postgres => "json_build_object",
            Dialect::Sqlite => "json_object",
            Dialect::MySql => "JSON_OBJECT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(Dialect::Postgres.quote_identifier("name_en"), "\"name_en\"");
        assert_eq!(Dialect::Sqlite.quote_identifier("name_en"), "\"name_en\"");
        assert_eq!(Dialect::MySql.quote_identifier("name_en"), "`name_en`");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(Dialect::Postgres.placeholder(3), "$3");
        assert_eq!(Dialect::Sqlite.placeholder(3), "?");
        assert_eq!(Dialect::MySql.placeholder(1), "?");
    }

    #[test]
    fn test_default_is_postgres() {
        assert_eq!(Dialect::default(), Dialect::Postgres);
        assert_eq!(Dialect::default().json_object_fn(), "json_build_object");
    }
}
