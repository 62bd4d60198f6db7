//! SQL identifier quoting.

/// Quote an identifier with double quotes (PostgreSQL, SQLite).
///
/// Embedded double quotes are doubled.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote an identifier with backticks (MySQL).
pub fn quote_ident_mysql(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Quote a string literal with single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("name_en"), "\"name_en\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_quote_ident_mysql() {
        assert_eq!(quote_ident_mysql("name_en"), "`name_en`");
        assert_eq!(quote_ident_mysql("a`b"), "`a``b`");
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("pt-BR"), "'pt-BR'");
        assert_eq!(quote_literal("o'clock"), "'o''clock'");
    }
}
