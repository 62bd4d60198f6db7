//! Projection expansion for translatable fields.
//!
//! Asking for a translatable logical field in a projection yields one
//! structured object per row, keyed by every configured language:
//!
//! ```text
//! values("id", "name")  ->  SELECT "id",
//!                                  json_build_object('default', "name_default",
//!                                                    'en', "name_en",
//!                                                    'fr', "name_fr") AS "name"
//! ```
//!
//! Names that are not translatable pass through untouched. The expansion
//! only shapes result rows; it does not restrict which columns are read.

use i18nfields_core::{ColumnSource, Value, quote_literal};
use i18nfields_schema::ModelSchema;
use serde_json::{Map, Value as JsonValue};

use crate::dialect::Dialect;

/// One entry of a projection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionItem {
    /// A plain column, selected as is.
    Column(String),
    /// A translatable field: a `{language: column}` object aliased to the
    /// logical field name.
    Translated {
        /// Logical field name used as result key.
        alias: String,
        /// `(language, column)` pairs in language-set order.
        entries: Vec<(String, String)>,
    },
    /// A named SQL expression passed through verbatim.
    Expr {
        /// Result key.
        alias: String,
        /// Raw SQL.
        sql: String,
    },
}

impl ProjectionItem {
    /// Key of this item in a result row.
    pub fn key(&self) -> &str {
        match self {
            ProjectionItem::Column(name) => name,
            ProjectionItem::Translated { alias, .. } | ProjectionItem::Expr { alias, .. } => alias,
        }
    }

    /// Render as a SELECT list entry.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        match self {
            ProjectionItem::Column(name) => dialect.quote_identifier(name),
            ProjectionItem::Translated { alias, entries } => {
                let args: Vec<String> = entries
                    .iter()
                    .map(|(lang, column)| {
                        format!("{}, {}", quote_literal(lang), dialect.quote_identifier(column))
                    })
                    .collect();
                format!(
                    "{}({}) AS {}",
                    dialect.json_object_fn(),
                    args.join(", "),
                    dialect.quote_identifier(alias)
                )
            }
            ProjectionItem::Expr { alias, sql } => {
                format!("{} AS {}", sql, dialect.quote_identifier(alias))
            }
        }
    }

    /// Evaluate against an in-memory row.
    ///
    /// Columns missing from the row evaluate to `null`. An expression is read
    /// back from the row under its alias, where the host layer put it.
    pub fn evaluate<R: ColumnSource + ?Sized>(&self, row: &R) -> JsonValue {
        let lookup = |column: &str| row.column(column).map_or(JsonValue::Null, Value::to_json);
        match self {
            ProjectionItem::Column(name) => lookup(name),
            ProjectionItem::Translated { entries, .. } => JsonValue::Object(
                entries
                    .iter()
                    .map(|(lang, column)| (lang.clone(), lookup(column)))
                    .collect(),
            ),
            ProjectionItem::Expr { alias, .. } => lookup(alias),
        }
    }
}

/// Replace translatable names in `fields` by per-language object items.
///
/// Returns `None` for an empty field list: the caller keeps its default
/// all-columns projection.
pub fn expand_projection<S: AsRef<str>>(
    schema: &ModelSchema,
    fields: &[S],
) -> Option<Vec<ProjectionItem>> {
    if fields.is_empty() {
        return None;
    }

    let items = fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            match schema.translatable(field) {
                Some(bound) => {
                    tracing::debug!(
                        table = %schema.table_name(),
                        field = %field,
                        languages = bound.languages().len(),
                        "Expanding translatable field in projection"
                    );
                    ProjectionItem::Translated {
                        alias: field.to_string(),
                        entries: bound
                            .language_columns()
                            .map(|(lang, column)| (lang.to_string(), column.to_string()))
                            .collect(),
                    }
                }
                None => ProjectionItem::Column(field.to_string()),
            }
        })
        .collect();

    Some(items)
}

/// Evaluate a projection against one row.
///
/// `None` projects every physical column of the schema.
pub fn project_row<R: ColumnSource + ?Sized>(
    schema: &ModelSchema,
    projection: Option<&[ProjectionItem]>,
    row: &R,
) -> Map<String, JsonValue> {
    match projection {
        Some(items) => items
            .iter()
            .map(|item| (item.key().to_string(), item.evaluate(row)))
            .collect(),
        None => schema
            .column_names()
            .map(|column| {
                let value = row.column(column).map_or(JsonValue::Null, Value::to_json);
                (column.to_string(), value)
            })
            .collect(),
    }
}
