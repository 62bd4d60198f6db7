//! Model queries and translatable-aware value projections.
//!
//! [`ModelQuery`] collects filters, ordering and a limit for one model.
//! Calling [`values`](TranslatableValues::values) on it (or on any other
//! [`QuerySource`]) yields a [`ValuesQuery`] whose projection has translatable
//! logical fields expanded into per-language objects.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use i18nfields_core::{LanguageConfig, SqlType};
//! use i18nfields_schema::{FieldDef, ModelSchema};
//! use i18nfields_query::{ModelQuery, TranslatableValues};
//!
//! let config = Arc::new(LanguageConfig::new(["en"]).unwrap());
//! let schema = ModelSchema::builder("product", config)
//!     .field(FieldDef::new("id", SqlType::BigInt).primary_key())
//!     .translatable("name", FieldDef::varchar("name", 255))
//!     .build()
//!     .unwrap();
//!
//! let (sql, params) = ModelQuery::new(schema)
//!     .filter_eq("id", 7_i64)
//!     .values(&["name"])
//!     .build();
//! assert_eq!(
//!     sql,
//!     r#"SELECT json_build_object('default', "name_default", 'en', "name_en") AS "name" FROM "product" WHERE "id" = $1"#
//! );
//! assert_eq!(params.len(), 1);
//! ```

use std::sync::Arc;

use i18nfields_core::{ColumnSource, Value};
use i18nfields_schema::ModelSchema;
use serde_json::{Map, Value as JsonValue};

use crate::dialect::Dialect;
use crate::projection::{ProjectionItem, expand_projection, project_row};

/// A WHERE condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = <bound value>`
    Eq {
        /// Physical column name.
        column: String,
        /// Bound parameter.
        value: Value,
    },
    /// Raw SQL condition without parameters.
    Raw(String),
}

/// An ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column or alias to sort by.
    pub column: String,
    /// Sort descending.
    pub descending: bool,
}

/// The composable state shared by every query over a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParts {
    /// Conditions joined with AND.
    pub filters: Vec<Filter>,
    /// Ordering terms, applied in order.
    pub order_by: Vec<OrderBy>,
    /// Row limit.
    pub limit: Option<u64>,
}

/// Anything that can be turned into a value projection over one model.
///
/// Custom query types implement this to get
/// [`values`](TranslatableValues::values) for free.
pub trait QuerySource {
    /// The model the query reads from.
    fn schema(&self) -> &Arc<ModelSchema>;

    /// Filters, ordering and limit accumulated so far.
    fn parts(&self) -> QueryParts;
}

/// Translatable-aware projection, available on every [`QuerySource`].
pub trait TranslatableValues: QuerySource {
    /// Project `fields`, expanding translatable logical names into
    /// `{language: value}` objects. An empty list selects every column.
    fn values<S: AsRef<str>>(&self, fields: &[S]) -> ValuesQuery {
        let schema = Arc::clone(self.schema());
        let projection = expand_projection(&schema, fields);
        ValuesQuery {
            schema,
            parts: self.parts(),
            projection,
            annotations: Vec::new(),
        }
    }
}

impl<T: QuerySource + ?Sized> TranslatableValues for T {}

/// Query over all rows of one model.
#[derive(Debug, Clone)]
pub struct ModelQuery {
    schema: Arc<ModelSchema>,
    parts: QueryParts,
}

impl ModelQuery {
    /// Query every row of `schema`.
    pub fn new(schema: impl Into<Arc<ModelSchema>>) -> Self {
        Self {
            schema: schema.into(),
            parts: QueryParts::default(),
        }
    }

    /// Add a `column = value` condition.
    pub fn filter_eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parts.filters.push(Filter::Eq {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Add a raw SQL condition.
    pub fn filter(mut self, sql: impl Into<String>) -> Self {
        self.parts.filters.push(Filter::Raw(sql.into()));
        self
    }

    /// Sort ascending by `column`.
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.parts.order_by.push(OrderBy {
            column: column.into(),
            descending: false,
        });
        self
    }

    /// Sort descending by `column`.
    pub fn order_by_desc(mut self, column: impl Into<String>) -> Self {
        self.parts.order_by.push(OrderBy {
            column: column.into(),
            descending: true,
        });
        self
    }

    /// Limit the number of rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.parts.limit = Some(limit);
        self
    }
}

impl QuerySource for ModelQuery {
    fn schema(&self) -> &Arc<ModelSchema> {
        &self.schema
    }

    fn parts(&self) -> QueryParts {
        self.parts.clone()
    }
}

/// A query returning projected rows rather than records.
#[derive(Debug, Clone)]
pub struct ValuesQuery {
    schema: Arc<ModelSchema>,
    parts: QueryParts,
    projection: Option<Vec<ProjectionItem>>,
    annotations: Vec<ProjectionItem>,
}

impl ValuesQuery {
    /// The expanded projection, `None` when every column is selected.
    pub fn projection(&self) -> Option<&[ProjectionItem]> {
        self.projection.as_deref()
    }

    /// Add a named SQL expression to the select list.
    pub fn annotate(mut self, alias: impl Into<String>, sql: impl Into<String>) -> Self {
        self.annotations.push(ProjectionItem::Expr {
            alias: alias.into(),
            sql: sql.into(),
        });
        self
    }

    /// The full select list: the projection (or every column) followed by
    /// annotations.
    pub fn select_items(&self) -> Vec<ProjectionItem> {
        let mut items = match &self.projection {
            Some(items) => items.clone(),
            None => self
                .schema
                .column_names()
                .map(|name| ProjectionItem::Column(name.to_string()))
                .collect(),
        };
        items.extend(self.annotations.iter().cloned());
        items
    }

    /// Build SQL for PostgreSQL.
    pub fn build(&self) -> (String, Vec<Value>) {
        self.build_with_dialect(Dialect::default())
    }

    /// Build SQL and bound parameters for `dialect`.
    #[tracing::instrument(level = "debug", skip(self), fields(table = %self.schema.table_name()))]
    pub fn build_with_dialect(&self, dialect: Dialect) -> (String, Vec<Value>) {
        let select: Vec<String> = self
            .select_items()
            .iter()
            .map(|item| item.to_sql(dialect))
            .collect();

        let mut sql = format!(
            "SELECT {} FROM {}",
            select.join(", "),
            dialect.quote_identifier(self.schema.table_name())
        );
        let mut params = Vec::new();

        if !self.parts.filters.is_empty() {
            let conditions: Vec<String> = self
                .parts
                .filters
                .iter()
                .map(|filter| match filter {
                    Filter::Eq { column, value } => {
                        params.push(value.clone());
                        format!(
                            "{} = {}",
                            dialect.quote_identifier(column),
                            dialect.placeholder(params.len())
                        )
                    }
                    Filter::Raw(raw) => raw.clone(),
                })
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        if !self.parts.order_by.is_empty() {
            let terms: Vec<String> = self
                .parts
                .order_by
                .iter()
                .map(|term| {
                    let direction = if term.descending { "DESC" } else { "ASC" };
                    format!("{} {}", dialect.quote_identifier(&term.column), direction)
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&terms.join(", "));
        }

        if let Some(limit) = self.parts.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        tracing::trace!(sql = %sql, params = params.len(), "Built values query");
        (sql, params)
    }

    /// Shape already-fetched rows the way the database would.
    ///
    /// Each translatable field becomes a `{language: value}` object holding
    /// every configured language, with `null` for missing columns.
    pub fn project<R: ColumnSource>(&self, rows: &[R]) -> Vec<Map<String, JsonValue>> {
        let items = self.select_items();
        rows.iter()
            .map(|row| project_row(&self.schema, Some(&items), row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18nfields_core::{LanguageConfig, SqlType};
    use i18nfields_schema::FieldDef;
    use serde_json::json;
    use std::collections::HashMap;

    fn schema() -> Arc<ModelSchema> {
        let config = Arc::new(LanguageConfig::new(["en", "fr"]).unwrap());
        Arc::new(
            ModelSchema::builder("product", config)
                .field(FieldDef::new("id", SqlType::BigInt).primary_key())
                .translatable("name", FieldDef::varchar("name", 255).nullable())
                .field(FieldDef::new("price", SqlType::Double))
                .build()
                .unwrap(),
        )
    }

    fn row(id: i64, en: &str, fr: Option<&str>) -> HashMap<String, Value> {
        let mut row = HashMap::new();
        row.insert("id".to_string(), Value::BigInt(id));
        row.insert("name_default".to_string(), Value::Null);
        row.insert("name_en".to_string(), Value::from(en));
        row.insert(
            "name_fr".to_string(),
            fr.map_or(Value::Null, Value::from),
        );
        row.insert("price".to_string(), Value::Double(9.5));
        row
    }

    #[test]
    fn test_values_without_fields_selects_all_columns() {
        let fields: [&str; 0] = [];
        let query = ModelQuery::new(schema()).values(&fields);
        assert!(query.projection().is_none());
        let (sql, params) = query.build();
        assert_eq!(
            sql,
            r#"SELECT "id", "name_default", "name_en", "name_fr", "price" FROM "product""#
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_build_full_query() {
        let (sql, params) = ModelQuery::new(schema())
            .filter_eq("price", 9.5)
            .filter("\"name_en\" IS NOT NULL")
            .order_by_desc("id")
            .limit(10)
            .values(&["id", "name"])
            .build();
        assert_eq!(
            sql,
            concat!(
                r#"SELECT "id", json_build_object('default', "name_default", 'en', "name_en", 'fr', "name_fr") AS "name""#,
                r#" FROM "product" WHERE "price" = $1 AND "name_en" IS NOT NULL ORDER BY "id" DESC LIMIT 10"#
            )
        );
        assert_eq!(params, vec![Value::Double(9.5)]);
    }

    #[test]
    fn test_sqlite_placeholders() {
        let (sql, _) = ModelQuery::new(schema())
            .filter_eq("id", 1_i64)
            .filter_eq("price", 2.0)
            .values(&["id"])
            .build_with_dialect(Dialect::Sqlite);
        assert_eq!(
            sql,
            r#"SELECT "id" FROM "product" WHERE "id" = ? AND "price" = ?"#
        );
    }

    #[test]
    fn test_annotate_appends_expression() {
        let query = ModelQuery::new(schema())
            .values(&["name"])
            .annotate("label", "upper(\"name_en\")");
        let (sql, _) = query.build();
        assert!(sql.ends_with(r#"upper("name_en") AS "label" FROM "product""#));

        let mut fetched = row(1, "Mouse", Some("Souris"));
        fetched.insert("label".to_string(), Value::from("MOUSE"));
        let projected = query.project(&[fetched]);
        assert_eq!(
            JsonValue::Object(projected[0].clone()),
            json!({
                "name": {"default": null, "en": "Mouse", "fr": "Souris"},
                "label": "MOUSE",
            })
        );
    }

    #[test]
    fn test_project_rows() {
        let query = ModelQuery::new(schema()).values(&["id", "name"]);
        let projected = query.project(&[row(1, "Mouse", Some("Souris")), row(2, "Cable", None)]);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[1]["id"], json!(2));
        assert_eq!(
            projected[1]["name"],
            json!({"default": null, "en": "Cable", "fr": null})
        );
    }

    struct CheapProducts {
        schema: Arc<ModelSchema>,
    }

    impl QuerySource for CheapProducts {
        fn schema(&self) -> &Arc<ModelSchema> {
            &self.schema
        }

        fn parts(&self) -> QueryParts {
            QueryParts {
                filters: vec![Filter::Raw("\"price\" < 10".to_string())],
                order_by: vec![OrderBy {
                    column: "price".to_string(),
                    descending: false,
                }],
                limit: None,
            }
        }
    }

    #[test]
    fn test_custom_query_source_gets_values() {
        let (sql, _) = CheapProducts { schema: schema() }.values(&["name"]).build();
        assert_eq!(
            sql,
            concat!(
                r#"SELECT json_build_object('default', "name_default", 'en', "name_en", 'fr', "name_fr") AS "name""#,
                r#" FROM "product" WHERE "price" < 10 ORDER BY "price" ASC"#
            )
        );
    }
}
