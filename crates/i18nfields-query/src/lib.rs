//! Query-side support for translatable fields.
//!
//! A translatable logical field has no column of its own. When it appears in
//! a value projection it is rewritten into a JSON object built from its
//! per-language columns, keyed by language, so consumers receive every
//! translation of the field in one value.
//!
//! - [`expand_projection`] performs the rewrite on a list of field names.
//! - [`TranslatableValues`] exposes it as `values(...)` on every
//!   [`QuerySource`], including custom query types.
//! - [`Dialect`] selects the JSON object function and identifier quoting.

pub mod dialect;
pub mod projection;
pub mod query;

pub use dialect::Dialect;
pub use projection::{ProjectionItem, expand_projection, project_row};
pub use query::{
    Filter, ModelQuery, OrderBy, QueryParts, QuerySource, TranslatableValues, ValuesQuery,
};
