//! Schema definitions for i18nfields.
//!
//! This crate turns model declarations into a [`ModelSchema`]: the ordered
//! list of physical columns plus the registry of translatable logical fields.
//!
//! A translatable field `title` wrapping a text kind expands into one column
//! per language of the configured set: `title_default`, `title_en`,
//! `title_fr`, ... (hyphens in language codes become underscores). Ordinals
//! are assigned in declaration order, so the expansion is the same on every
//! run.

pub mod field;
pub mod model;
pub mod registry;
pub mod translatable;

pub use field::FieldDef;
pub use model::{ModelSchema, ModelSchemaBuilder};
pub use registry::TranslatableRegistry;
pub use translatable::{BoundField, TranslatableField};
