//! Raw OpenAPI 3.0 document model.
//!
//! These types mirror the JSON/YAML document as loosely as possible. Every schema facet is
//! optional, so a node that carries several overlapping facets (for example both `$ref` and
//! `properties`) deserializes without losing any of them. Interpretation of those facets is
//! left to the normalizer.

mod document;
mod schema;

pub use document::{OpenApiDocument, Operation};
pub use schema::SchemaObject;
