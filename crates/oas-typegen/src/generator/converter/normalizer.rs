//! Recursive normalization of raw schema nodes into [`TypeModel`] trees.
//!
//! Raw nodes may carry several overlapping facets at once. [`SchemaShape::classify`] settles
//! which one wins using a fixed priority: array, then enum, then structural schema (`$ref`
//! and/or `properties`), then plain scalar.

use indexmap::IndexMap;
use serde_json::Value;

use super::type_resolver::{ANY_TYPE, map_type};
use crate::{
  generator::type_model::TypeModel,
  openapi::SchemaObject,
  utils::{SchemaExt, get_ref_name},
};

/// The effective shape of a raw schema node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SchemaShape<'a> {
  /// `type: array`, with its (possibly missing) item schema.
  Array { items: Option<&'a SchemaObject> },
  /// An `enum` list, which may be empty.
  Enum { values: &'a [Value] },
  /// A node passing [`SchemaExt::is_schema`]. The reference and the properties are independent,
  /// so both can be present on the same node, and either can be missing even though the facet
  /// was declared (`null`, or an empty `$ref`).
  Structured {
    reference: Option<&'a str>,
    properties: Option<&'a IndexMap<String, SchemaObject>>,
  },
  /// A type-only leaf, or a node with no recognizable facets at all.
  Scalar,
}

impl<'a> SchemaShape<'a> {
  pub(crate) fn classify(schema: &'a SchemaObject) -> Self {
    if schema.is_array() {
      return Self::Array {
        items: schema.items.as_deref(),
      };
    }

    if let Some(values) = schema.enum_values.as_deref() {
      return Self::Enum { values };
    }

    if schema.is_schema() {
      return Self::Structured {
        reference: schema.reference(),
        properties: schema.properties(),
      };
    }

    Self::Scalar
  }
}

/// Normalizes a single schema node.
///
/// `is_required` is the parent's verdict for this node; pass `false` for top-level schemas.
/// Array items are always normalized as not required. Never fails: anything unrecognizable
/// degrades to `any`.
pub(crate) fn normalize(schema: &SchemaObject, is_required: bool) -> TypeModel {
  let mut model = TypeModel::new(
    map_type(schema.schema_type.as_deref(), schema.format.as_deref()),
    is_required,
  );

  match SchemaShape::classify(schema) {
    SchemaShape::Array { items } => {
      let item = items.map_or_else(|| TypeModel::new(ANY_TYPE, false), |items| normalize(items, false));
      model.resolved_type = item.resolved_type;
      model.is_ref = item.is_ref;
      model.properties = item.properties;
      model.is_array = true;
    }
    SchemaShape::Enum { values } => {
      model.enum_values = values.to_vec();
    }
    SchemaShape::Structured { reference, properties } => {
      if let Some(reference) = reference {
        model.is_ref = true;
        model.resolved_type = get_ref_name(reference).to_string();
      }
      if let Some(properties) = properties {
        model.properties = properties
          .iter()
          .map(|(name, property)| (name.clone(), normalize(property, schema.is_required(name))))
          .collect();
      }
    }
    SchemaShape::Scalar => {}
  }

  model
}

/// Normalizes every named top-level schema, preserving declaration order.
pub(crate) fn normalize_schemas(schemas: &IndexMap<String, SchemaObject>) -> IndexMap<String, TypeModel> {
  schemas
    .iter()
    .map(|(name, schema)| (name.clone(), normalize(schema, false)))
    .collect()
}
