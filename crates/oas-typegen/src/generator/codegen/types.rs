use indexmap::IndexMap;
use serde_json::Value;

use super::PropertyCase;
use crate::{
  generator::type_model::TypeModel,
  naming::identifiers::{to_property_key, to_type_name},
};

pub(crate) const INDENT: &str = "  ";

const UNTYPED_ARRAY: &str = "Array";

/// Renders the TypeScript type expression for a model.
///
/// `depth` is the nesting level of the enclosing declaration and only affects the indentation
/// of inline object literals.
pub(crate) fn render_type(model: &TypeModel, case: PropertyCase, depth: usize) -> String {
  let base = if model.is_enum() {
    render_enum(&model.enum_values)
  } else if model.is_ref {
    to_type_name(&model.resolved_type)
  } else if model.has_properties() {
    render_object_literal(&model.properties, case, depth)
  } else {
    render_primitive(&model.resolved_type)
  };

  match (model.is_array, needs_parens(model)) {
    (true, true) => format!("({base})[]"),
    (true, false) => format!("{base}[]"),
    (false, _) => base,
  }
}

fn needs_parens(model: &TypeModel) -> bool {
  model.enum_values.len() > 1 || (!model.is_enum() && !model.is_ref && model.has_properties())
}

/// Renders one `key?: type` member line at the given depth.
pub(crate) fn render_property(name: &str, model: &TypeModel, case: PropertyCase, depth: usize) -> String {
  let key = to_property_key(&case.apply(name));
  let optional = if model.is_required { "" } else { "?" };
  format!(
    "{}{key}{optional}: {}",
    INDENT.repeat(depth),
    render_type(model, case, depth)
  )
}

fn render_object_literal(properties: &IndexMap<String, TypeModel>, case: PropertyCase, depth: usize) -> String {
  let mut lines = vec!["{".to_string()];
  lines.extend(
    properties
      .iter()
      .map(|(name, property)| render_property(name, property, case, depth + 1)),
  );
  lines.push(format!("{}}}", INDENT.repeat(depth)));
  lines.join("\n")
}

fn render_primitive(resolved_type: &str) -> String {
  if resolved_type == UNTYPED_ARRAY {
    "any[]".to_string()
  } else {
    resolved_type.to_string()
  }
}

fn render_enum(values: &[Value]) -> String {
  values.iter().map(render_literal).collect::<Vec<_>>().join(" | ")
}

pub(crate) fn render_literal(value: &Value) -> String {
  match value {
    Value::String(text) => format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'")),
    other => other.to_string(),
  }
}
