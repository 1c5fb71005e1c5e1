use std::collections::BTreeSet;

use super::{
  Definition, PropertyCase,
  types::{INDENT, render_property, render_type},
};
use crate::{naming::identifiers::to_type_name, utils::text::doc_comment_lines};

/// Renders the body of `models/<Name>.ts` for one named schema.
pub(crate) fn render_definition(definition: &Definition<'_>, case: PropertyCase) -> String {
  let type_name = to_type_name(definition.name);
  let model = definition.model;
  let mut lines = vec![];

  let imports: BTreeSet<String> = model
    .referenced_names()
    .into_iter()
    .map(to_type_name)
    .filter(|name| *name != type_name)
    .collect();
  for import in &imports {
    lines.push(format!("import {{ {import} }} from './{import}'"));
  }
  if !imports.is_empty() {
    lines.push(String::new());
  }

  if let Some(description) = definition.description() {
    lines.extend(doc_comment_lines(description, ""));
  }

  if model.is_interface() {
    lines.push(format!("export interface {type_name} {{"));
    for (name, property) in &model.properties {
      if let Some(description) = definition.property_description(name) {
        lines.extend(doc_comment_lines(description, INDENT));
      }
      lines.push(render_property(name, property, case, 1));
    }
    lines.push("}".to_string());
  } else {
    lines.push(format!("export type {type_name} = {}", render_type(model, case, 0)));
  }

  let mut content = lines.join("\n");
  content.push('\n');
  content
}
