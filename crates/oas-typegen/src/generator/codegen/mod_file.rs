use super::{Definition, MODELS_DIR};
use crate::{naming::identifiers::to_type_name, utils::text::doc_comment_lines};

/// Renders `models/index.ts`, re-exporting every definition module in declaration order.
pub(crate) fn render_models_index(definitions: &[Definition<'_>]) -> String {
  definitions
    .iter()
    .map(|definition| format!("export * from './{}'\n", to_type_name(definition.name)))
    .collect()
}

/// Renders `namespace.ts`, exposing every model under a single TypeScript namespace. The API
/// description, when present, documents the namespace.
pub(crate) fn render_namespace(namespace: &str, description: Option<&str>, definitions: &[Definition<'_>]) -> String {
  let mut doc: String = description
    .map(|description| doc_comment_lines(description, ""))
    .unwrap_or_default()
    .into_iter()
    .map(|line| line + "\n")
    .collect();

  if definitions.is_empty() {
    doc.push_str(&format!("export namespace {namespace} {{}}\n"));
    return doc;
  }

  let members: String = definitions
    .iter()
    .map(|definition| {
      let name = to_type_name(definition.name);
      format!("  export type {name} = models.{name}\n")
    })
    .collect();

  format!("import * as models from './{MODELS_DIR}'\n\n{doc}export namespace {namespace} {{\n{members}}}\n")
}

/// Renders `index.d.ts`, the package entry point.
pub(crate) fn render_root(has_models: bool) -> String {
  let mut content = String::from("export * from './namespace'\n");
  if has_models {
    content.push_str(&format!("export * from './{MODELS_DIR}'\n"));
  }
  content
}
