use indexmap::IndexMap;
use serde::Deserialize;

use super::SchemaObject;

/// The root of an OpenAPI document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OpenApiDocument {
  /// The OpenAPI version string, e.g. `3.0.0`.
  #[serde(default)]
  pub openapi: String,
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Option<Components>,
}

impl OpenApiDocument {
  /// Returns the named component schemas in declaration order, or an empty map when the
  /// document has no `components` section.
  pub fn schemas(&self) -> IndexMap<String, SchemaObject> {
    self
      .components
      .as_ref()
      .map(|components| components.schemas.clone())
      .unwrap_or_default()
  }

  /// Iterates over every `(path, method, operation)` triple in declaration order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, &'static str, &Operation)> {
    self
      .paths
      .iter()
      .flat_map(|(path, item)| item.methods().map(move |(method, operation)| (path.as_str(), method, operation)))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathItem {
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub patch: Option<Operation>,
  pub trace: Option<Operation>,
}

impl PathItem {
  /// Returns the declared operations paired with their lower-case HTTP method.
  pub fn methods(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
    [
      ("get", &self.get),
      ("put", &self.put),
      ("post", &self.post),
      ("delete", &self.delete),
      ("options", &self.options),
      ("head", &self.head),
      ("patch", &self.patch),
      ("trace", &self.trace),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
}
