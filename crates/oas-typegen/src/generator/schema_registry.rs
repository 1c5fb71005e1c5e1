use indexmap::IndexMap;

use crate::{
  generator::metrics::GenerationWarning,
  openapi::{OpenApiDocument, SchemaObject},
  utils::{get_ref_name, is_local_ref},
};

/// The only OpenAPI version this generator accepts.
pub const SUPPORTED_OPENAPI_VERSION: &str = "3.0.0";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
  #[error("Only 3.0.0 is supported. Your version: {0}")]
  UnsupportedVersion(String),
}

/// Holds a version-checked document and its named component schemas.
#[derive(Debug, Clone)]
pub(crate) struct SchemaRegistry {
  document: OpenApiDocument,
  schemas: IndexMap<String, SchemaObject>,
}

impl SchemaRegistry {
  /// Accepts `document` only if it declares exactly OpenAPI 3.0.0.
  pub(crate) fn new(document: OpenApiDocument) -> Result<Self, SpecError> {
    if document.openapi != SUPPORTED_OPENAPI_VERSION {
      return Err(SpecError::UnsupportedVersion(document.openapi));
    }

    let schemas = document.schemas();
    Ok(Self { document, schemas })
  }

  pub(crate) fn document(&self) -> &OpenApiDocument {
    &self.document
  }

  pub(crate) fn schemas(&self) -> &IndexMap<String, SchemaObject> {
    &self.schemas
  }

  pub(crate) fn get_schema(&self, name: &str) -> Option<&SchemaObject> {
    self.schemas.get(name)
  }

  pub(crate) fn contains(&self, name: &str) -> bool {
    self.schemas.contains_key(name)
  }

  /// Reports references that will not resolve to a generated type: external documents and
  /// local paths naming no declared schema. Resolution itself never happens here.
  pub(crate) fn check_references(&self) -> Vec<GenerationWarning> {
    let mut warnings = vec![];

    for (schema_name, schema) in &self.schemas {
      let mut references = vec![];
      RefCollector::collect(schema, &mut references);

      for reference in references {
        if !is_local_ref(reference) {
          warnings.push(GenerationWarning::ExternalReference {
            schema_name: schema_name.clone(),
            reference: reference.to_string(),
          });
        } else if !self.contains(get_ref_name(reference)) {
          warnings.push(GenerationWarning::UnknownReference {
            schema_name: schema_name.clone(),
            reference: reference.to_string(),
          });
        }
      }
    }

    warnings
  }
}

/// Walks a raw schema tree and gathers every `$ref` it contains.
pub(crate) struct RefCollector;

impl RefCollector {
  pub(crate) fn collect<'a>(schema: &'a SchemaObject, references: &mut Vec<&'a str>) {
    if let Some(reference) = schema.reference() {
      references.push(reference);
    }
    if let Some(items) = schema.items.as_deref() {
      Self::collect(items, references);
    }
    for property in schema.properties().into_iter().flat_map(IndexMap::values) {
      Self::collect(property, references);
    }
    for member in schema.all_of.iter().flatten().flatten() {
      Self::collect(member, references);
    }
  }
}
