use serde_json::Value;

use crate::openapi::OpenApiDocument;

pub(crate) const PETSTORE_JSON: &str = include_str!("../../fixtures/petstore.json");

pub(crate) fn document(value: Value) -> OpenApiDocument {
  serde_json::from_value(value).unwrap()
}

pub(crate) fn petstore_document() -> OpenApiDocument {
  serde_json::from_str(PETSTORE_JSON).unwrap()
}
