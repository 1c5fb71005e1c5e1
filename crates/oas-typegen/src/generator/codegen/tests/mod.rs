
use serde_json::Value;

use crate::{
  generator::{converter::normalizer::normalize, type_model::TypeModel},
  openapi::SchemaObject,
};

fn schema(value: Value) -> SchemaObject {
  serde_json::from_value(value).unwrap()
}

fn model(value: Value) -> TypeModel {
  normalize(&schema(value), false)
}
