use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A raw OpenAPI 3.0 Schema Object.
///
/// Facets that only matter for their presence are kept as [`Value`] and deserialized with
/// [`present`], so an explicit `null` still counts as "set". `$ref`, `properties`, `required`
/// and `allOf` are also read for their content, so they track presence and value separately:
/// `Some(None)` is an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObject {
  #[serde(default, rename = "$ref", deserialize_with = "nullable")]
  pub reference: Option<Option<String>>,
  #[serde(default, rename = "type")]
  pub schema_type: Option<String>,
  #[serde(default)]
  pub format: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub items: Option<Box<SchemaObject>>,
  #[serde(default, rename = "enum")]
  pub enum_values: Option<Vec<Value>>,
  #[serde(default, deserialize_with = "nullable")]
  pub properties: Option<Option<IndexMap<String, SchemaObject>>>,
  #[serde(default, deserialize_with = "nullable")]
  pub required: Option<Option<Vec<String>>>,
  #[serde(default, deserialize_with = "nullable")]
  pub all_of: Option<Option<Vec<SchemaObject>>>,
  #[serde(default, deserialize_with = "present")]
  pub additional_properties: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub discriminator: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub read_only: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub xml: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub external_docs: Option<Value>,
  #[serde(default, deserialize_with = "present")]
  pub example: Option<Value>,
}

impl SchemaObject {
  /// The `$ref` target. A `null` or empty `$ref` names nothing.
  pub fn reference(&self) -> Option<&str> {
    self
      .reference
      .as_ref()
      .and_then(Option::as_deref)
      .filter(|reference| !reference.is_empty())
  }

  pub fn properties(&self) -> Option<&IndexMap<String, SchemaObject>> {
    self.properties.as_ref().and_then(Option::as_ref)
  }

  pub fn required(&self) -> &[String] {
    self.required.as_ref().and_then(Option::as_deref).unwrap_or_default()
  }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
  D: Deserializer<'de>,
{
  Value::deserialize(deserializer).map(Some)
}
