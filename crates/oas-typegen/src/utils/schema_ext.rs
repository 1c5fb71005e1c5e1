use crate::openapi::SchemaObject;

/// The `type` value that marks an array descriptor.
pub(crate) const ARRAY_TYPE: &str = "array";

/// Extension methods for `SchemaObject` to query its shape conveniently.
pub(crate) trait SchemaExt {
  /// Returns true if the schema declares `type: array`.
  fn is_array(&self) -> bool;

  /// Returns true if `property` is listed in the schema's `required` set.
  /// An absent `required` list is treated as empty.
  fn is_required(&self, property: &str) -> bool;

  /// Returns true if the schema carries object- or reference-level structure rather than being a
  /// bare type-only leaf.
  ///
  /// This is a shape test only: any one of `$ref`, `allOf`, `additionalProperties`,
  /// `properties`, `discriminator`, `readOnly`, `xml`, `externalDocs`, `example` or `required`
  /// is enough, so a schema with nothing but an `example` still qualifies. It does not imply
  /// that `properties` is populated. Presence is what counts: an explicit `null` or an empty
  /// `$ref` still qualifies.
  fn is_schema(&self) -> bool;
}

impl SchemaExt for SchemaObject {
  fn is_array(&self) -> bool {
    self.schema_type.as_deref() == Some(ARRAY_TYPE)
  }

  fn is_required(&self, property: &str) -> bool {
    self.required().iter().any(|name| name == property)
  }

  fn is_schema(&self) -> bool {
    self.reference.is_some()
      || self.all_of.is_some()
      || self.additional_properties.is_some()
      || self.properties.is_some()
      || self.discriminator.is_some()
      || self.read_only.is_some()
      || self.xml.is_some()
      || self.external_docs.is_some()
      || self.example.is_some()
      || self.required.is_some()
  }
}
