use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A normalized, renderer-ready description of one schema node.
///
/// Built once by the normalizer and never mutated afterwards. Two properties referencing the
/// same component each own a separate `TypeModel`; nothing is shared or cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeModel {
  /// Target primitive name (`string`, `number`, ...) or, for references, the referenced
  /// schema name.
  pub resolved_type: String,
  /// Whether the parent object lists this node in its `required` set.
  pub is_required: bool,
  pub is_array: bool,
  /// True for references, including arrays whose items are references.
  pub is_ref: bool,
  pub enum_values: Vec<Value>,
  pub properties: IndexMap<String, TypeModel>,
}

impl TypeModel {
  pub(crate) fn new(resolved_type: impl Into<String>, is_required: bool) -> Self {
    Self {
      resolved_type: resolved_type.into(),
      is_required,
      is_array: false,
      is_ref: false,
      enum_values: vec![],
      properties: IndexMap::new(),
    }
  }

  pub fn is_enum(&self) -> bool {
    !self.enum_values.is_empty()
  }

  pub fn has_properties(&self) -> bool {
    !self.properties.is_empty()
  }

  /// True when a top-level node renders as an interface rather than a type alias.
  pub fn is_interface(&self) -> bool {
    self.has_properties() && !self.is_array && !self.is_ref
  }

  /// Collects every schema name referenced by this node or any nested property.
  pub fn referenced_names(&self) -> BTreeSet<&str> {
    let mut names = BTreeSet::new();
    self.collect_references(&mut names);
    names
  }

  fn collect_references<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
    if self.is_ref {
      names.insert(self.resolved_type.as_str());
    }
    for property in self.properties.values() {
      property.collect_references(names);
    }
  }
}
