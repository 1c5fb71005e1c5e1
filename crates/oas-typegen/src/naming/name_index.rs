use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::identifiers::{ensure_unique, to_type_name};
use crate::generator::{metrics::GenerationWarning, type_model::TypeModel};

/// Unique TypeScript type names for a set of component schemas.
///
/// Names are assigned in declaration order. When two schema names sanitize to the same
/// identifier (`Pet.Item` and `Pet_Item`), the later one gets a numeric suffix.
#[derive(Debug, Clone, Default)]
pub(crate) struct TypeNameIndex {
  names: IndexMap<String, String>,
}

impl TypeNameIndex {
  pub(crate) fn new<'a>(schema_names: impl IntoIterator<Item = &'a str>) -> Self {
    let mut used = BTreeSet::new();
    let mut names = IndexMap::new();

    for schema_name in schema_names {
      if names.contains_key(schema_name) {
        continue;
      }
      let type_name = ensure_unique(&to_type_name(schema_name), &used);
      used.insert(type_name.clone());
      names.insert(schema_name.to_string(), type_name);
    }

    Self { names }
  }

  /// The type name for `schema_name`, falling back to plain sanitizing for names outside the index.
  pub(crate) fn type_name(&self, schema_name: &str) -> String {
    self
      .names
      .get(schema_name)
      .cloned()
      .unwrap_or_else(|| to_type_name(schema_name))
  }

  /// Rewrites every reference in `model` to the unique type name of its target.
  pub(crate) fn rename_references(&self, model: &mut TypeModel) {
    if model.is_ref
      && let Some(type_name) = self.names.get(&model.resolved_type)
    {
      model.resolved_type.clone_from(type_name);
    }
    for property in model.properties.values_mut() {
      self.rename_references(property);
    }
  }

  /// One warning per schema whose type name had to be suffixed.
  pub(crate) fn warnings(&self) -> Vec<GenerationWarning> {
    self
      .names
      .iter()
      .filter(|(schema_name, type_name)| to_type_name(schema_name) != **type_name)
      .map(|(schema_name, type_name)| GenerationWarning::RenamedType {
        schema_name: schema_name.clone(),
        type_name: type_name.clone(),
      })
      .collect()
  }
}
