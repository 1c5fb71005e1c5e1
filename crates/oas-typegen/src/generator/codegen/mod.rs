use std::path::PathBuf;

use super::type_model::TypeModel;
use crate::{
  naming::identifiers::{camel_to_snake, snake_to_camel, to_type_name},
  openapi::SchemaObject,
};

pub mod definitions;
pub mod metadata;
pub mod mod_file;
pub mod types;

#[cfg(test)]
mod tests;

pub use metadata::CodeMetadata;

pub(crate) const MODELS_DIR: &str = "models";
pub(crate) const MODELS_INDEX_FILE: &str = "index.ts";
pub(crate) const NAMESPACE_FILE: &str = "namespace.ts";
pub(crate) const ROOT_FILE: &str = "index.d.ts";

/// How property names are rewritten when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyCase {
  #[default]
  Preserve,
  Camel,
  Snake,
}

impl PropertyCase {
  pub(crate) fn apply(self, name: &str) -> String {
    match self {
      PropertyCase::Preserve => name.to_string(),
      PropertyCase::Camel => snake_to_camel(name),
      PropertyCase::Snake => camel_to_snake(name),
    }
  }
}

/// A rendered file, with `path` relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub content: String,
}

/// A named, normalized schema plus the raw node it came from (for descriptions).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Definition<'a> {
  /// Declared name; the orchestrator passes the already unique type name.
  pub name: &'a str,
  pub model: &'a TypeModel,
  pub schema: Option<&'a SchemaObject>,
}

impl<'a> Definition<'a> {
  pub(crate) fn description(&self) -> Option<&'a str> {
    self.schema.and_then(|schema| schema.description.as_deref())
  }

  pub(crate) fn property_description(&self, property: &str) -> Option<&'a str> {
    self
      .schema
      .and_then(SchemaObject::properties)
      .and_then(|properties| properties.get(property))
      .and_then(|property| property.description.as_deref())
  }
}

/// Renders normalized definitions into the TypeScript output tree.
pub(crate) struct CodeGenerator<'a> {
  definitions: &'a [Definition<'a>],
  metadata: &'a CodeMetadata,
  namespace: &'a str,
  property_case: PropertyCase,
}

impl<'a> CodeGenerator<'a> {
  pub(crate) fn new(
    definitions: &'a [Definition<'a>],
    metadata: &'a CodeMetadata,
    namespace: &'a str,
    property_case: PropertyCase,
  ) -> Self {
    Self {
      definitions,
      metadata,
      namespace,
      property_case,
    }
  }

  /// Produces every output file. The `models/` tree is only emitted when there is at least one
  /// definition.
  pub(crate) fn generate(&self, source_path: &str) -> Vec<GeneratedFile> {
    let header = self.metadata.file_header(source_path);
    let has_models = !self.definitions.is_empty();
    let mut files = vec![];

    if has_models {
      let models_dir = PathBuf::from(MODELS_DIR);
      for definition in self.definitions {
        files.push(GeneratedFile {
          path: models_dir.join(format!("{}.ts", to_type_name(definition.name))),
          content: header.clone() + &definitions::render_definition(definition, self.property_case),
        });
      }
      files.push(GeneratedFile {
        path: models_dir.join(MODELS_INDEX_FILE),
        content: header.clone() + &mod_file::render_models_index(self.definitions),
      });
    }

    files.push(GeneratedFile {
      path: PathBuf::from(NAMESPACE_FILE),
      content: header.clone() + &mod_file::render_namespace(self.namespace, self.metadata.description.as_deref(), self.definitions),
    });
    files.push(GeneratedFile {
      path: PathBuf::from(ROOT_FILE),
      content: header + &mod_file::render_root(has_models),
    });

    files
  }
}
