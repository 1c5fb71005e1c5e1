use strum::Display;

use crate::generator::type_model::TypeModel;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub interfaces_generated: usize,
  pub enums_generated: usize,
  pub type_aliases_generated: usize,
  pub refs_resolved: usize,
  pub files_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_interface(&mut self) {
    self.interfaces_generated += 1;
    self.types_generated += 1;
  }

  pub fn record_enum(&mut self) {
    self.enums_generated += 1;
    self.types_generated += 1;
  }

  pub fn record_type_alias(&mut self) {
    self.type_aliases_generated += 1;
    self.types_generated += 1;
  }

  /// Records a top-level model by the kind of declaration it renders to.
  pub fn record_model(&mut self, model: &TypeModel) {
    if model.is_enum() {
      self.record_enum();
    } else if model.is_interface() {
      self.record_interface();
    } else {
      self.record_type_alias();
    }
    self.refs_resolved += model.referenced_names().len();
  }

  pub fn record_files(&mut self, count: usize) {
    self.files_generated += count;
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}': external reference '{reference}' is not resolved")]
  ExternalReference { schema_name: String, reference: String },
  #[strum(to_string = "Schema '{schema_name}': reference '{reference}' does not name a declared schema")]
  UnknownReference { schema_name: String, reference: String },
  #[strum(to_string = "Schema '{schema_name}': type name collides with an earlier schema, emitted as '{type_name}'")]
  RenamedType { schema_name: String, type_name: String },
}

impl GenerationWarning {
  pub fn schema_name(&self) -> &str {
    match self {
      Self::ExternalReference { schema_name, .. }
      | Self::UnknownReference { schema_name, .. }
      | Self::RenamedType { schema_name, .. } => schema_name,
    }
  }
}
