//! Orchestration for the OpenAPI to TypeScript generation pipeline.
//!
//! The `Orchestrator` owns a version-checked document and exposes the two things callers
//! need: the normalized type model for every named schema, and the rendered output files.
//!
//! ## Usage
//!
//! ```ignore
//! let document = SpecLoader::open(Path::new("petstore.json")).await?.parse()?;
//! let orchestrator = Orchestrator::new(document, None, PropertyCase::default())?;
//! let output = orchestrator.generate("petstore.json");
//!
//! println!("Generated {} types with {} warnings", output.stats.types_generated, output.stats.warnings.len());
//! ```

use indexmap::IndexMap;

use crate::{
  generator::{
    codegen::{CodeGenerator, CodeMetadata, Definition, GeneratedFile, PropertyCase},
    converter::normalize_schemas,
    metrics::GenerationStats,
    schema_registry::{SchemaRegistry, SpecError},
    type_model::TypeModel,
  },
  naming::{identifiers::to_namespace_name, name_index::TypeNameIndex},
  openapi::OpenApiDocument,
};

/// High-level entry point for OpenAPI to TypeScript generation.
pub struct Orchestrator {
  registry: SchemaRegistry,
  namespace: Option<String>,
  property_case: PropertyCase,
}

/// Rendered files plus statistics about the run.
#[derive(Debug)]
pub struct GeneratedFinalOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

impl Orchestrator {
  /// Creates a new orchestrator from a parsed document.
  ///
  /// # Errors
  ///
  /// Returns [`SpecError::UnsupportedVersion`] unless the document declares OpenAPI 3.0.0.
  pub fn new(
    document: OpenApiDocument,
    namespace: Option<String>,
    property_case: PropertyCase,
  ) -> Result<Self, SpecError> {
    Ok(Self {
      registry: SchemaRegistry::new(document)?,
      namespace,
      property_case,
    })
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata::from_document(self.registry.document())
  }

  /// The namespace name for `namespace.ts`: the configured one, or one derived from the API title.
  pub fn namespace(&self) -> String {
    self
      .namespace
      .clone()
      .unwrap_or_else(|| to_namespace_name(&self.registry.document().info.title))
  }

  /// Normalizes every component schema, keyed by schema name in declaration order.
  pub fn normalize(&self) -> IndexMap<String, TypeModel> {
    normalize_schemas(self.registry.schemas())
  }

  /// Runs the full pipeline: reference checks, normalization and rendering.
  pub fn generate(&self, source_path: &str) -> GeneratedFinalOutput {
    let mut stats = GenerationStats::default();
    stats.record_warnings(self.registry.check_references());

    let models = self.normalize();
    for model in models.values() {
      stats.record_model(model);
    }

    let names = TypeNameIndex::new(models.keys().map(String::as_str));
    stats.record_warnings(names.warnings());

    let renamed: Vec<(String, &str, TypeModel)> = models
      .iter()
      .map(|(name, model)| {
        let mut model = model.clone();
        names.rename_references(&mut model);
        (names.type_name(name), name.as_str(), model)
      })
      .collect();

    let definitions: Vec<Definition<'_>> = renamed
      .iter()
      .map(|(type_name, name, model)| Definition {
        name: type_name,
        model,
        schema: self.registry.get_schema(name),
      })
      .collect();

    let metadata = self.metadata();
    let namespace = self.namespace();
    let files = CodeGenerator::new(&definitions, &metadata, &namespace, self.property_case).generate(source_path);
    stats.record_files(files.len());

    GeneratedFinalOutput { files, stats }
  }
}
