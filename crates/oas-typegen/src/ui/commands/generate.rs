use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::{GeneratedFile, PropertyCase},
    metrics::GenerationStats,
    orchestrator::Orchestrator,
  },
  openapi::OpenApiDocument,
  ui::{CaseMode, Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub namespace: Option<String>,
  pub property_case: PropertyCase,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      namespace,
      case,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }

    let namespace = match namespace.map(|name| name.trim().to_string()) {
      Some(name) if name.is_empty() => anyhow::bail!("Namespace (-n) must not be empty"),
      other => other,
    };

    Ok(Self {
      input,
      output,
      namespace,
      property_case: case.into(),
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<OpenApiDocument> {
    SpecLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator(&self, document: OpenApiDocument) -> anyhow::Result<Orchestrator> {
    Ok(Orchestrator::new(document, self.namespace.clone(), self.property_case)?)
  }

  async fn write_file(&self, file: &GeneratedFile) -> anyhow::Result<PathBuf> {
    let path = self.output.join(&file.path);
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(&path, &file.content)
      .await
      .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
  }
}

impl From<CaseMode> for PropertyCase {
  fn from(mode: CaseMode) -> Self {
    match mode {
      CaseMode::Preserve => Self::Preserve,
      CaseMode::Camel => Self::Camel,
      CaseMode::Snake => Self::Snake,
    }
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating TypeScript definitions...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} interfaces", stats.interfaces_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    self.stat("", format!("{} type aliases", stats.type_aliases_generated));
    self.stat("References:", stats.refs_resolved.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_file(&self, path: &Path) {
    if self.config.verbose {
      self.stat("Generated:", path.display().to_string());
    }
  }

  fn log_success(&self, files: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {files} TypeScript files").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<GenerationStats> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_generating();
  let orchestrator = config.create_orchestrator(document)?;
  let source_path = config.input.display().to_string();
  let output = orchestrator.generate(&source_path);
  logger.print_statistics(&output.stats);

  logger.log_writing();
  for file in &output.files {
    let path = config.write_file(file).await?;
    logger.log_file(&path);
  }

  logger.log_success(output.files.len());
  Ok(output.stats)
}
