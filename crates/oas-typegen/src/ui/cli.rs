use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas-typegen")]
#[command(author, version, about = "OpenAPI 3.0.0 to TypeScript type definition generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript definitions from an OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the OpenAPI specification file (.json, .yaml or .yml)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where the generated definitions will be written
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Name of the exported TypeScript namespace (default: derived from info.title)
  #[arg(short, long, value_name = "NAME")]
  pub namespace: Option<String>,

  /// How property names are rendered
  #[arg(long = "case", value_enum, default_value = "preserve")]
  pub case: CaseMode,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseMode {
  /// Keep property names exactly as declared
  Preserve,
  /// Rewrite snake_case property names to camelCase
  Camel,
  /// Rewrite camelCase property names to snake_case
  Snake,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all named schemas and their normalized types
  Schemas {
    /// Path to the OpenAPI specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Print the normalized models as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
  },
  /// List all operations defined in the OpenAPI specification
  Operations {
    /// Path to the OpenAPI specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_generate() {
    let cli = Cli::parse_from([
      "oas-typegen",
      "generate",
      "-i",
      "petstore.yaml",
      "-o",
      "out",
      "--case",
      "camel",
      "--namespace",
      "Store",
    ]);

    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(command.input, PathBuf::from("petstore.yaml"));
    assert_eq!(command.output, PathBuf::from("out"));
    assert_eq!(command.case, CaseMode::Camel);
    assert_eq!(command.namespace.as_deref(), Some("Store"));
    assert!(!command.verbose);
  }

  #[test]
  fn test_parse_list_schemas_json() {
    let cli = Cli::parse_from(["oas-typegen", "--color", "never", "list", "schemas", "-i", "api.json", "--json"]);
    assert_eq!(cli.color, ColorMode::Never);
    assert!(matches!(
      cli.command,
      Commands::List {
        list_command: ListCommands::Schemas { json: true, .. }
      }
    ));
  }
}
