use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    codegen::{PropertyCase, types::render_type},
    orchestrator::Orchestrator,
    type_model::TypeModel,
  },
  naming::operations::operation_name,
  openapi::OpenApiDocument,
  ui::{Colors, colors::to_comfy, term_width},
  utils::spec::SpecLoader,
};

async fn load_document(input: &Path) -> anyhow::Result<OpenApiDocument> {
  SpecLoader::open(input).await?.parse()
}

fn new_table(colors: &Colors, headers: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(to_comfy(colors.label())));
  }
  table.set_header(row);
  table
}

fn schema_kind(model: &TypeModel) -> &'static str {
  if model.is_enum() {
    "enum"
  } else if model.is_interface() {
    "interface"
  } else {
    "type"
  }
}

/// Prints every named schema with the TypeScript type it normalizes to, or the normalized models
/// as JSON when `json` is set.
pub async fn list_schemas(input: &Path, json: bool, colors: &Colors) -> anyhow::Result<()> {
  let document = load_document(input).await?;
  let models = Orchestrator::new(document, None, PropertyCase::default())?.normalize();

  if json {
    println!("{}", serde_json::to_string_pretty(&models)?);
    return Ok(());
  }

  let mut table = new_table(colors, &["SCHEMA", "KIND", "TYPE"]);
  for (name, model) in &models {
    let rendered = if model.is_interface() {
      format!("{{ {} properties }}", model.properties.len())
    } else {
      render_type(model, PropertyCase::default(), 0)
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(schema_kind(model)).fg(to_comfy(colors.accent())));
    row.add_cell(Cell::new(rendered).fg(to_comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

/// Prints every operation with its display name, HTTP method, path and summary, sorted by name.
pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = load_document(input).await?;

  let mut operations: Vec<_> = document
    .operations()
    .map(|(path, method, operation)| {
      (
        operation_name(method, operation),
        method.to_uppercase(),
        path.to_string(),
        operation.summary.clone().unwrap_or_default(),
      )
    })
    .collect();
  operations.sort_by(|a, b| a.0.cmp(&b.0));

  let mut table = new_table(colors, &["OPERATION", "METHOD", "PATH", "SUMMARY"]);
  for (name, method, path, summary) in operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(method)
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(path).fg(to_comfy(colors.primary())));
    row.add_cell(Cell::new(summary).fg(to_comfy(colors.timestamp())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::colors::Theme;

  const DOCUMENT: &str = r##"{
    "openapi": "3.0.0",
    "info": { "title": "T", "version": "1" },
    "paths": {
      "/pets": { "get": { "operationId": "listPets" }, "post": {} }
    },
    "components": {
      "schemas": {
        "Pet": { "properties": { "name": { "type": "string" } } },
        "Status": { "enum": ["open", "closed"] },
        "Pets": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } }
      }
    }
  }"##;

  #[test]
  fn test_schema_kind() {
    let document: OpenApiDocument = serde_json::from_str(DOCUMENT).unwrap();
    let models = Orchestrator::new(document, None, PropertyCase::default()).unwrap().normalize();
    assert_eq!(schema_kind(&models["Pet"]), "interface");
    assert_eq!(schema_kind(&models["Status"]), "enum");
    assert_eq!(schema_kind(&models["Pets"]), "type");
  }

  #[tokio::test]
  async fn test_list_commands_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.json");
    tokio::fs::write(&input, DOCUMENT).await.unwrap();
    let colors = Colors::new(false, Theme::Dark);

    list_schemas(&input, false, &colors).await.unwrap();
    list_schemas(&input, true, &colors).await.unwrap();
    list_operations(&input, &colors).await.unwrap();
  }

  #[tokio::test]
  async fn test_list_schemas_rejects_unsupported_version() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.json");
    tokio::fs::write(&input, r#"{"openapi":"2.0"}"#).await.unwrap();

    let error = list_schemas(&input, false, &Colors::new(false, Theme::Dark)).await.unwrap_err();
    assert_eq!(error.to_string(), "Only 3.0.0 is supported. Your version: 2.0");
  }
}
