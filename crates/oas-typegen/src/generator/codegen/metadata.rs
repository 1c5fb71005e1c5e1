use crate::openapi::OpenApiDocument;

pub(crate) const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

impl CodeMetadata {
  pub fn from_document(document: &OpenApiDocument) -> Self {
    Self {
      title: document.info.title.clone(),
      version: document.info.version.clone(),
      description: document.info.description.clone(),
    }
  }

  /// Builds the comment block placed at the top of every generated file.
  pub(crate) fn file_header(&self, source_path: &str) -> String {
    let mut lines = vec![
      "/**".to_string(),
      " * AUTO-GENERATED CODE - DO NOT EDIT!".to_string(),
      " *".to_string(),
    ];
    if !self.title.is_empty() {
      lines.push(format!(" * {}", self.title));
    }
    lines.push(format!(" * Source: {source_path}"));
    if !self.version.is_empty() {
      lines.push(format!(" * Version: {}", self.version));
    }
    lines.push(format!(" * Generated by `{GENERATOR_NAME}`"));
    lines.push(" */".to_string());

    let mut header = lines.join("\n");
    header.push_str("\n\n");
    header
  }
}
