use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::openapi::OpenApiDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = SpecFormat::from_path(path);
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open OpenAPI document {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<OpenApiDocument> {
    parse_document(self.file.as_slice(), self.format)
  }
}

/// Deserializes a document from raw bytes in the given format.
pub fn parse_document(bytes: &[u8], format: SpecFormat) -> anyhow::Result<OpenApiDocument> {
  match format {
    SpecFormat::Json => serde_json::from_slice(bytes).context("failed to parse OpenAPI JSON document"),
    SpecFormat::Yaml => serde_yaml::from_slice(bytes).context("failed to parse OpenAPI YAML document"),
  }
}
