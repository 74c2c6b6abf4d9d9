use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use texweave_markup::{Document, DocumentOptions};

use crate::pdf::PdfOptions;

/// Document and build settings, stored as JSON.
///
/// ```json
/// {
///   "document": { "title": "Report", "maketitle": true },
///   "pdf": { "compiler": "lualatex", "clean_tex": false }
/// }
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub document: DocumentOptions,
    pub pdf: PdfOptions,
}

impl BuildConfig {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Invalid build configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read build configuration {:?}", path))?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// An empty document built from the `document` section.
    pub fn document(&self) -> Document {
        Document::with_options(self.document.clone())
    }
}
