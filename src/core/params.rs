use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::writers::docx::DocumentLayout;
use crate::types::Operation;

/// Processing parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    pub operation: Operation,
    pub layout: DocumentLayout,
    /// Also write each result image as a JPEG under `<output>/crops`
    pub save_crops: bool,
    /// Write a JSON run report next to the document
    pub report: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            operation: Operation::Detect,
            layout: DocumentLayout::default(),
            save_crops: false,
            report: false,
        }
    }
}

impl ProcessingParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
