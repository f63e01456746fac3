use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::processing::pipeline::OutputStatus;
use crate::error::Result;
use crate::types::{Operation, Region};

/// One line of the run report: what happened to a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contour_area: Option<f64>,
    /// Size of the image placed in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_size: Option<(u32, u32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Included,
    NoDisplayFound,
    Failed,
}

impl From<OutputStatus> for ReportStatus {
    fn from(s: OutputStatus) -> Self {
        match s {
            OutputStatus::Included => ReportStatus::Included,
            OutputStatus::NoDisplayFound => ReportStatus::NoDisplayFound,
        }
    }
}

/// JSON sidecar written next to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: String,
    pub operation: Operation,
    pub document: Option<String>,
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new(operation: Operation) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            operation,
            document: None,
            entries: Vec::new(),
        }
    }

    pub fn count(&self, status: ReportStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

/// Write `report` as pretty JSON next to `document_path` (same stem, `.json`).
pub fn write_report_sidecar(document_path: &Path, report: &RunReport) -> Result<PathBuf> {
    let sidecar_path = document_path.with_extension("json");
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(&sidecar_path, json_string)?;
    info!("Created run report sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_sits_next_to_document() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("meter_display_table.docx");
        let mut report = RunReport::new(Operation::Detect);
        report.document = Some("meter_display_table.docx".to_string());
        report.entries.push(ReportEntry {
            name: "a.jpg".to_string(),
            status: ReportStatus::Included,
            region: Some(Region::new(1, 2, 30, 10)),
            contour_area: Some(261.0),
            output_size: Some((30, 10)),
            error: None,
        });
        report.entries.push(ReportEntry {
            name: "b.jpg".to_string(),
            status: ReportStatus::NoDisplayFound,
            region: None,
            contour_area: None,
            output_size: None,
            error: None,
        });

        let path = write_report_sidecar(&doc, &report).unwrap();
        assert_eq!(path, dir.path().join("meter_display_table.json"));
        let back: RunReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.count(ReportStatus::Included), 1);
        assert_eq!(back.count(ReportStatus::NoDisplayFound), 1);
    }
}
