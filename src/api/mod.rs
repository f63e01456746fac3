//! High-level, ergonomic library API: run an operation over a batch of images,
//! assemble the `.docx` table in memory, or go straight from a directory of
//! uploads to a delivered document. Prefer these entrypoints over the low-level
//! processing modules when integrating meterdoc.
use std::path::Path;

use image::RgbImage;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::detect;
use crate::core::processing::pipeline::{OperationOutput, apply_operation};
use crate::core::processing::save::save_result_images;
use crate::error::{Error, Result};
use crate::io::delivery::{Delivery, deliver_to_dir};
use crate::io::loader::{collect_image_files, load_image_file};
use crate::io::writers::docx::build_document;
use crate::io::writers::report::{ReportEntry, ReportStatus, RunReport, write_report_sidecar};
use crate::types::{NamedImage, Operation, OperationKind};

/// Subdirectory of the output directory receiving exported result images.
pub const CROPS_SUBDIR: &str = "crops";

/// Crop of the detected display region, or `None` when nothing qualifies.
pub fn detect_display(image: &RgbImage) -> Option<RgbImage> {
    detect::detect(image)
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Inputs whose result went into the document
    pub processed: usize,
    /// Inputs without a detected display region
    pub skipped: usize,
    /// Inputs that failed to decode or process
    pub errors: usize,
}

/// Results of running one operation over a batch, in input order.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub included: Vec<NamedImage>,
    pub report: RunReport,
    pub batch: BatchReport,
}

impl ProcessOutcome {
    fn new(operation: Operation) -> Self {
        Self {
            included: Vec::new(),
            report: RunReport::new(operation),
            batch: BatchReport::default(),
        }
    }

    fn record_output(&mut self, name: String, output: OperationOutput) {
        let status = ReportStatus::from(output.status());
        match output {
            OperationOutput::Image {
                image,
                region,
                contour_area,
            } => {
                self.batch.processed += 1;
                self.report.entries.push(ReportEntry {
                    name: name.clone(),
                    status,
                    region,
                    contour_area,
                    output_size: Some(image.dimensions()),
                    error: None,
                });
                self.included.push(NamedImage::new(name, image));
            }
            OperationOutput::NoDisplayFound => {
                warn!("No display region found in {}", name);
                self.batch.skipped += 1;
                self.report.entries.push(ReportEntry {
                    name,
                    status,
                    region: None,
                    contour_area: None,
                    output_size: None,
                    error: None,
                });
            }
        }
    }

    fn record_failure(&mut self, name: String, error: &Error) {
        warn!("Error processing {}: {}", name, error);
        self.batch.errors += 1;
        self.report.entries.push(ReportEntry {
            name,
            status: ReportStatus::Failed,
            region: None,
            contour_area: None,
            output_size: None,
            error: Some(error.to_string()),
        });
    }

    fn process_one(
        &mut self,
        name: String,
        image: &RgbImage,
        operation: &Operation,
        continue_on_error: bool,
    ) -> Result<()> {
        match apply_operation(image, operation) {
            Ok(output) => {
                self.record_output(name, output);
                Ok(())
            }
            Err(e) => {
                self.record_failure(name, &e);
                if continue_on_error { Ok(()) } else { Err(e) }
            }
        }
    }
}

/// Apply `operation` to every input. Detection misses are recorded, not
/// raised; processing errors stop the batch unless `continue_on_error`.
pub fn process_images(
    inputs: &[NamedImage],
    operation: &Operation,
    continue_on_error: bool,
) -> Result<ProcessOutcome> {
    let mut outcome = ProcessOutcome::new(*operation);
    for input in inputs {
        outcome.process_one(input.name.clone(), &input.image, operation, continue_on_error)?;
    }
    Ok(outcome)
}

/// Process `inputs` and assemble the downloadable document in memory.
/// Fails with `EmptyDocument` when no input produced an image.
pub fn process_images_to_document(
    inputs: &[NamedImage],
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<(Delivery, ProcessOutcome)> {
    params.layout.validate()?;
    let outcome = process_images(inputs, &params.operation, continue_on_error)?;
    let bytes = build_document(&outcome.included, &params.layout)?;
    Ok((Delivery::docx(params.operation.kind(), bytes), outcome))
}

fn export_suffix(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Detect => "display",
        OperationKind::Crop => "crop",
        OperationKind::Resize => "resized",
    }
}

/// Load every image under `input_dir`, run `params.operation`, and deliver the
/// document (plus optional crops and report) into `output_dir`.
/// If `continue_on_error` is true, errors are counted in the report and processing
/// continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.layout.validate()?;
    std::fs::create_dir_all(output_dir)?;

    let kind = params.operation.kind();
    let mut outcome = ProcessOutcome::new(params.operation);

    for path in collect_image_files(input_dir)? {
        info!("Processing: {:?}", path);
        let input = match load_image_file(&path) {
            Ok(input) => input,
            Err(e) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                outcome.record_failure(name, &e);
                if continue_on_error {
                    continue;
                }
                return Err(e);
            }
        };
        outcome.process_one(input.name, &input.image, &params.operation, continue_on_error)?;
    }

    if outcome.included.is_empty() {
        warn!("No results to place in a document; nothing delivered");
    } else {
        let bytes = build_document(&outcome.included, &params.layout)?;
        let delivery = Delivery::docx(kind, bytes);
        deliver_to_dir(&delivery, output_dir)?;
        outcome.report.document = Some(delivery.filename);

        if params.save_crops {
            save_result_images(
                &outcome.included,
                &output_dir.join(CROPS_SUBDIR),
                export_suffix(kind),
            )?;
        }
    }

    if params.report {
        let document_path = output_dir.join(crate::io::document_filename(kind));
        write_report_sidecar(&document_path, &outcome.report)?;
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        outcome.batch.processed, outcome.batch.skipped, outcome.batch.errors
    );
    Ok(outcome.batch)
}
