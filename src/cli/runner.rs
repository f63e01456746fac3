use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use meterdoc::{DocumentLayout, Operation, OperationKind, ProcessingParams, process_directory_to_path};

use super::args::{CliArgs, Command, CommonArgs};
use super::errors::AppError;

fn init_logging(enabled: bool) {
    if enabled {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn command_to_operation(command: &Command) -> Operation {
    match *command {
        Command::Detect => Operation::Detect,
        Command::Crop {
            x,
            y,
            width,
            height,
        } => Operation::Crop {
            x,
            y,
            width,
            height,
        },
        Command::Resize { width, height, pad } => Operation::Resize { width, height, pad },
    }
}

/// Headings used when no config file supplies a layout.
fn default_layout_for(kind: OperationKind) -> DocumentLayout {
    let base = DocumentLayout::default();
    match kind {
        OperationKind::Detect => base,
        OperationKind::Crop => DocumentLayout {
            title: "Cropped Images".to_string(),
            image_header: "Cropped Image".to_string(),
            ..base
        },
        OperationKind::Resize => DocumentLayout {
            title: "Resized Images".to_string(),
            image_header: "Resized Image".to_string(),
            ..base
        },
    }
}

fn build_params(command: &Command, common: &CommonArgs) -> Result<ProcessingParams, AppError> {
    let operation = command_to_operation(command);

    let mut params = match &common.config {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            ProcessingParams::from_json_file(path)?
        }
        None => ProcessingParams {
            layout: default_layout_for(operation.kind()),
            ..ProcessingParams::default()
        },
    };
    params.operation = operation;

    if let Some(title) = &common.title {
        params.layout.title = title.clone();
    }
    if let Some(columns) = common.columns {
        if columns == 0 {
            return Err(AppError::InvalidValue {
                arg: "--columns",
                value: columns.to_string(),
            });
        }
        params.layout.columns = columns;
    }
    if let Some(width) = common.image_width_inches {
        if !(width.is_finite() && width > 0.0) {
            return Err(AppError::InvalidValue {
                arg: "--image-width-inches",
                value: width.to_string(),
            });
        }
        params.layout.image_width_inches = width;
    }
    params.save_crops |= common.save_crops;
    params.report |= common.report;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.common.log);

    let input_dir = args
        .common
        .input_dir
        .clone()
        .ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
    let output_dir = args
        .common
        .output_dir
        .clone()
        .ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;
    if !input_dir.is_dir() {
        return Err(AppError::InputDirNotFound {
            path: input_dir.display().to_string(),
        }
        .into());
    }

    let params = build_params(&args.command, &args.common)?;

    info!("Operation: {}", params.operation);
    info!("Input directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let report = process_directory_to_path(
        &input_dir,
        &output_dir,
        &params,
        args.common.continue_on_error,
    )
    .map_err(AppError::from)?;

    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if report.processed == 0 {
        warn!("No images were placed in a document");
    }
    if report.errors > 0 {
        return Err(AppError::FailedImages {
            failed: report.errors,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn crop_subcommand_maps_to_operation() {
        let args = parse(&[
            "meterdoc", "crop", "--x", "4", "--y", "5", "--width", "60", "--height", "20",
            "-i", "in", "-o", "out",
        ]);
        let params = build_params(&args.command, &args.common).unwrap();
        assert_eq!(
            params.operation,
            Operation::Crop { x: 4, y: 5, width: 60, height: 20 }
        );
        assert_eq!(params.layout.image_header, "Cropped Image");
    }

    #[test]
    fn layout_flags_override_defaults() {
        let args = parse(&[
            "meterdoc", "--columns", "3", "--title", "Readouts", "--report", "resize",
            "--width", "320", "--height", "240", "--pad",
        ]);
        let params = build_params(&args.command, &args.common).unwrap();
        assert_eq!(params.layout.columns, 3);
        assert_eq!(params.layout.title, "Readouts");
        assert!(params.report);
        assert_eq!(
            params.operation,
            Operation::Resize { width: 320, height: 240, pad: true }
        );
    }

    #[test]
    fn zero_columns_is_rejected() {
        let args = parse(&["meterdoc", "detect", "--columns", "0"]);
        assert!(matches!(
            build_params(&args.command, &args.common),
            Err(AppError::InvalidValue { arg: "--columns", .. })
        ));
    }

    #[test]
    fn config_file_is_loaded_then_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("params.json");
        std::fs::write(
            &cfg,
            r#"{ "layout": { "title": "From config", "columns": 2 }, "save_crops": true }"#,
        )
        .unwrap();
        let args = parse(&[
            "meterdoc", "detect", "--config", cfg.to_str().unwrap(), "--columns", "4",
        ]);
        let params = build_params(&args.command, &args.common).unwrap();
        assert_eq!(params.layout.title, "From config");
        assert_eq!(params.layout.columns, 4);
        assert!(params.save_crops);
        assert_eq!(params.operation, Operation::Detect);
    }
}
