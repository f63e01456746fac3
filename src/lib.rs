#![doc = r#"
meterdoc: detect, crop or resize batches of images and pack the results into a
Word (`.docx`) document table.

The centerpiece is a display-region detector: given a photo of a meter, it
finds the bright rectangular readout (grayscale, 5x5 Gaussian blur, Otsu
binarization, external contours, size and aspect filter) and returns a crop of
it. Two simpler utilities crop a fixed rectangle or resize to a fixed size.
Results are placed one per table cell, labeled with the source file name, and
delivered under a fixed filename with the word-processor MIME type.

Detect a display in memory
--------------------------
```rust,no_run
use meterdoc::{decode_image, detect};

fn main() -> meterdoc::Result<()> {
    let bytes = std::fs::read("meter.jpg")?;
    let input = decode_image("meter.jpg", &bytes)?;
    match detect(&input.image) {
        Some(crop) => println!("display is {}x{}", crop.width(), crop.height()),
        None => println!("no display region found"),
    }
    Ok(())
}
```

Batch a directory into a document
---------------------------------
```rust,no_run
use std::path::Path;
use meterdoc::{process_directory_to_path, Operation, ProcessingParams};

fn main() -> meterdoc::Result<()> {
    let params = ProcessingParams {
        operation: Operation::Detect,
        report: true,
        ..ProcessingParams::default()
    };

    let report = process_directory_to_path(
        Path::new("/data/meters"),
        Path::new("/out"),
        &params,
        true, // continue_on_error
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All fallible functions return `meterdoc::Result<T>`. A detection miss is not an
error; it is `None` from `detect` and a `skipped` count in batch reports.

Useful modules
--------------
- [`api`]: high-level batch entry points.
- [`core::processing::detect`](crate::core::processing::detect): the display-region detector and its constants.
- [`io`]: image decoding, document assembly, delivery.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::ProcessingParams;
pub use crate::core::processing::detect::{Candidate, Detection, detect, detect_region};
pub use crate::core::processing::pipeline::{OperationOutput, apply_operation};
pub use error::{Error, Result};
pub use types::{NamedImage, Operation, OperationKind, Region};

pub use crate::io::delivery::{DOCX_MIME, Delivery, deliver_to_dir, document_filename};
pub use crate::io::loader::{collect_image_files, decode_image, load_image_file};
pub use crate::io::writers::docx::{DocumentLayout, build_document};

pub use api::{
    BatchReport, ProcessOutcome, detect_display, process_directory_to_path, process_images,
    process_images_to_document,
};
