//! Delivery channel: hands the finished document out under a fixed name.
//!
//! Files are staged in a `tempfile::NamedTempFile` inside the destination
//! directory and atomically persisted; if anything fails before the persist,
//! dropping the temp file removes it.
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::types::OperationKind;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const DETECT_DOCUMENT_FILENAME: &str = "meter_display_table.docx";
pub const CROP_DOCUMENT_FILENAME: &str = "cropped_images.docx";
pub const RESIZE_DOCUMENT_FILENAME: &str = "resized_images.docx";

pub fn document_filename(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Detect => DETECT_DOCUMENT_FILENAME,
        OperationKind::Crop => CROP_DOCUMENT_FILENAME,
        OperationKind::Resize => RESIZE_DOCUMENT_FILENAME,
    }
}

/// A downloadable byte stream with its filename and MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Delivery {
    pub fn docx(kind: OperationKind, bytes: Vec<u8>) -> Self {
        Self {
            filename: document_filename(kind).to_string(),
            mime: DOCX_MIME,
            bytes,
        }
    }
}

/// Write `delivery` to `dir/filename`, replacing any previous file.
pub fn deliver_to_dir(delivery: &Delivery, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let target = dir.join(&delivery.filename);

    let mut staged = tempfile::Builder::new()
        .prefix(".meterdoc-")
        .suffix(".part")
        .tempfile_in(dir)?;
    staged.write_all(&delivery.bytes)?;
    staged.as_file().sync_all()?;
    staged
        .persist(&target)
        .map_err(|e| Error::Io(e.error))?;

    info!(
        "Delivered {} ({}, {} bytes) to {:?}",
        delivery.filename,
        delivery.mime,
        delivery.bytes.len(),
        target
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_follow_operation() {
        assert_eq!(
            Delivery::docx(OperationKind::Detect, vec![]).filename,
            "meter_display_table.docx"
        );
        assert_eq!(document_filename(OperationKind::Resize), "resized_images.docx");
        assert_eq!(Delivery::docx(OperationKind::Crop, vec![]).mime, DOCX_MIME);
    }

    #[test]
    fn delivery_overwrites_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = Delivery::docx(OperationKind::Detect, b"first".to_vec());
        let second = Delivery::docx(OperationKind::Detect, b"second".to_vec());

        deliver_to_dir(&first, dir.path()).unwrap();
        let path = deliver_to_dir(&second, dir.path()).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
