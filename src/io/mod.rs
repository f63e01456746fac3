//! I/O layer: decoding uploaded images (`loader`), writers for the `.docx`
//! table, JPEG crop exports and the JSON run report (`writers`), and the
//! `delivery` channel that hands the document out under a fixed name.
pub mod delivery;
pub mod loader;
pub mod writers;

pub use delivery::{DOCX_MIME, Delivery, deliver_to_dir, document_filename};
pub use loader::{collect_image_files, decode_image, load_image_file};
