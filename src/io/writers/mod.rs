pub mod docx;
pub mod jpeg;
pub mod report;
