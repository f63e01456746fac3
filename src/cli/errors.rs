use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Input directory does not exist: {path}")]
    InputDirNotFound { path: String },

    #[error("Invalid {arg}: {value}")]
    InvalidValue { arg: &'static str, value: String },

    #[error("{failed} image(s) failed to process")]
    FailedImages { failed: usize },

    #[error(transparent)]
    Library(#[from] meterdoc::Error),
}
