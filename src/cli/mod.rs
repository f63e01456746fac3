//! Command Line Interface (CLI) layer for meterdoc.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that maps a subcommand onto an
//! `Operation` and hands the batch to `meterdoc::api`.
//!
//! If you are embedding meterdoc into another application, prefer using
//! the high-level `meterdoc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
