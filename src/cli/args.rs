use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meterdoc", version, about = "meterdoc CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the display region in each image and crop to it
    Detect,
    /// Crop the same rectangle out of every image
    Crop {
        #[arg(long)]
        x: u32,
        #[arg(long)]
        y: u32,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Resize every image to a fixed size
    Resize {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Keep the aspect ratio and pad with black instead of stretching
        #[arg(long, default_value_t = false)]
        pad: bool,
    },
}

#[derive(Args)]
pub struct CommonArgs {
    /// Directory containing the input images (jpg, jpeg, png)
    #[arg(short, long, global = true)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the document (and crops/report when enabled)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with processing parameters; flags below override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Document heading
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Images per table row
    #[arg(long, global = true)]
    pub columns: Option<usize>,

    /// Rendered image width in inches
    #[arg(long, global = true)]
    pub image_width_inches: Option<f64>,

    /// Also save each result image as a JPEG under <output-dir>/crops
    #[arg(long, default_value_t = false, global = true)]
    pub save_crops: bool,

    /// Write a JSON run report next to the document
    #[arg(long, default_value_t = false, global = true)]
    pub report: bool,

    /// Keep going when an image fails to decode or process
    #[arg(long, default_value_t = false, global = true)]
    pub continue_on_error: bool,

    /// Enable logging
    #[arg(long, default_value_t = false, global = true)]
    pub log: bool,
}
