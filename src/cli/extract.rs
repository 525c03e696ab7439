//! Extract command implementation.
//!
//! Splits a composed PNG back into its top and bottom layers. Only images
//! produced by `make` extract faithfully; anything else comes out as
//! well-defined noise.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::compose::extract;
use crate::error::Result;
use crate::images::{load_dual, save_gray};
use crate::output::{display_path, Printer};

/// Recover the top and bottom layers from a composed PNG
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Composed two-layer PNG
    pub image: PathBuf,

    /// Output path for the recovered top layer
    #[arg(long)]
    pub top: Option<PathBuf>,

    /// Output path for the recovered bottom layer
    #[arg(long)]
    pub bottom: Option<PathBuf>,
}

fn default_layer_output(image: &Path, suffix: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("layer");
    image.with_file_name(format!("{}_{}.png", stem, suffix))
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let composed = load_dual(&args.image)?;
    let (top, bottom) = extract(&composed);

    let top_out = args
        .top
        .unwrap_or_else(|| default_layer_output(&args.image, "top"));
    let bottom_out = args
        .bottom
        .unwrap_or_else(|| default_layer_output(&args.image, "bottom"));

    save_gray(&top, &top_out)?;
    printer.status("Writing", &display_path(&top_out));
    save_gray(&bottom, &bottom_out)?;
    printer.status("Writing", &display_path(&bottom_out));

    Ok(())
}
