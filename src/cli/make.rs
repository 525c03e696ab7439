//! Make command implementation.
//!
//! Composes whole-image two-layer PNGs; inputs may be files or directories
//! (see [`crate::batch`] for the pairing rules).

use std::path::PathBuf;

use clap::Args;

use crate::batch::run_make;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Printer;

/// Compose a whole-image two-layer PNG from a top and bottom source
#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Top image (or directory): what shows against a white backdrop
    pub top: PathBuf,

    /// Bottom image (or directory): what shows against a black backdrop
    pub bottom: PathBuf,

    /// Output path (file mode) or directory (batch modes)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: MakeArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover()?;
    run_make(
        &args.top,
        &args.bottom,
        args.output.as_deref(),
        &manifest,
        printer,
    )?;
    Ok(())
}
