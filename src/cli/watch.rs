//! Watch command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Printer;
use crate::watch::run_watch;

/// Watch a directory and recompose layer pairs as they change
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Directory holding `<name>.top.*` and `<name>.bottom.*` layer files
    /// (default: current directory)
    pub dir: Option<PathBuf>,

    /// Output directory for composed images
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover()?;
    let dir = args.dir.unwrap_or_else(|| PathBuf::from("."));
    let output = args
        .output
        .or_else(|| manifest.output.clone())
        .unwrap_or_else(|| PathBuf::from("composed"));

    run_watch(&dir, &output, &manifest, printer)
}
