pub mod completions;
pub mod extract;
pub mod make;
pub mod partial;
pub mod watch;

use clap::{Parser, Subcommand};

/// mirage - two-layer image generator
#[derive(Parser, Debug)]
#[command(name = "mirage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose a whole-image two-layer PNG from a top and bottom source
    Make(make::MakeArgs),

    /// Apply the two-layer trick to a selected region of one image
    Partial(partial::PartialArgs),

    /// Recover the top and bottom layers from a composed PNG
    Extract(extract::ExtractArgs),

    /// Watch a directory and recompose layer pairs as they change
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
