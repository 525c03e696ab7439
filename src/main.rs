use clap::Parser;
use miette::Result;
use mirage::cli::{Cli, Commands};
use mirage::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Make(args) => mirage::cli::make::run(args, &printer)?,
        Commands::Partial(args) => mirage::cli::partial::run(args, &printer)?,
        Commands::Extract(args) => mirage::cli::extract::run(args, &printer)?,
        Commands::Watch(args) => mirage::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => mirage::cli::completions::run(args)?,
    }

    Ok(())
}
