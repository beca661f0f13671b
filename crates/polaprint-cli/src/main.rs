mod commands;
mod notify;
mod summary;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polaprint", about = "Print-ticket image lookup and resize tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitise a ticket code and show it as boxed digits
    Code(commands::code::CodeArgs),
    /// Find the origin image URL of a ticket code
    Lookup(commands::lookup::LookupArgs),
    /// Resize a local image and export it as PNG or SVG
    Resize(commands::resize::ResizeArgs),
    /// Look up a code and/or resize an image in one session
    Run(commands::run::RunArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        match &cli.command {
            Commands::Code(args) => commands::code::run(args),
            Commands::Lookup(args) => commands::lookup::run(args, &config),
            Commands::Resize(args) => commands::resize::run(args, &config),
            Commands::Run(args) => commands::run::run(args, &config),
            Commands::Config(args) => commands::config::run(args),
        }
    });

    if let Err(err) = result {
        notify::alert(&err);
        std::process::exit(1);
    }
}
