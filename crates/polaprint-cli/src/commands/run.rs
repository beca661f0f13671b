use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use polaprint_core::config::AppConfig;
use polaprint_core::io::http::UreqTransport;
use polaprint_core::lookup::LookupClient;
use polaprint_core::session::Session;

use super::lookup::lookup_and_save;
use super::resize::{resize_file, ResizeOptions};
use crate::summary::print_code;

#[derive(Args)]
pub struct RunArgs {
    /// Ticket code to look up
    #[arg(long)]
    pub code: Option<String>,

    /// Download the looked-up original into this directory
    #[arg(long, requires = "code")]
    pub save_original: Option<PathBuf>,

    /// Local image to resize
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub options: ResizeOptions,
}

pub fn run(args: &RunArgs, config: &AppConfig) -> Result<()> {
    if args.code.is_none() && args.input.is_none() {
        anyhow::bail!("Nothing to do: pass --code and/or --input");
    }

    let mut session = Session::from_config(&config.resize);

    if let Some(ref code) = args.code {
        session.set_code(code);
        print_code(session.code_cells());
        let client = LookupClient::new(UreqTransport::new(), config.lookup.base_url.clone());
        lookup_and_save(&mut session, &client, args.save_original.as_deref())?;
    }

    if let Some(ref input) = args.input {
        resize_file(&mut session, input, &args.options, config)?;
    }

    Ok(())
}
