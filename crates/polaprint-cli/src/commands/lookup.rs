use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use polaprint_core::config::AppConfig;
use polaprint_core::io::http::UreqTransport;
use polaprint_core::io::sink::DirectorySink;
use polaprint_core::lookup::LookupClient;
use polaprint_core::session::Session;

use super::spinner;
use crate::summary::{print_code, print_lookup};

#[derive(Args)]
pub struct LookupArgs {
    /// Ticket code (non-digits are ignored)
    pub code: String,

    /// Also download the original image into this directory
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

pub fn run(args: &LookupArgs, config: &AppConfig) -> Result<()> {
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.lookup.base_url.clone());
    let client = LookupClient::new(UreqTransport::new(), base_url);

    let mut session = Session::from_config(&config.resize);
    session.set_code(&args.code);
    print_code(session.code_cells());

    lookup_and_save(&mut session, &client, args.save.as_deref())
}

/// Look up the session's code and optionally save the original.
pub(super) fn lookup_and_save(
    session: &mut Session,
    client: &LookupClient<UreqTransport>,
    save_dir: Option<&Path>,
) -> Result<()> {
    let pb = spinner("Looking up ticket")?;
    let found = session.lookup(client).map(str::to_string);
    pb.finish_and_clear();
    let url = found.context("Ticket lookup failed")?;
    print_lookup(session.code(), &url);

    if let Some(dir) = save_dir {
        let pb = spinner("Downloading original")?;
        let saved = session.save_original(client, &mut DirectorySink::new(dir));
        pb.finish_and_clear();
        let path = saved.context("Failed to download the original image")?;
        println!("  Original saved to {}", path.display());
    }
    println!();

    Ok(())
}
