use anyhow::Result;
use clap::Args;
use polaprint_core::session::Session;

use crate::summary::print_code;

#[derive(Args)]
pub struct CodeArgs {
    /// Raw input; non-digits are dropped and only six digits are kept
    pub raw: String,
}

pub fn run(args: &CodeArgs) -> Result<()> {
    let mut session = Session::new();
    session.set_code(&args.raw);
    print_code(session.code_cells());
    Ok(())
}
