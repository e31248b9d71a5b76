//! Validation commands (`qrforge check ...`).

use anyhow::{Result, bail};
use clap::Args;
use qrforge::validate;

use crate::cli::common::ContentCommand;

/// Args for `qrforge check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub content: ContentCommand,
}

/// Execute a check command. Exits nonzero when the input is rejected.
pub fn handle(args: CheckArgs) -> Result<()> {
    let request = args.content.into_request();
    if !validate(request.content_type, &request.fields) {
        bail!("Please fill in all required fields correctly.");
    }
    println!("accepted: {} input is valid", request.content_type);
    Ok(())
}
