//! Payload string commands (`qrforge encode ...`).

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use qrforge::{encode, validate};

use crate::cli::common::ContentCommand;
use crate::cli::utils::write_output;

/// Args for `qrforge encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub content: ContentCommand,
    /// Output file (`-` for stdout); omitted prints to stdout.
    #[arg(short = 'o', long = "output", global = true)]
    pub output: Option<PathBuf>,
}

/// Execute an encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let request = args.content.into_request();
    if !validate(request.content_type, &request.fields) {
        bail!("Please fill in all required fields correctly.");
    }
    let payload = encode(request.content_type, &request.fields);
    match args.output {
        Some(path) if path.as_os_str() != "-" => {
            write_output(&path, &payload)?;
            println!(
                "Wrote {} payload ({} bytes) to {}",
                request.content_type,
                payload.len(),
                path.display()
            );
        }
        _ => println!("{payload}"),
    }
    Ok(())
}
