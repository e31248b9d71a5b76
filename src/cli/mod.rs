//! Command-line interface wiring for the `qrforge` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod common;
pub mod encode;
pub mod render;
pub mod types;
pub mod utils;

/// Parsed CLI entrypoint for the `qrforge` binary.
#[derive(Parser, Debug)]
#[command(
    name = "qrforge",
    version,
    about = "Build and render QR code payloads for URLs, text, email, Wi-Fi, and phone numbers"
)]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level command families made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the payload string for a content type.
    Encode(encode::EncodeArgs),
    /// Render a payload to a PNG image.
    Render(render::RenderArgs),
    /// Report whether the given input would be accepted.
    Check(check::CheckArgs),
    /// List supported content types and their fields.
    Types,
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::Render(args) => render::handle(args),
        Command::Check(args) => check::handle(args),
        Command::Types => types::handle(),
    }
}
