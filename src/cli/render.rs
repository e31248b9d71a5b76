//! Image rendering commands (`qrforge render ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use image::Rgba;
use qrforge::{MatrixRenderer, RenderOptions, generate};

use crate::cli::common::{
    EccArg, EmailArgs, PhoneArgs, TextArgs, UrlArgs, WifiArgs, parse_hex_color,
};
use crate::cli::utils::load_request;

/// Args for `qrforge render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub source: RenderSource,
    /// Output PNG path.
    #[arg(short = 'o', long = "output", global = true, default_value = "qr.png")]
    pub output: PathBuf,
    /// Minimum edge length of the image in pixels.
    #[arg(long, global = true, default_value_t = 256)]
    pub width: u32,
    /// Quiet-zone border in modules.
    #[arg(long, global = true, default_value_t = 4)]
    pub margin: u32,
    /// Error correction level.
    #[arg(long, global = true, value_enum, default_value_t = EccArg::M)]
    pub ecc: EccArg,
    /// Foreground color as #RRGGBB.
    #[arg(long, global = true, default_value = "#000000", value_parser = parse_hex_color)]
    pub dark: Rgba<u8>,
    /// Background color as #RRGGBB.
    #[arg(long, global = true, default_value = "#FFFFFF", value_parser = parse_hex_color)]
    pub light: Rgba<u8>,
}

/// Payload sources accepted by `qrforge render`.
#[derive(Subcommand, Debug)]
pub enum RenderSource {
    /// Web address (https:// is prepended when no scheme is given).
    Url(UrlArgs),
    /// Free text, encoded as-is.
    Text(TextArgs),
    /// mailto: link with optional subject and body.
    Email(EmailArgs),
    /// Wi-Fi network credentials (WPA).
    Wifi(WifiArgs),
    /// tel: link for a phone number.
    Phone(PhoneArgs),
    /// JSON request document (`-` for stdin).
    Request(RequestArgs),
}

/// Args for `qrforge render request`.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Request file holding `{"type": ..., "fields": {...}}`.
    pub file: PathBuf,
}

/// Execute a render command.
pub fn handle(args: RenderArgs) -> Result<()> {
    let request = match args.source {
        RenderSource::Url(content) => content.into_request(),
        RenderSource::Text(content) => content.into_request(),
        RenderSource::Email(content) => content.into_request(),
        RenderSource::Wifi(content) => content.into_request(),
        RenderSource::Phone(content) => content.into_request(),
        RenderSource::Request(content) => load_request(content.file.as_path())?,
    };

    let options = RenderOptions {
        width: args.width,
        margin: args.margin,
        dark: args.dark,
        light: args.light,
        ecc: args.ecc.into(),
    };

    let renderer = MatrixRenderer::new();
    let image = generate(&renderer, &request, &options)?;
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Rendered {} payload to {} ({}x{} px, ECC {})",
        request.content_type,
        args.output.display(),
        image.width(),
        image.height(),
        options.ecc
    );
    Ok(())
}
