//! Shared clap helper types for CLI commands.

use clap::{Args, Subcommand, ValueEnum};
use image::Rgba;
use qrforge::{ContentType, EccLevel, FieldValues, GenerateRequest};

/// Error correction levels accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EccArg {
    L,
    M,
    Q,
    H,
}

impl From<EccArg> for EccLevel {
    fn from(value: EccArg) -> EccLevel {
        match value {
            EccArg::L => EccLevel::L,
            EccArg::M => EccLevel::M,
            EccArg::Q => EccLevel::Q,
            EccArg::H => EccLevel::H,
        }
    }
}

/// Content selector shared by the encode and check commands.
#[derive(Subcommand, Debug)]
pub enum ContentCommand {
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
}

impl ContentCommand {
    pub fn into_request(self) -> GenerateRequest {
        match self {
            ContentCommand::Url(args) => args.into_request(),
            ContentCommand::Text(args) => args.into_request(),
            ContentCommand::Email(args) => args.into_request(),
            ContentCommand::Wifi(args) => args.into_request(),
            ContentCommand::Phone(args) => args.into_request(),
        }
    }
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// URL to encode.
    pub url: String,
}

impl UrlArgs {
    pub fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            content_type: ContentType::Url,
            fields: FieldValues {
                url: self.url,
                ..FieldValues::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to encode.
    pub text: String,
}

impl TextArgs {
    pub fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            content_type: ContentType::Text,
            fields: FieldValues {
                text: self.text,
                ..FieldValues::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Recipient address.
    pub email: String,
    /// Subject line (percent-encoded into the payload).
    #[arg(long, default_value = "")]
    pub subject: String,
    /// Message body (percent-encoded into the payload).
    #[arg(long, default_value = "")]
    pub body: String,
}

impl EmailArgs {
    pub fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            content_type: ContentType::Email,
            fields: FieldValues {
                email: self.email,
                subject: self.subject,
                body: self.body,
                ..FieldValues::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct WifiArgs {
    /// Network name.
    pub ssid: String,
    /// Network password (empty for open networks).
    #[arg(long, default_value = "")]
    pub password: String,
    /// Mark the network as hidden.
    #[arg(long)]
    pub hidden: bool,
}

impl WifiArgs {
    pub fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            content_type: ContentType::Wifi,
            fields: FieldValues {
                ssid: self.ssid,
                password: self.password,
                hidden: self.hidden,
                ..FieldValues::default()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct PhoneArgs {
    /// Phone number; separators are allowed, whitespace is stripped.
    pub phone: String,
}

impl PhoneArgs {
    pub fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            content_type: ContentType::Phone,
            fields: FieldValues {
                phone: self.phone,
                ..FieldValues::default()
            },
        }
    }
}

/// Clap-friendly parser for `#RRGGBB` (or `RRGGBB`) colors.
pub fn parse_hex_color(input: &str) -> Result<Rgba<u8>, String> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("color '{input}' must be of the form #RRGGBB"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|err| err.to_string())
    };
    Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}
