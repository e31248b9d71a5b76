//! Image rendering contract and the bundled QR matrix renderer.
//!
//! The core hands a finished payload string to a [`QrRenderer`] and gets back
//! a pixel buffer or a [`RenderError`]. [`MatrixRenderer`] is the shipped
//! implementation, built on the `qirust` encoder and painted with `imageproc`.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use qirust::qrcode::{EncodeTextOptions, QrCode, QrCodeEcc, Version};
use thiserror::Error;

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccLevel {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

impl From<EccLevel> for QrCodeEcc {
    fn from(value: EccLevel) -> QrCodeEcc {
        match value {
            EccLevel::L => QrCodeEcc::Low,
            EccLevel::M => QrCodeEcc::Medium,
            EccLevel::Q => QrCodeEcc::Quartile,
            EccLevel::H => QrCodeEcc::High,
        }
    }
}

impl std::fmt::Display for EccLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EccLevel::L => "L",
            EccLevel::M => "M",
            EccLevel::Q => "Q",
            EccLevel::H => "H",
        };
        f.write_str(name)
    }
}

/// Options controlling image generation.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Minimum edge length of the finished image in pixels. The actual edge
    /// is rounded up to a whole number of pixels per module.
    pub width: u32,
    /// Quiet-zone border in modules on each side.
    pub margin: u32,
    /// Foreground (module) color.
    pub dark: Rgba<u8>,
    /// Background color.
    pub light: Rgba<u8>,
    pub ecc: EccLevel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 256,
            margin: 4,
            dark: Rgba([0, 0, 0, 255]),
            light: Rgba([255, 255, 255, 255]),
            ecc: EccLevel::M,
        }
    }
}

/// Ways a renderer can refuse a payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("payload is empty")]
    EmptyContent,
    #[error("payload exceeds QR capacity: {0}")]
    OverCapacity(String),
    #[error("payload cannot be encoded in the selected mode: {0}")]
    Unencodable(String),
}

/// Turns a payload string into a displayable pixel buffer.
///
/// Implementations must fail with [`RenderError`] rather than panic; callers
/// treat any failure as terminal for the attempt.
pub trait QrRenderer {
    fn render(&self, content: &str, options: &RenderOptions) -> Result<RgbaImage, RenderError>;
}

/// QR code renderer backed by the `qirust` Model 2 encoder.
#[derive(Debug, Default)]
pub struct MatrixRenderer;

impl MatrixRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl QrRenderer for MatrixRenderer {
    fn render(&self, content: &str, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
        if content.is_empty() {
            return Err(RenderError::EmptyContent);
        }

        let mut outbuffer = vec![0u8; Version::MAX.buffer_len()];
        let mut tempbuffer = vec![0u8; Version::MAX.buffer_len()];
        let qr = QrCode::encode_text(
            content,
            &mut tempbuffer,
            &mut outbuffer,
            EncodeTextOptions {
                ecl: options.ecc.into(),
                minversion: Version::MIN,
                maxversion: Version::MAX,
                mask: None,
                boostecl: true,
            },
        )
        .map_err(|err| RenderError::OverCapacity(err.to_string()))?;

        Ok(paint(&qr, options))
    }
}

/// Paint the module matrix into an RGBA buffer, one filled square per dark
/// module, scaled so the finished edge is at least `options.width` pixels.
fn paint(qr: &QrCode, options: &RenderOptions) -> RgbaImage {
    let modules = qr.size() as u32 + 2 * options.margin;
    let scale = options.width.div_ceil(modules).max(1);
    let edge = modules * scale;

    let mut img = RgbaImage::from_pixel(edge, edge, options.light);
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if !qr.get_module(x, y) {
                continue;
            }
            let px = (x as u32 + options.margin) * scale;
            let py = (y as u32 + options.margin) * scale;
            draw_filled_rect_mut(
                &mut img,
                Rect::at(px as i32, py as i32).of_size(scale, scale),
                options.dark,
            );
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_payload_is_rejected() {
        let renderer = MatrixRenderer::new();
        let err = renderer.render("", &RenderOptions::default()).unwrap_err();
        assert_eq!(err, RenderError::EmptyContent);
    }

    #[test]
    fn oversized_payload_reports_capacity() {
        let renderer = MatrixRenderer::new();
        // Byte-mode capacity tops out below 3000 bytes even at ECC L.
        let huge = "a".repeat(4000);
        let err = renderer
            .render(&huge, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::OverCapacity(_)));
    }

    #[test]
    fn image_edge_is_square_and_at_least_width() {
        let renderer = MatrixRenderer::new();
        let options = RenderOptions::default();
        let img = renderer.render("https://example.com", &options).unwrap();
        let (w, h) = img.dimensions();
        assert_eq!(w, h);
        assert!(w >= options.width);
    }

    #[test]
    fn quiet_zone_uses_light_color_and_finder_is_dark() {
        let renderer = MatrixRenderer::new();
        let options = RenderOptions::default();
        let img = renderer.render("HELLO", &options).unwrap();

        // Top-left pixel sits in the quiet zone.
        assert_eq!(*img.get_pixel(0, 0), options.light);

        // The first module past the margin belongs to the finder pattern.
        let modules = 21 + 2 * options.margin; // version 1 symbol
        let scale = options.width.div_ceil(modules).max(1);
        let inset = options.margin * scale;
        assert_eq!(*img.get_pixel(inset, inset), options.dark);
    }

    #[test]
    fn custom_colors_are_honored() {
        let renderer = MatrixRenderer::new();
        let options = RenderOptions {
            dark: Rgba([10, 20, 30, 255]),
            light: Rgba([200, 210, 220, 255]),
            ..RenderOptions::default()
        };
        let img = renderer.render("HELLO", &options).unwrap();
        assert_eq!(*img.get_pixel(0, 0), options.light);
    }
}
