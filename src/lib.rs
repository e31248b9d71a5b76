//! Core library for QR payload encoding, validation, and rendering.

mod content;
mod payload;
mod render;
mod session;

pub use content::{ContentType, FieldValues, GenerateRequest};
pub use payload::{encode, validate};
pub use render::{EccLevel, MatrixRenderer, QrRenderer, RenderError, RenderOptions};
pub use session::{FormSession, GenerateError};

use image::RgbaImage;

/// Validates and encodes a request, then renders the payload in one step.
pub fn generate<R: QrRenderer>(
    renderer: &R,
    request: &GenerateRequest,
    options: &RenderOptions,
) -> Result<RgbaImage, GenerateError> {
    if !validate(request.content_type, &request.fields) {
        return Err(GenerateError::ValidationRejected);
    }
    let content = encode(request.content_type, &request.fields);
    renderer.render(&content, options).map_err(GenerateError::Render)
}
