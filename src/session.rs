//! Single-owner form state: current type, fields, and last outcome.
//!
//! The session owns exactly one type/fields/output triple. Each transition
//! replaces state wholesale: selecting a type discards fields and any prior
//! outcome, and a submit clears the previous outcome before attempting a new
//! one. There is never a partially updated view.

use image::RgbaImage;
use thiserror::Error;

use crate::content::{ContentType, FieldValues};
use crate::payload;
use crate::render::{QrRenderer, RenderError, RenderOptions};

/// Terminal outcome of one failed generate attempt.
///
/// Display strings are the user-facing messages; the underlying renderer
/// failure stays available through `source()` for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please fill in all required fields correctly.")]
    ValidationRejected,
    #[error("Failed to generate QR code.")]
    Render(#[source] RenderError),
}

/// Form state for a single in-flight QR generation workflow.
#[derive(Debug, Default)]
pub struct FormSession {
    content_type: Option<ContentType>,
    fields: FieldValues,
    output: Option<RgbaImage>,
    error: Option<GenerateError>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the content type to encode, discarding all field values and
    /// any previously rendered output or error.
    pub fn select_type(&mut self, content_type: ContentType) {
        self.content_type = Some(content_type);
        self.fields = FieldValues::default();
        self.output = None;
        self.error = None;
    }

    /// Replace the current field values in one step.
    pub fn set_fields(&mut self, fields: FieldValues) {
        self.fields = fields;
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    /// The image from the most recent successful submit, if any.
    pub fn output(&self) -> Option<&RgbaImage> {
        self.output.as_ref()
    }

    /// The error from the most recent failed submit, if any.
    pub fn error(&self) -> Option<&GenerateError> {
        self.error.as_ref()
    }

    /// Validate, encode, and render the current input.
    ///
    /// Prior output and error are cleared before the attempt; afterwards the
    /// session holds either the new image or the new error, never both. A
    /// failed attempt is terminal and is only retried by a fresh submit.
    pub fn submit<R: QrRenderer>(
        &mut self,
        renderer: &R,
        options: &RenderOptions,
    ) -> Result<(), GenerateError> {
        self.output = None;
        self.error = None;

        let Some(content_type) = self.content_type else {
            return Err(self.fail(GenerateError::ValidationRejected));
        };
        if !payload::validate(content_type, &self.fields) {
            return Err(self.fail(GenerateError::ValidationRejected));
        }

        let content = payload::encode(content_type, &self.fields);
        match renderer.render(&content, options) {
            Ok(image) => {
                self.output = Some(image);
                Ok(())
            }
            Err(err) => Err(self.fail(GenerateError::Render(err))),
        }
    }

    fn fail(&mut self, err: GenerateError) -> GenerateError {
        self.error = Some(err.clone());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct OkRenderer;
    impl QrRenderer for OkRenderer {
        fn render(&self, content: &str, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
            if content.is_empty() {
                return Err(RenderError::EmptyContent);
            }
            Ok(RgbaImage::from_pixel(1, 1, options.dark))
        }
    }

    struct FailingRenderer;
    impl QrRenderer for FailingRenderer {
        fn render(&self, _: &str, _: &RenderOptions) -> Result<RgbaImage, RenderError> {
            Err(RenderError::OverCapacity("capacity exceeded".into()))
        }
    }

    fn wifi_session() -> FormSession {
        let mut session = FormSession::new();
        session.select_type(ContentType::Wifi);
        session.set_fields(FieldValues {
            ssid: "Home".into(),
            password: "secret".into(),
            ..FieldValues::default()
        });
        session
    }

    #[test]
    fn submit_without_type_is_rejected() {
        let mut session = FormSession::new();
        let err = session
            .submit(&OkRenderer, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err, GenerateError::ValidationRejected);
        assert_eq!(session.error(), Some(&GenerateError::ValidationRejected));
        assert!(session.output().is_none());
    }

    #[test]
    fn submit_with_missing_fields_is_rejected() {
        let mut session = FormSession::new();
        session.select_type(ContentType::Email);
        let err = session
            .submit(&OkRenderer, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err, GenerateError::ValidationRejected);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields correctly."
        );
    }

    #[test]
    fn successful_submit_stores_output_and_clears_error() {
        let mut session = wifi_session();
        session
            .submit(&FailingRenderer, &RenderOptions::default())
            .unwrap_err();
        assert!(session.error().is_some());

        session.submit(&OkRenderer, &RenderOptions::default()).unwrap();
        assert!(session.output().is_some());
        assert!(session.error().is_none());
    }

    #[test]
    fn failed_render_clears_prior_output() {
        let mut session = wifi_session();
        session.submit(&OkRenderer, &RenderOptions::default()).unwrap();
        assert!(session.output().is_some());

        let err = session
            .submit(&FailingRenderer, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate QR code.");
        assert!(session.output().is_none());
        assert!(matches!(session.error(), Some(GenerateError::Render(_))));
    }

    #[test]
    fn selecting_a_type_clears_fields_output_and_error() {
        let mut session = wifi_session();
        session.submit(&OkRenderer, &RenderOptions::default()).unwrap();

        session.select_type(ContentType::Email);
        assert_eq!(session.content_type(), Some(ContentType::Email));
        assert_eq!(session.fields(), &FieldValues::default());
        assert!(session.output().is_none());
        assert!(session.error().is_none());
    }
}
