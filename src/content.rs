use serde::{Deserialize, Serialize};

/// The closed set of payload kinds the encoder understands.
///
/// Adding a variant here is a compile-time-checked change: both
/// [`validate`](crate::payload::validate) and
/// [`encode`](crate::payload::encode) match exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Text,
    Email,
    Wifi,
    Phone,
}

impl ContentType {
    /// Stable lowercase name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::Text => "text",
            ContentType::Email => "email",
            ContentType::Wifi => "wifi",
            ContentType::Phone => "phone",
        }
    }

    /// Human-readable summary of the fields a type consumes.
    pub fn field_summary(&self) -> &'static str {
        match self {
            ContentType::Url => "url (required)",
            ContentType::Text => "text (required)",
            ContentType::Email => "email (required), subject, body",
            ContentType::Wifi => "ssid (required), password, hidden",
            ContentType::Phone => "phone (required, 10+ characters ignoring separators)",
        }
    }

    pub fn all() -> [ContentType; 5] {
        [
            ContentType::Url,
            ContentType::Text,
            ContentType::Email,
            ContentType::Wifi,
            ContentType::Phone,
        ]
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One bundle of raw form input, recreated fresh per encode attempt.
///
/// Fields carry no meaning across content types; absent fields stay at
/// their defaults (empty string, `false`). The encoder reads only the
/// fields its content type names and ignores the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldValues {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub phone: String,
}

/// On-disk request document accepted by `qrforge render request`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub fields: FieldValues,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_json_round_trip() {
        let json = r#"{"type":"wifi","fields":{"ssid":"Home","password":"secret","hidden":true}}"#;
        let req: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.content_type, ContentType::Wifi);
        assert_eq!(req.fields.ssid, "Home");
        assert_eq!(req.fields.password, "secret");
        assert!(req.fields.hidden);
        // Unset fields fall back to defaults.
        assert_eq!(req.fields.url, "");
        assert!(!serde_json::to_string(&req).unwrap().is_empty());
    }

    #[test]
    fn request_fields_default_when_missing() {
        let req: GenerateRequest = serde_json::from_str(r#"{"type":"text"}"#).unwrap();
        assert_eq!(req.content_type, ContentType::Text);
        assert_eq!(req.fields, FieldValues::default());
    }

    #[test]
    fn type_names_match_serde() {
        for ty in ContentType::all() {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.name()));
        }
    }
}
