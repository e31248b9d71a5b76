//! The two pure core functions: input acceptance and payload assembly.
//!
//! `validate` gates `encode`: callers check acceptance first, then build the
//! payload string. `encode` never re-validates and is total over its input,
//! so invalid input yields a best-effort string (typically with empty slots)
//! rather than an error.

use crate::content::{ContentType, FieldValues};

/// Returns whether the fields carry enough input to produce a meaningful
/// payload for the given content type.
///
/// Inspection only: no normalization, no mutation, no side effects.
pub fn validate(content_type: ContentType, fields: &FieldValues) -> bool {
    match content_type {
        ContentType::Url => !fields.url.is_empty(),
        ContentType::Text => !fields.text.is_empty(),
        ContentType::Email => !fields.email.is_empty() && fields.email.contains('@'),
        ContentType::Wifi => !fields.ssid.is_empty(),
        ContentType::Phone => phone_digits_len(&fields.phone) >= 10,
    }
}

/// Builds the payload string for the given content type.
///
/// One fixed template per type:
///
/// - Wifi: `WIFI:T:WPA;S:<ssid>;P:<password>;H:<true|false>;;`
/// - Email: `mailto:<email>` with optional percent-encoded `subject`/`body`
///   query parameters
/// - Phone: `tel:<phone>` with whitespace stripped
/// - Url: prefixed with `https://` unless already `http(s)://`
/// - Text: the text itself
///
/// SSID and password are substituted verbatim. The `WIFI:` scheme treats
/// `;`, `\`, `,`, and `"` as special but this template does not escape
/// them, matching the common minimal generators; payloads containing those
/// characters may confuse strict scanners. The mailto address is likewise
/// passed through unencoded while subject and body are encoded.
pub fn encode(content_type: ContentType, fields: &FieldValues) -> String {
    match content_type {
        ContentType::Url => encode_url(&fields.url),
        ContentType::Text => fields.text.clone(),
        ContentType::Email => encode_mailto(&fields.email, &fields.subject, &fields.body),
        ContentType::Wifi => format!(
            "WIFI:T:WPA;S:{};P:{};H:{};;",
            fields.ssid, fields.password, fields.hidden
        ),
        ContentType::Phone => {
            let stripped: String = fields
                .phone
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            format!("tel:{stripped}")
        }
    }
}

fn encode_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn encode_mailto(email: &str, subject: &str, body: &str) -> String {
    let mut out = format!("mailto:{email}");
    if !subject.is_empty() {
        out.push_str("?subject=");
        out.push_str(&urlencoding::encode(subject));
    }
    if !body.is_empty() {
        out.push(if subject.is_empty() { '?' } else { '&' });
        out.push_str("body=");
        out.push_str(&urlencoding::encode(body));
    }
    out
}

/// Length of the phone value once whitespace, hyphens, and parentheses are
/// removed. Validation only; the encoder keeps hyphens and parentheses.
fn phone_digits_len(phone: &str) -> usize {
    phone
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '(' | ')'))
        .count()
}
