//! Payload decoding: percent-decoding, entity decoding, namespace injection.
//!
//! Decoding is best-effort and never validates the resulting XML; the only
//! failure is percent-decoding to bytes that are not valid UTF-8, which is
//! recoverable per payload (the batch continues).

mod entities;

pub use entities::decode_entities;

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Default XML namespace injected into `<svg>` tags that lack one.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Error for a single payload that could not be decoded. The pipeline logs
/// and skips the payload instead of aborting the run.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("percent-decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// A fully decoded payload, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSvg {
    /// Decoded text. If it contains `<svg`, it contains an `xmlns` attribute
    /// (pre-existing or injected).
    pub content: String,
    /// True when the default namespace was injected by this decode.
    pub xmlns_injected: bool,
}

impl DecodedSvg {
    /// Whether the decoded text contains an `<svg` tag at all. Payloads
    /// without one are still written as-is; callers may want to warn.
    pub fn has_svg_tag(&self) -> bool {
        self.content.contains("<svg")
    }
}

/// Decodes one still-encoded payload.
///
/// Steps, in order: percent-decode (`%XX` → byte, `+` stays literal, invalid
/// escapes pass through), entity-decode (`&quot;` → `"`, `&#169;` → `©`),
/// then inject ` xmlns="http://www.w3.org/2000/svg"` after the first `<svg`
/// if no `xmlns=` is present anywhere.
pub fn decode_payload(raw: &str) -> Result<DecodedSvg, DecodeError> {
    let percent_decoded = percent_decode_str(raw).decode_utf8()?;
    let unescaped = decode_entities(&percent_decoded);
    let (content, xmlns_injected) = ensure_svg_namespace(&unescaped);
    Ok(DecodedSvg {
        content,
        xmlns_injected,
    })
}

/// Injects the default namespace after the first `<svg` occurrence, exactly
/// once, unless the text already carries an `xmlns=` attribute or has no
/// `<svg` tag at all.
fn ensure_svg_namespace(content: &str) -> (String, bool) {
    if content.contains("<svg") && !content.contains("xmlns=") {
        let injected = content.replacen("<svg", &format!(r#"<svg xmlns="{SVG_NAMESPACE}""#), 1);
        (injected, true)
    } else {
        (content.to_string(), false)
    }
}
