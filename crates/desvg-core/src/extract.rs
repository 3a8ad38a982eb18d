//! Embedded SVG data-URI extraction.
//!
//! Scans raw CSS text for `data:image/svg+xml` URIs (with or without a
//! `;charset=utf-8` suffix) and captures each still-encoded payload up to the
//! first terminating `"` or `)`. Matches are returned in order of appearance;
//! that order drives output numbering downstream.

use regex::Regex;
use std::sync::LazyLock;

/// One still-percent-encoded SVG payload found in the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Captured payload text, exactly as it appears in the CSS.
    pub raw: String,
    /// Byte offset of the `data:` prefix within the stylesheet content.
    pub offset: usize,
}

/// Extracts all embedded SVG payloads from `css`, in order of appearance.
///
/// The capture is non-greedy up to the first `"` or `)`, so a literal `)`
/// inside a payload ends the capture early (real payloads percent-encode it).
/// Zero matches is a normal empty result, not an error.
pub fn extract_payloads(css: &str) -> Vec<EncodedPayload> {
    static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"data:image/svg\+xml(?:;charset=utf-8)?,(.*?)[")]"#).unwrap()
    });

    DATA_URI
        .captures_iter(css)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let payload = caps.get(1)?;
            Some(EncodedPayload {
                raw: payload.as_str().to_string(),
                offset: whole.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_paren_terminated_uri() {
        let css = "background:url(data:image/svg+xml,%3Csvg%3E%3C%2Fsvg%3E)";
        let payloads = extract_payloads(css);
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].raw, "%3Csvg%3E%3C%2Fsvg%3E");
    }

    #[test]
    fn extracts_quote_terminated_uri() {
        let css = r#".icon { src: url("data:image/svg+xml,%3Csvg/%3E"); }"#;
        let payloads = extract_payloads(css);
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].raw, "%3Csvg/%3E");
    }

    #[test]
    fn extracts_charset_variant() {
        let css = "url(data:image/svg+xml;charset=utf-8,%3Csvg%3E)";
        let payloads = extract_payloads(css);
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].raw, "%3Csvg%3E");
    }

    #[test]
    fn multiple_matches_in_source_order_with_offsets() {
        let css = "a{background:url(data:image/svg+xml,first)}\n\
                   b{background:url(data:image/svg+xml;charset=utf-8,second)}";
        let payloads = extract_payloads(css);
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0].raw, "first");
        assert_eq!(payloads[1].raw, "second");
        assert!(payloads[0].offset < payloads[1].offset);
        assert_eq!(&css[payloads[0].offset..payloads[0].offset + 5], "data:");
    }

    #[test]
    fn no_matches_is_empty() {
        assert!(extract_payloads("body { color: #fff; }").is_empty());
        assert!(extract_payloads("").is_empty());
    }

    #[test]
    fn literal_paren_truncates_capture() {
        // The first unencoded `)` terminates the payload; a real payload
        // percent-encodes it.
        let css = "url(data:image/svg+xml,ab)cd)";
        let payloads = extract_payloads(css);
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].raw, "ab");
    }

    #[test]
    fn payload_does_not_cross_newlines() {
        let css = "url(data:image/svg+xml,ab\ncd)";
        assert!(extract_payloads(css).is_empty());
    }

    #[test]
    fn empty_payload_is_captured() {
        let payloads = extract_payloads("url(data:image/svg+xml,)");
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].raw, "");
    }

    #[test]
    fn unrelated_data_uris_ignored() {
        let css = "url(data:image/png;base64,iVBORw0KGgo=)";
        assert!(extract_payloads(css).is_empty());
    }
}
