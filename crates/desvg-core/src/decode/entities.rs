//! HTML/XML character entity decoding.

use std::borrow::Cow;

/// Longest entity body accepted between `&` and `;`.
const MAX_ENTITY_LEN: usize = 10;

/// Decodes named and numeric character references into literal characters.
///
/// Handles the named set that shows up in CSS-embedded SVG (`&lt;` `&gt;`
/// `&amp;` `&quot;` `&apos;` `&nbsp;`) plus decimal (`&#169;`) and hex
/// (`&#xA9;`) references. Unknown, unterminated, or malformed references pass
/// through verbatim. Decoding is a single pass; already-unescaped output is
/// not decoded again (`&amp;quot;` becomes `&quot;`, not `"`).
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        // Byte index of the terminating `;` within `rest`, if any.
        let semi = rest[1..].find(';').map(|i| i + 1);
        match semi {
            Some(semi) if semi - 1 <= MAX_ENTITY_LEN && is_entity_body(&rest[1..semi]) => {
                match decode_entity_body(&rest[1..semi]) {
                    Some(c) => out.push(c),
                    None => out.push_str(&rest[..=semi]),
                }
                rest = &rest[semi + 1..];
            }
            _ => {
                // Not a reference; the `&` is literal text.
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// True if `body` could be an entity body: `#` plus ASCII alphanumerics.
fn is_entity_body(body: &str) -> bool {
    !body.is_empty() && body.chars().all(|c| c == '#' || c.is_ascii_alphanumeric())
}

fn decode_entity_body(body: &str) -> Option<char> {
    match body {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                digits.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
