//! `desvg scan <stylesheet>` – list embedded payloads without writing files.

use anyhow::Result;
use desvg_core::decode;
use desvg_core::extract;
use desvg_core::stylesheet::Stylesheet;
use std::path::Path;

pub fn run_scan(stylesheet: &Path) -> Result<()> {
    let sheet = Stylesheet::load(stylesheet)?;
    let payloads = extract::extract_payloads(sheet.content());
    if payloads.is_empty() {
        println!(
            "no embedded SVG data URIs found in {}",
            stylesheet.display()
        );
        return Ok(());
    }

    println!(
        "found {} embedded SVG payload(s) in {}",
        payloads.len(),
        stylesheet.display()
    );
    println!(
        "{:<5} {:<9} {:<9} {:<9} {}",
        "IDX", "OFFSET", "ENCODED", "XMLNS", "STATUS"
    );
    for (i, payload) in payloads.iter().enumerate() {
        let (xmlns, status) = match decode::decode_payload(&payload.raw) {
            Ok(svg) if svg.xmlns_injected => ("missing", "ok".to_string()),
            Ok(svg) if svg.has_svg_tag() => ("present", "ok".to_string()),
            Ok(_) => ("-", "ok (no <svg> tag)".to_string()),
            Err(err) => ("-", format!("undecodable: {err}")),
        };
        println!(
            "{:<5} {:<9} {:<9} {:<9} {}",
            i + 1,
            payload.offset,
            payload.raw.len(),
            xmlns,
            status
        );
    }
    Ok(())
}
