//! Pipeline driver: load, extract, decode, write. Strictly sequential.
//!
//! The only hard failure paths are a missing/unreadable input and filesystem
//! errors while writing. A payload that fails to decode is logged, recorded
//! in the report, and skipped; the batch always runs to the end.

mod report;

pub use report::{ExtractReport, SkippedPayload};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::DesvgConfig;
use crate::decode;
use crate::extract;
use crate::output;
use crate::stylesheet::{self, Stylesheet};

/// Options for one extraction run. Defaults come from the input path and the
/// global config via [`RunOptions::resolve`]; callers override fields before
/// passing the options to [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory artifacts are written to.
    pub output_dir: PathBuf,
    /// Base name for artifact stems (`{base}_{NN}`).
    pub base_name: String,
    /// Write a `.txt` twin next to every `.svg`.
    pub txt_copies: bool,
    /// Minimum width of the zero-padded sequence index.
    pub index_pad: usize,
}

impl RunOptions {
    /// Default options for `input`: output next to the stylesheet in the
    /// configured directory name, base name from the input file stem.
    pub fn resolve(input: &Path, cfg: &DesvgConfig) -> Self {
        let parent = input.parent().unwrap_or_else(|| Path::new("."));
        Self {
            output_dir: parent.join(&cfg.output_dir_name),
            base_name: stylesheet::base_name_of(input),
            txt_copies: cfg.txt_copies,
            index_pad: cfg.index_pad,
        }
    }
}

/// Runs the pipeline over `input`.
///
/// Payloads are processed in order of appearance; the 1-based sequence index
/// follows that order, so a skipped payload leaves a visible gap in the
/// numbering instead of renumbering later artifacts. Zero payloads found is a
/// normal result with no output directory created.
pub fn run(input: &Path, options: &RunOptions) -> Result<ExtractReport> {
    let sheet = Stylesheet::load(input)?;
    let payloads = extract::extract_payloads(sheet.content());
    tracing::info!(found = payloads.len(), path = %input.display(), "stylesheet scanned");

    let mut report = ExtractReport {
        found: payloads.len(),
        written: Vec::new(),
        skipped: Vec::new(),
        output_dir: options.output_dir.clone(),
    };
    if payloads.is_empty() {
        return Ok(report);
    }

    output::ensure_output_dir(&options.output_dir)?;
    for (i, payload) in payloads.iter().enumerate() {
        let index = i + 1;
        match decode::decode_payload(&payload.raw) {
            Ok(svg) => {
                if !svg.has_svg_tag() {
                    tracing::warn!(index, "decoded payload has no <svg> tag; writing as-is");
                }
                if svg.xmlns_injected {
                    tracing::debug!(index, "injected default svg namespace");
                }
                let stem = output::artifact_stem(&options.base_name, index, options.index_pad);
                let artifact = output::write_artifact(
                    &options.output_dir,
                    &stem,
                    &svg.content,
                    options.txt_copies,
                )?;
                report.written.push(artifact);
            }
            Err(err) => {
                tracing::warn!(
                    index,
                    offset = payload.offset,
                    error = %err,
                    "skipping undecodable payload"
                );
                report.skipped.push(SkippedPayload {
                    index,
                    offset: payload.offset,
                    reason: err,
                });
            }
        }
    }

    Ok(report)
}
