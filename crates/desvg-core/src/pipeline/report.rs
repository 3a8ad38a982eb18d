//! Run report types returned by the pipeline driver.

use crate::decode::DecodeError;
use crate::output::WrittenArtifact;
use std::path::PathBuf;

/// One payload that failed to decode; the run continues past it.
#[derive(Debug)]
pub struct SkippedPayload {
    /// 1-based sequence index (the index its artifact would have carried).
    pub index: usize,
    /// Byte offset of the payload's data-URI in the stylesheet.
    pub offset: usize,
    pub reason: DecodeError,
}

/// Summary of one extraction run, used by the CLI for its status lines.
#[derive(Debug)]
pub struct ExtractReport {
    /// Number of payloads matched in the stylesheet.
    pub found: usize,
    /// Artifacts written, in sequence order.
    pub written: Vec<WrittenArtifact>,
    /// Payloads skipped because they failed to decode.
    pub skipped: Vec<SkippedPayload>,
    /// Resolved output directory (created only when payloads were found).
    pub output_dir: PathBuf,
}
