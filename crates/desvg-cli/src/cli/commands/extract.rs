//! `desvg extract <stylesheet>` – run the pipeline and write artifacts.

use anyhow::Result;
use desvg_core::config::DesvgConfig;
use desvg_core::pipeline::{self, RunOptions};
use std::path::{Path, PathBuf};

pub fn run_extract(
    cfg: &DesvgConfig,
    stylesheet: &Path,
    out_dir: Option<PathBuf>,
    base_name: Option<String>,
    no_txt: bool,
) -> Result<()> {
    let mut options = RunOptions::resolve(stylesheet, cfg);
    if let Some(dir) = out_dir {
        options.output_dir = dir;
    }
    if let Some(name) = base_name {
        options.base_name = name;
    }
    if no_txt {
        options.txt_copies = false;
    }

    let report = pipeline::run(stylesheet, &options)?;
    if report.found == 0 {
        println!(
            "no embedded SVG data URIs found in {}",
            stylesheet.display()
        );
        return Ok(());
    }

    println!(
        "found {} embedded SVG payload(s) in {}",
        report.found,
        stylesheet.display()
    );
    for artifact in &report.written {
        match &artifact.txt_path {
            Some(_) => println!("saved: {0}.svg and {0}.txt", artifact.stem),
            None => println!("saved: {}.svg", artifact.stem),
        }
    }
    for skip in &report.skipped {
        println!(
            "skipped payload {:0w$}: {}",
            skip.index,
            skip.reason,
            w = options.index_pad
        );
    }
    Ok(())
}
