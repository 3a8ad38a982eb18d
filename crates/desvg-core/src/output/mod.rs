//! Artifact writing: output directory lifecycle and `.svg`/`.txt` pairs.

mod name;

pub use name::artifact_stem;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Files written for one decoded payload.
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    pub stem: String,
    pub svg_path: PathBuf,
    /// `None` when txt copies are disabled for the run.
    pub txt_path: Option<PathBuf>,
}

/// Creates the output directory and any missing parents. An existing
/// directory is not an error.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir: {}", dir.display()))
}

/// Writes `content` as `{stem}.svg` (and `{stem}.txt` when `txt_copy`) under
/// `dir`. Pre-existing files of the same name are overwritten silently; both
/// files carry identical bytes.
pub fn write_artifact(
    dir: &Path,
    stem: &str,
    content: &str,
    txt_copy: bool,
) -> Result<WrittenArtifact> {
    let svg_path = dir.join(format!("{stem}.svg"));
    fs::write(&svg_path, content)
        .with_context(|| format!("write artifact: {}", svg_path.display()))?;

    let txt_path = if txt_copy {
        let path = dir.join(format!("{stem}.txt"));
        fs::write(&path, content)
            .with_context(|| format!("write artifact: {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    tracing::debug!(stem, "artifact written");
    Ok(WrittenArtifact {
        stem: stem.to_string(),
        svg_path,
        txt_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_identical_pair() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = write_artifact(dir.path(), "estilos_01", "<svg/>", true).unwrap();

        assert_eq!(artifact.stem, "estilos_01");
        let svg = fs::read_to_string(&artifact.svg_path).unwrap();
        let txt = fs::read_to_string(artifact.txt_path.as_ref().unwrap()).unwrap();
        assert_eq!(svg, "<svg/>");
        assert_eq!(svg, txt);
        assert_eq!(artifact.svg_path.extension().unwrap(), "svg");
    }

    #[test]
    fn txt_copy_disabled_writes_only_svg() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = write_artifact(dir.path(), "estilos_01", "<svg/>", false).unwrap();

        assert!(artifact.txt_path.is_none());
        assert!(artifact.svg_path.exists());
        assert!(!dir.path().join("estilos_01.txt").exists());
    }

    #[test]
    fn overwrites_existing_files_silently() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "a_01", "old", true).unwrap();
        let artifact = write_artifact(dir.path(), "a_01", "new", true).unwrap();

        assert_eq!(fs::read_to_string(&artifact.svg_path).unwrap(), "new");
        assert_eq!(
            fs::read_to_string(artifact.txt_path.as_ref().unwrap()).unwrap(),
            "new"
        );
    }

    #[test]
    fn ensure_output_dir_creates_parents_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("svg-decoded");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }
}
