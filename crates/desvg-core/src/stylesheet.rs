//! Stylesheet loading and base-name derivation.
//!
//! The input is a single UTF-8 CSS file; its content is read once and treated
//! as immutable for the rest of the run.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Base name used when the input path has no usable file stem.
const DEFAULT_BASE_NAME: &str = "stylesheet";

/// A loaded stylesheet: the input path plus its full text content.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    path: PathBuf,
    content: String,
}

impl Stylesheet {
    /// Read the stylesheet at `path`. A missing path is reported as a
    /// distinct error before any read is attempted; read failures (including
    /// non-UTF-8 content) carry the path in their context.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("input stylesheet does not exist: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read stylesheet: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Base name for output artifacts, derived from the input filename.
    pub fn base_name(&self) -> String {
        base_name_of(&self.path)
    }
}

/// Derives the output base name from a stylesheet path: the file stem, or
/// `"stylesheet"` when the path has none.
///
/// # Examples
///
/// - `base_name_of("assets/estilos.css")` → `"estilos"`
/// - `base_name_of("..")` → `"stylesheet"`
pub fn base_name_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estilos.css");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"body { color: red; }").unwrap();

        let sheet = Stylesheet::load(&path).unwrap();
        assert_eq!(sheet.content(), "body { color: red; }");
        assert_eq!(sheet.path(), path.as_path());
        assert_eq!(sheet.base_name(), "estilos");
    }

    #[test]
    fn load_missing_input_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.css");
        let err = Stylesheet::load(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn base_name_from_stem() {
        assert_eq!(base_name_of(Path::new("estilos.css")), "estilos");
        assert_eq!(base_name_of(Path::new("/srv/site/theme.min.css")), "theme.min");
        assert_eq!(base_name_of(Path::new("no_extension")), "no_extension");
    }

    #[test]
    fn base_name_fallback() {
        assert_eq!(base_name_of(Path::new("/")), "stylesheet");
        assert_eq!(base_name_of(Path::new("..")), "stylesheet");
    }
}
