//! Output artifact naming.

/// Builds the `{base}_{NN}` stem for a 1-based sequence index.
///
/// `min_width` is a minimum, not a fixed width: indexes needing more digits
/// keep their natural width (index 100 with `min_width` 2 → `base_100`).
pub fn artifact_stem(base: &str, index: usize, min_width: usize) -> String {
    format!("{base}_{index:0min_width$}")
}
