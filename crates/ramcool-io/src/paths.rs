use std::path::{Path, PathBuf};

/// Inserted between the file stem and extension of a defaulted output path.
pub const OUTPUT_SUFFIX: &str = "_ramcool";

/// Extension used when the input has none.
const FALLBACK_EXTENSION: &str = "gcode";

/// Derive the output path for `input` when none was given:
/// `part.gcode` → `part_ramcool.gcode`, `part` → `part_ramcool.gcode`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}

/// True when both paths name the same file. Falls back to a lexical
/// comparison when the output does not exist yet.
pub fn same_file(input: &Path, output: &Path) -> bool {
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    }
}
