use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ramcool_core::{LineRewriter, Mode, RamCoolConfig, RewriteStats};

use crate::error::{PassError, Result};
use crate::paths::same_file;

/// Outcome of rewriting one file.
#[derive(Clone, Debug)]
pub struct PassSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: RewriteStats,
    /// Input ended inside a ram sequence.
    pub unterminated: bool,
}

/// Stream `reader` through `rewriter` into `writer`, one line at a time.
///
/// Lines are handed to the rewriter without their terminator and every
/// output line is written with `\n`. The writer is flushed before returning.
pub fn rewrite_stream<R, W>(
    rewriter: &mut LineRewriter,
    reader: R,
    mut writer: W,
) -> Result<RewriteStats>
where
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line.map_err(PassError::Read)?;
        for out in rewriter.process(&line) {
            writer.write_all(out.as_bytes()).map_err(PassError::Write)?;
            writer.write_all(b"\n").map_err(PassError::Write)?;
        }
    }
    writer.flush().map_err(PassError::Write)?;
    Ok(*rewriter.stats())
}

/// Rewrite `input` into `output`.
///
/// The input is opened before the output is created, so a missing input
/// never leaves an empty output behind. A failed pass leaves whatever was
/// written in place.
pub fn rewrite_file(config: &RamCoolConfig, input: &Path, output: &Path) -> Result<PassSummary> {
    if same_file(input, output) {
        return Err(PassError::SameFile(output.to_path_buf()));
    }

    let reader = File::open(input).map_err(|source| PassError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| PassError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(
        "rewriting {} -> {} (ram temp {})",
        input.display(),
        output.display(),
        config.ram_temp
    );

    let mut rewriter = LineRewriter::new(config);
    let stats = rewrite_stream(&mut rewriter, BufReader::new(reader), BufWriter::new(writer))?;

    if stats.restores_without_temperature > 0 {
        tracing::warn!(
            "{} tool change(s) restored to 0 because no temperature was set before them",
            stats.restores_without_temperature
        );
    }
    let unterminated = rewriter.mode() == Mode::Cooled;
    if unterminated {
        tracing::warn!("input ended inside a ram sequence; nozzle was left at ram temperature");
    }
    tracing::debug!("pass complete: {stats:?}");

    Ok(PassSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
        unterminated,
    })
}
