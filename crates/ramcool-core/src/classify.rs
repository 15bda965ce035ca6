use regex::Regex;

use crate::constants::{RAM_END_MARKER, RAM_START_MARKER, TEMPERATURE_SET_PATTERN, TOOL_SELECT_PATTERN};

/// What a single input line means to the rewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `M104`/`M109` with an `S` target.
    TemperatureSet(u32),
    /// Slicer comment opening a ram sequence.
    RamStart,
    /// Tool select or the slicer comment closing the tool change.
    ToolChangeEnd,
    Other,
}

/// Line classifier. Patterns are compiled once per instance.
#[derive(Clone, Debug)]
pub struct Classifier {
    temperature_set: Regex,
    tool_select: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            temperature_set: Regex::new(TEMPERATURE_SET_PATTERN)
                .expect("temperature-set pattern is a valid regex"),
            tool_select: Regex::new(TOOL_SELECT_PATTERN)
                .expect("tool-select pattern is a valid regex"),
        }
    }

    /// Classify one line. Checks run in priority order: temperature set,
    /// ram start, tool-change end.
    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(temp) = self.temperature(line) {
            return LineKind::TemperatureSet(temp);
        }
        if line.starts_with(RAM_START_MARKER) {
            return LineKind::RamStart;
        }
        if self.tool_select.is_match(line) || line.starts_with(RAM_END_MARKER) {
            return LineKind::ToolChangeEnd;
        }
        LineKind::Other
    }

    // Targets that overflow u32 are not temperatures.
    fn temperature(&self, line: &str) -> Option<u32> {
        let caps = self.temperature_set.captures(line)?;
        caps.get(1)?.as_str().parse().ok()
    }
}
