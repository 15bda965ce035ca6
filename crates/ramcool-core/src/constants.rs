/// Nozzle temperature during a ram when none is configured (°C)
pub const DEFAULT_RAM_TEMP: u32 = 180;

/// Comment the slicer writes where a ram sequence begins
pub const RAM_START_MARKER: &str = "; CP TOOLCHANGE START";

/// Comment the slicer writes where a tool change finishes
pub const RAM_END_MARKER: &str = "; CP TOOLCHANGE END";

/// Temperature-set lines: `M104` (set and continue) or `M109` (set and wait)
/// with an `S` target.
pub const TEMPERATURE_SET_PATTERN: &str = r"^M10[49] S(\d+)";

/// Tool-select lines: `T` followed by a tool index.
pub const TOOL_SELECT_PATTERN: &str = r"^T[0-9]";
