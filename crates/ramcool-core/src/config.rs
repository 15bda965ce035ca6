use serde::Deserialize;

use crate::constants::DEFAULT_RAM_TEMP;

/// Options controlling how temperature directives are injected around rams.
///
/// Deserializable so a settings file can supply any subset of the fields;
/// missing fields fall back to [`RamCoolConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RamCoolConfig {
    /// Target nozzle temperature while ramming.
    pub ram_temp: u32,
    /// Drop to the ram temperature with `M104` instead of `M109`.
    pub no_wait_at_ram_start: bool,
    /// Restore with a single `M104` before the tool change.
    pub no_wait_at_tool_change: bool,
    /// Restore with a single `M109` before the tool change.
    /// Takes precedence over `no_wait_at_tool_change`.
    pub full_stabilization_before_tool_change: bool,
    /// Keep the slicer's own temperature-set lines inside a ram sequence.
    pub retain_original_post_ram_temperature_change: bool,
    /// Emit `M300` after each tool change.
    pub beep_after_tool_change: bool,
}

impl Default for RamCoolConfig {
    fn default() -> Self {
        Self {
            ram_temp: DEFAULT_RAM_TEMP,
            no_wait_at_ram_start: false,
            no_wait_at_tool_change: false,
            full_stabilization_before_tool_change: false,
            retain_original_post_ram_temperature_change: false,
            beep_after_tool_change: false,
        }
    }
}

impl RamCoolConfig {
    pub fn restore_policy(&self) -> RestorePolicy {
        RestorePolicy::resolve(self)
    }

    pub fn ram_policy(&self) -> RamPolicy {
        if self.no_wait_at_ram_start {
            RamPolicy::NoWait
        } else {
            RamPolicy::Wait
        }
    }
}

/// How the remembered temperature is restored when a ram sequence ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestorePolicy {
    /// `M104` before the tool change, `M109` after it.
    Default,
    /// `M104` before the tool change only.
    NoWait,
    /// `M109` before the tool change only.
    FullStabilization,
}

impl RestorePolicy {
    /// Precedence: full stabilization > no wait > default.
    pub fn resolve(config: &RamCoolConfig) -> Self {
        if config.full_stabilization_before_tool_change {
            RestorePolicy::FullStabilization
        } else if config.no_wait_at_tool_change {
            RestorePolicy::NoWait
        } else {
            RestorePolicy::Default
        }
    }
}

/// Which heater command drops the nozzle to the ram temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RamPolicy {
    Wait,
    NoWait,
}
