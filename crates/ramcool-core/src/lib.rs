//! Ram-cooling rewrite engine for slicer G-code.
//!
//! Watches a G-code stream for the slicer's tool-change ram sequences, drops
//! the nozzle to a ram temperature when one begins and restores the last
//! commanded temperature at the tool change.
//!
//! Zero I/O. A pure line transform with no opinions about files or streams.

pub mod classify;
pub mod config;
pub mod constants;
pub mod directive;
pub mod rewriter;

pub use classify::{Classifier, LineKind};
pub use config::{RamCoolConfig, RamPolicy, RestorePolicy};
pub use constants::{DEFAULT_RAM_TEMP, RAM_END_MARKER, RAM_START_MARKER};
pub use directive::Directive;
pub use rewriter::{LineRewriter, Mode, RewriteStats, rewrite_lines};
