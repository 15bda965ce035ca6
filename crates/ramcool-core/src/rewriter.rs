use crate::classify::{Classifier, LineKind};
use crate::config::{RamCoolConfig, RamPolicy, RestorePolicy};
use crate::directive::Directive;

/// Where the rewriter is relative to a ram sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Outside a ram sequence.
    #[default]
    Idle,
    /// Ram temperature has been injected; waiting for the tool change.
    Cooled,
}

/// Counters collected over one pass. They never influence the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines_in: usize,
    pub lines_out: usize,
    pub rams_cooled: usize,
    pub tool_changes_restored: usize,
    pub temperature_lines_suppressed: usize,
    /// Restores issued before any temperature-set line was seen. These
    /// carry a target of 0.
    pub restores_without_temperature: usize,
}

/// Single-pass rewriter that cools the nozzle for each ram sequence and
/// restores the last observed target temperature at the tool change.
#[derive(Clone, Debug)]
pub struct LineRewriter {
    classifier: Classifier,
    ram_temp: u32,
    ram_policy: RamPolicy,
    restore_policy: RestorePolicy,
    retain_original: bool,
    beep: bool,
    mode: Mode,
    last_temp: Option<u32>,
    stats: RewriteStats,
}

impl LineRewriter {
    pub fn new(config: &RamCoolConfig) -> Self {
        Self {
            classifier: Classifier::new(),
            ram_temp: config.ram_temp,
            ram_policy: config.ram_policy(),
            restore_policy: config.restore_policy(),
            retain_original: config.retain_original_post_ram_temperature_change,
            beep: config.beep_after_tool_change,
            mode: Mode::Idle,
            last_temp: None,
            stats: RewriteStats::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last target temperature seen in the input, if any.
    pub fn remembered_temperature(&self) -> Option<u32> {
        self.last_temp
    }

    pub fn stats(&self) -> &RewriteStats {
        &self.stats
    }

    /// Feed the next input line (without its terminator) and return the
    /// lines to write in its place, in order.
    pub fn process(&mut self, line: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(3);
        self.stats.lines_in += 1;

        match (self.mode, self.classifier.classify(line)) {
            (mode, LineKind::TemperatureSet(temp)) => {
                self.last_temp = Some(temp);
                if mode == Mode::Idle || self.retain_original {
                    out.push(line.to_string());
                } else {
                    self.stats.temperature_lines_suppressed += 1;
                }
                out.push(Directive::MatchedTemperature(temp).to_string());
            }
            (Mode::Idle, LineKind::RamStart) => {
                out.push(line.to_string());
                out.push(self.ram_directive().to_string());
                self.stats.rams_cooled += 1;
                self.mode = Mode::Cooled;
            }
            (Mode::Cooled, LineKind::ToolChangeEnd) => {
                self.restore_around(line, &mut out);
                self.mode = Mode::Idle;
            }
            // Doubled ram starts and stray tool changes pass through untouched.
            _ => out.push(line.to_string()),
        }

        self.stats.lines_out += out.len();
        out
    }

    fn ram_directive(&self) -> Directive {
        Directive::RamCool {
            temp: self.ram_temp,
            wait: self.ram_policy == RamPolicy::Wait,
        }
    }

    fn restore_around(&mut self, line: &str, out: &mut Vec<String>) {
        // An unknown target restores to 0; callers see it in the stats.
        let temp = match self.last_temp {
            Some(t) => t,
            None => {
                self.stats.restores_without_temperature += 1;
                0
            }
        };

        let (before, after) = match self.restore_policy {
            RestorePolicy::Default => (
                Directive::RestoreBeforeToolChange(temp),
                Some(Directive::StabilizeAfterToolChange(temp)),
            ),
            RestorePolicy::NoWait => (Directive::RestoreNoWait(temp), None),
            RestorePolicy::FullStabilization => (Directive::RestoreStabilizeBefore(temp), None),
        };

        out.push(before.to_string());
        out.push(line.to_string());
        if let Some(after) = after {
            out.push(after.to_string());
        }
        if self.beep {
            out.push(Directive::Beep.to_string());
        }
        self.stats.tool_changes_restored += 1;
    }
}

/// Rewrite a whole sequence of lines with a fresh rewriter.
pub fn rewrite_lines<I, S>(config: &RamCoolConfig, lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rewriter = LineRewriter::new(config);
    lines
        .into_iter()
        .flat_map(|line| rewriter.process(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> LineRewriter {
        LineRewriter::new(&RamCoolConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let rw = rewriter();
        assert_eq!(rw.mode(), Mode::Idle);
        assert_eq!(rw.remembered_temperature(), None);
        assert_eq!(rw.stats(), &RewriteStats::default());
    }

    #[test]
    fn test_other_lines_pass_through() {
        let mut rw = rewriter();
        assert_eq!(rw.process("G1 X1 Y2"), vec!["G1 X1 Y2"]);
        assert_eq!(rw.mode(), Mode::Idle);
    }

    #[test]
    fn test_temperature_updates_while_cooled() {
        let mut rw = rewriter();
        rw.process("; CP TOOLCHANGE START");
        let out = rw.process("M109 S230");
        assert_eq!(out, vec![";matched temp! :230"]);
        assert_eq!(rw.remembered_temperature(), Some(230));
        assert_eq!(rw.mode(), Mode::Cooled);
        assert_eq!(rw.stats().temperature_lines_suppressed, 1);
    }

    #[test]
    fn test_retain_original_while_cooled() {
        let config = RamCoolConfig {
            retain_original_post_ram_temperature_change: true,
            ..Default::default()
        };
        let mut rw = LineRewriter::new(&config);
        rw.process("; CP TOOLCHANGE START");
        assert_eq!(rw.process("M104 S220"), vec!["M104 S220", ";matched temp! :220"]);
        assert_eq!(rw.stats().temperature_lines_suppressed, 0);
    }

    #[test]
    fn test_doubled_ram_start_passes_through() {
        let mut rw = rewriter();
        rw.process("; CP TOOLCHANGE START");
        assert_eq!(rw.process("; CP TOOLCHANGE START"), vec!["; CP TOOLCHANGE START"]);
        assert_eq!(rw.mode(), Mode::Cooled);
        assert_eq!(rw.stats().rams_cooled, 1);
    }

    #[test]
    fn test_tool_change_while_idle_passes_through() {
        let mut rw = rewriter();
        assert_eq!(rw.process("T1"), vec!["T1"]);
        assert_eq!(rw.process("; CP TOOLCHANGE END"), vec!["; CP TOOLCHANGE END"]);
        assert_eq!(rw.mode(), Mode::Idle);
        assert_eq!(rw.stats().tool_changes_restored, 0);
    }

    #[test]
    fn test_end_marker_comment_closes_ram() {
        let mut rw = rewriter();
        rw.process("M104 S200");
        rw.process("; CP TOOLCHANGE START");
        let out = rw.process("; CP TOOLCHANGE END");
        assert_eq!(
            out,
            vec![
                "M104 S200  ; restore temperature before TC",
                "; CP TOOLCHANGE END",
                "M109 R200  ; restore temperature stabilize after TC",
            ]
        );
        assert_eq!(rw.mode(), Mode::Idle);
    }

    #[test]
    fn test_no_wait_at_tool_change() {
        let config = RamCoolConfig {
            no_wait_at_tool_change: true,
            ..Default::default()
        };
        let mut rw = LineRewriter::new(&config);
        rw.process("M104 S215");
        rw.process("; CP TOOLCHANGE START");
        assert_eq!(
            rw.process("T1"),
            vec!["M104 S215  ; restore temperature, no wait", "T1"]
        );
    }

    #[test]
    fn test_beep_follows_post_directive() {
        let config = RamCoolConfig {
            beep_after_tool_change: true,
            ..Default::default()
        };
        let mut rw = LineRewriter::new(&config);
        rw.process("M104 S200");
        rw.process("; CP TOOLCHANGE START");
        assert_eq!(
            rw.process("T2"),
            vec![
                "M104 S200  ; restore temperature before TC",
                "T2",
                "M109 R200  ; restore temperature stabilize after TC",
                "M300",
            ]
        );
    }

    #[test]
    fn test_restore_without_temperature_counted() {
        let mut rw = rewriter();
        rw.process("; CP TOOLCHANGE START");
        rw.process("T0");
        assert_eq!(rw.stats().restores_without_temperature, 1);
    }

    #[test]
    fn test_stats_track_line_counts() {
        let mut rw = rewriter();
        for line in ["M104 S200", "; CP TOOLCHANGE START", "G1 E-5", "T1"] {
            rw.process(line);
        }
        let stats = rw.stats();
        assert_eq!(stats.lines_in, 4);
        // 2 + 2 + 1 + 3
        assert_eq!(stats.lines_out, 8);
        assert_eq!(stats.rams_cooled, 1);
        assert_eq!(stats.tool_changes_restored, 1);
    }

    #[test]
    fn test_rewrite_lines_accepts_owned_and_borrowed() {
        let config = RamCoolConfig::default();
        let borrowed = rewrite_lines(&config, ["G28"]);
        let owned = rewrite_lines(&config, vec![String::from("G28")]);
        assert_eq!(borrowed, owned);
    }
}
