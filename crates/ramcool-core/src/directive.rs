use std::fmt;

/// G-code lines the rewriter injects into the output stream.
///
/// The rendered text is the wire format; firmware and downstream tooling see
/// exactly what `Display` produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Drop to the ram temperature, optionally waiting for it.
    RamCool { temp: u32, wait: bool },
    /// `M104` restore ahead of the tool change, paired with
    /// [`Directive::StabilizeAfterToolChange`].
    RestoreBeforeToolChange(u32),
    /// `M104` restore ahead of the tool change with nothing after it.
    RestoreNoWait(u32),
    /// `M109` restore that blocks until the nozzle is back at temperature.
    RestoreStabilizeBefore(u32),
    /// `M109` after the tool-change line.
    StabilizeAfterToolChange(u32),
    /// Annotation written whenever a temperature-set line is recognized.
    MatchedTemperature(u32),
    /// Audible alert.
    Beep,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Directive::RamCool { temp, wait: true } => {
                write!(f, "M109 R{temp} ; set temp for Ram cooling")
            }
            Directive::RamCool { temp, wait: false } => {
                write!(f, "M104 S{temp} ; set temp for Ram cooling, no wait")
            }
            Directive::RestoreBeforeToolChange(t) => {
                write!(f, "M104 S{t}  ; restore temperature before TC")
            }
            Directive::RestoreNoWait(t) => write!(f, "M104 S{t}  ; restore temperature, no wait"),
            Directive::RestoreStabilizeBefore(t) => {
                write!(f, "M109 R{t}  ; restore temperature, stabilize before TC")
            }
            Directive::StabilizeAfterToolChange(t) => {
                write!(f, "M109 R{t}  ; restore temperature stabilize after TC")
            }
            Directive::MatchedTemperature(t) => write!(f, ";matched temp! :{t}"),
            Directive::Beep => f.write_str("M300"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_cool_variants() {
        let wait = Directive::RamCool { temp: 190, wait: true };
        let no_wait = Directive::RamCool { temp: 170, wait: false };
        assert_eq!(wait.to_string(), "M109 R190 ; set temp for Ram cooling");
        assert_eq!(no_wait.to_string(), "M104 S170 ; set temp for Ram cooling, no wait");
    }

    #[test]
    fn test_restore_variants_use_double_space() {
        assert_eq!(
            Directive::RestoreBeforeToolChange(0).to_string(),
            "M104 S0  ; restore temperature before TC"
        );
        assert_eq!(
            Directive::RestoreStabilizeBefore(205).to_string(),
            "M109 R205  ; restore temperature, stabilize before TC"
        );
        assert_eq!(
            Directive::StabilizeAfterToolChange(0).to_string(),
            "M109 R0  ; restore temperature stabilize after TC"
        );
        assert_eq!(
            Directive::RestoreNoWait(215).to_string(),
            "M104 S215  ; restore temperature, no wait"
        );
    }

    #[test]
    fn test_annotation_and_beep() {
        assert_eq!(Directive::MatchedTemperature(210).to_string(), ";matched temp! :210");
        assert_eq!(Directive::Beep.to_string(), "M300");
    }
}
