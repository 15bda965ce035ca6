use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ramcool_core::RamCoolConfig;
use ramcool_io::{default_output_path, load_settings, rewrite_file};

#[derive(Parser)]
#[command(
    name = "cool-ram",
    about = "Cool the nozzle during tool-change rams in slicer G-code"
)]
struct Cli {
    /// Nozzle temperature while ramming [default: 180]
    #[arg(short = 't', long, alias = "ram_temp")]
    ram_temp: Option<u32>,

    /// Input G-code file
    #[arg(short, long)]
    input: PathBuf,

    /// Output file [default: input with `_ramcool` before the extension]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML settings file; command-line options take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop to the ram temperature without waiting (M104 instead of M109)
    #[arg(long)]
    no_wait_at_ram_start: bool,

    /// Restore with a single M104 before the tool change
    #[arg(long)]
    no_wait_at_tool_change: bool,

    /// Wait for full stabilization before the tool change (overrides --no-wait-at-tool-change)
    #[arg(long)]
    full_stabilization_before_tool_change: bool,

    /// Keep the slicer's temperature changes inside a ram sequence
    #[arg(long)]
    retain_original_post_ram_temperature_change: bool,

    /// Emit M300 after each tool change
    #[arg(long)]
    beep_after_tool_change: bool,

    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the settings file, then command-line options.
    fn resolve_config(&self) -> Result<RamCoolConfig> {
        let mut config = match &self.config {
            Some(path) => load_settings(path).context("failed to load settings")?,
            None => RamCoolConfig::default(),
        };
        if let Some(t) = self.ram_temp {
            config.ram_temp = t;
        }
        config.no_wait_at_ram_start |= self.no_wait_at_ram_start;
        config.no_wait_at_tool_change |= self.no_wait_at_tool_change;
        config.full_stabilization_before_tool_change |= self.full_stabilization_before_tool_change;
        config.retain_original_post_ram_temperature_change |=
            self.retain_original_post_ram_temperature_change;
        config.beep_after_tool_change |= self.beep_after_tool_change;
        Ok(config)
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, falling
/// back to warnings only.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.resolve_config()?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    tracing::debug!("resolved config: {config:?}");

    let summary = rewrite_file(&config, &cli.input, &output)
        .with_context(|| format!("failed to rewrite {}", cli.input.display()))?;

    println!(
        "wrote {}: {} lines in, {} lines out, {} ram sequence(s) cooled, {} tool change(s) restored",
        summary.output.display(),
        summary.stats.lines_in,
        summary.stats.lines_out,
        summary.stats.rams_cooled,
        summary.stats.tool_changes_restored,
    );
    Ok(())
}
