//! Command-line parsing for the synthetic MMM data generator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the generation/transform code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{ChannelSpec, DEFAULT_ADSTOCK_WINDOW, Frequency};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mmm", version, about = "Synthetic MMM evaluation data generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a dataset, print summary + ground-truth shares, optionally export.
    Generate(GenArgs),
    /// Print the ground-truth share table only (useful for scripting).
    Shares(GenArgs),
    /// Print the share table from a previously exported truth JSON.
    Truth(TruthArgs),
}

/// Options for printing a saved truth file.
#[derive(Debug, Parser)]
pub struct TruthArgs {
    /// Truth JSON file produced by `mmm generate --export-truth`.
    #[arg(long, value_name = "JSON")]
    pub truth: PathBuf,
}

/// Common options for dataset generation.
#[derive(Debug, Parser, Clone)]
pub struct GenArgs {
    /// First period of the time spine.
    #[arg(long, default_value = "2021-01-01")]
    pub start: NaiveDate,

    /// Number of periods to generate (>= 2).
    #[arg(short = 'n', long, default_value_t = 104)]
    pub periods: usize,

    /// Sampling frequency of the time spine.
    #[arg(long, value_enum, default_value_t = Frequency::Weekly)]
    pub freq: Frequency,

    /// Master random seed (per-component streams are derived from it).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Carryover truncation window (periods).
    #[arg(long, default_value_t = DEFAULT_ADSTOCK_WINDOW)]
    pub adstock_window: usize,

    /// Channel spec as NAME:SPEND_SCALAR:ALPHA:LAMBDA:BETA (repeatable).
    ///
    /// Example: --channel tv:10:0.5:1.5:350
    #[arg(long = "channel", value_parser = parse_channel_spec)]
    pub channels: Vec<ChannelSpec>,

    /// Export the full generated table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export ground truth (config + realized shares) to JSON.
    #[arg(long = "export-truth")]
    pub export_truth: Option<PathBuf>,
}

/// Demo channel set used when no `--channel` flag is given.
pub fn default_channels() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec {
            name: "tv".to_string(),
            spend_scalar: 10.0,
            adstock_alpha: 0.5,
            saturation_lambda: 1.5,
            beta: 350.0,
        },
        ChannelSpec {
            name: "radio".to_string(),
            spend_scalar: 7.0,
            adstock_alpha: 0.3,
            saturation_lambda: 3.0,
            beta: 150.0,
        },
    ]
}

/// Parse `NAME:SPEND_SCALAR:ALPHA:LAMBDA:BETA` into a channel spec.
///
/// Domain validation happens later in `GenerateConfig::validate`; this only
/// checks the shape of the flag value.
fn parse_channel_spec(s: &str) -> Result<ChannelSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 5 {
        return Err(format!(
            "expected NAME:SPEND_SCALAR:ALPHA:LAMBDA:BETA, got '{s}'"
        ));
    }
    let name = parts[0].trim();
    if name.is_empty() {
        return Err("channel name must not be empty".to_string());
    }
    let num = |label: &str, v: &str| -> Result<f64, String> {
        v.trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid {label} '{v}' in channel '{name}'"))
    };
    Ok(ChannelSpec {
        name: name.to_string(),
        spend_scalar: num("spend_scalar", parts[1])?,
        adstock_alpha: num("alpha", parts[2])?,
        saturation_lambda: num("lambda", parts[3])?,
        beta: num("beta", parts[4])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_channel_spec() {
        let spec = parse_channel_spec("tv:10:0.5:1.5:350").unwrap();
        assert_eq!(spec.name, "tv");
        assert_eq!(spec.spend_scalar, 10.0);
        assert_eq!(spec.adstock_alpha, 0.5);
        assert_eq!(spec.saturation_lambda, 1.5);
        assert_eq!(spec.beta, 350.0);
    }

    #[test]
    fn rejects_wrong_arity_and_bad_numbers() {
        assert!(parse_channel_spec("tv:10:0.5").is_err());
        assert!(parse_channel_spec("tv:ten:0.5:1.5:350").is_err());
        assert!(parse_channel_spec(":10:0.5:1.5:350").is_err());
    }

    #[test]
    fn cli_parses_generate_with_flags() {
        let cli = Cli::parse_from([
            "mmm",
            "generate",
            "-n",
            "52",
            "--seed",
            "7",
            "--channel",
            "tv:10:0.5:1.5:350",
            "--channel",
            "radio:7:0.3:3:150",
        ]);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.periods, 52);
                assert_eq!(args.seed, 7);
                assert_eq!(args.channels.len(), 2);
                assert_eq!(args.channels[1].name, "radio");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn default_channels_pass_validation() {
        for spec in default_channels() {
            spec.validate().unwrap();
        }
    }
}
