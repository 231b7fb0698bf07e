//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the generation pipeline
//! - prints the summary and ground-truth share table
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, GenArgs, TruthArgs, default_channels};
use crate::domain::GenerateConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `mmm` binary.
pub fn run() -> Result<(), AppError> {
    // We want `mmm` and `mmm -n 52` to behave like `mmm generate ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Generate(args) => handle_generate(args, OutputMode::Full),
        Command::Shares(args) => handle_generate(args, OutputMode::SharesOnly),
        Command::Truth(args) => handle_truth(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    SharesOnly,
}

fn handle_generate(args: GenArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = generate_config_from_args(&args);
    let run = pipeline::run_generate(config)?;

    if mode == OutputMode::Full {
        println!("{}", crate::report::format_run_summary(&run.config, &run.dataset));
    }
    println!("{}", crate::report::format_shares(&run.truth));

    if let Some(path) = &args.export {
        crate::io::export::write_dataset_csv(path, &run.dataset)?;
    }
    if let Some(path) = &args.export_truth {
        crate::io::truth::write_truth_json(path, &run.config, &run.dataset)?;
    }

    Ok(())
}

fn handle_truth(args: TruthArgs) -> Result<(), AppError> {
    let file = crate::io::truth::read_truth_json(&args.truth)?;
    let truth = crate::report::ground_truth_from_file(&file);
    println!("{}", crate::report::format_shares(&truth));
    Ok(())
}

/// Build a pipeline config from CLI flags (demo channels when none given).
pub fn generate_config_from_args(args: &GenArgs) -> GenerateConfig {
    let channels = if args.channels.is_empty() {
        default_channels()
    } else {
        args.channels.clone()
    };

    GenerateConfig {
        start_date: args.start,
        periods: args.periods,
        freq: args.freq,
        seed: args.seed,
        adstock_window: args.adstock_window,
        channels,
    }
}

/// Rewrite argv so `mmm` defaults to `mmm generate`.
///
/// Rules:
/// - `mmm`                     -> `mmm generate`
/// - `mmm -n 52 ...`           -> `mmm generate -n 52 ...`
/// - `mmm --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("generate".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "shares" | "truth");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "generate flags".
    if arg1.starts_with('-') {
        argv.insert(1, "generate".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_generate() {
        assert_eq!(rewrite_args(argv(&["mmm"])), argv(&["mmm", "generate"]));
        assert_eq!(
            rewrite_args(argv(&["mmm", "-n", "52"])),
            argv(&["mmm", "generate", "-n", "52"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["mmm", "shares"])),
            argv(&["mmm", "shares"])
        );
        assert_eq!(rewrite_args(argv(&["mmm", "--help"])), argv(&["mmm", "--help"]));
    }

    #[test]
    fn empty_channel_flags_fall_back_to_demo_set() {
        let cli = crate::cli::Cli::parse_from(["mmm", "generate"]);
        let crate::cli::Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let config = generate_config_from_args(&args);
        assert!(!config.channels.is_empty());
        config.validate().unwrap();
    }
}
