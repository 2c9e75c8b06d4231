use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "bcmp",
    about = "Baseline comparer: classify differences between generated outputs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one pair of differing spans
    Classify(SpanArgs),
    /// Print the differences stored in a JSON file
    Inspect(InspectArgs),
    /// Check whether a new difference is tolerated by a stored one
    Check(CheckArgs),
}

#[derive(Args, Clone, Debug)]
pub struct SpanArgs {
    /// Offset of the difference in the baseline text
    pub baseline_start: usize,
    /// Differing baseline fragment
    pub baseline: String,
    /// Offset of the difference in the target text
    pub target_start: usize,
    /// Differing target fragment
    pub target: String,
}

#[derive(Args)]
pub struct InspectArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CheckArgs {
    /// JSON file of previously classified differences
    pub file: PathBuf,
    #[command(flatten)]
    pub span: SpanArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classify() {
        let cli = Cli::try_parse_from(["bcmp", "classify", "3", "65432", "4", "69999"]).unwrap();
        if let Command::Classify(args) = cli.command {
            assert_eq!(args.baseline_start, 3);
            assert_eq!(args.baseline, "65432");
            assert_eq!(args.target_start, 4);
            assert_eq!(args.target, "69999");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_classify_negative_fragment() {
        // Fragments that look like flags go after `--`.
        let cli = Cli::try_parse_from(["bcmp", "classify", "--", "0", "-5", "0", "7"]).unwrap();
        if let Command::Classify(args) = cli.command {
            assert_eq!(args.baseline, "-5");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_classify_rejects_negative_offset() {
        assert!(Cli::try_parse_from(["bcmp", "classify", "--", "-1", "a", "0", "b"]).is_err());
    }

    #[test]
    fn parse_inspect() {
        let cli = Cli::try_parse_from(["bcmp", "inspect", "diffs.json"]).unwrap();
        if let Command::Inspect(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("diffs.json"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["bcmp", "check", "diffs.json", "10", "1", "11", "2"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("diffs.json"));
            assert_eq!(args.span.baseline_start, 10);
            assert_eq!(args.span.target, "2");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["bcmp", "--verbose", "inspect", "x.json"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["bcmp", "--format", "json", "inspect", "x.json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn format_defaults_to_unset() {
        let cli = Cli::try_parse_from(["bcmp", "inspect", "x.json"]).unwrap();
        assert!(cli.format.is_none());
        assert!(cli.config.is_none());
    }
}
