use std::path::Path;

use anyhow::Context;
use bcmp_classify::{
    differences_from_json, differences_to_json, DifferenceDatatype, PositionalDifference,
};
use colored::Colorize;
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?.with_format(cli.format);
    if !config.color {
        colored::control::set_override(false);
    }
    debug!(?config, "loaded configuration");

    let output = match cli.command {
        Command::Classify(args) => cmd_classify(&args, config.format)?,
        Command::Inspect(args) => cmd_inspect(&args.file, config.format)?,
        Command::Check(args) => cmd_check(&args, config.format)?,
    };
    println!("{output}");
    Ok(())
}

fn classify_span(span: &SpanArgs) -> PositionalDifference {
    PositionalDifference::new(
        span.baseline_start,
        span.baseline.as_str(),
        span.target_start,
        span.target.as_str(),
    )
}

fn load_differences(path: &Path) -> anyhow::Result<Vec<PositionalDifference>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading differences {}", path.display()))?;
    differences_from_json(&text).with_context(|| format!("decoding {}", path.display()))
}

fn cmd_classify(args: &SpanArgs, format: OutputFormat) -> anyhow::Result<String> {
    let diff = classify_span(args);
    match format {
        OutputFormat::Json => Ok(diff.to_json()?),
        OutputFormat::Text => Ok(format!("{}\n{diff}", headline(&diff))),
    }
}

fn cmd_inspect(path: &Path, format: OutputFormat) -> anyhow::Result<String> {
    let diffs = load_differences(path)?;
    match format {
        OutputFormat::Json => Ok(differences_to_json(&diffs)?),
        OutputFormat::Text => {
            let mut out = format!("{} difference(s) in {}", diffs.len(), path.display());
            for diff in &diffs {
                out.push_str("\n\n");
                out.push_str(&diff.to_string());
            }
            Ok(out)
        }
    }
}

fn cmd_check(args: &CheckArgs, format: OutputFormat) -> anyhow::Result<String> {
    let stored = load_differences(&args.file)?;
    let candidate = classify_span(&args.span);
    let tolerated_by = stored.iter().position(|diff| diff.tolerates(&candidate));
    debug!(?tolerated_by, stored = stored.len(), "checked candidate");

    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
            "Candidate": candidate,
            "Tolerated": tolerated_by.is_some(),
            "MatchedIndex": tolerated_by,
        }))?),
        OutputFormat::Text => Ok(match tolerated_by {
            Some(index) => format!(
                "{} tolerated by stored difference #{index}\n{candidate}",
                "✓".green().bold()
            ),
            None => format!(
                "{} no stored difference tolerates this change\n{candidate}",
                "✗".red().bold()
            ),
        }),
    }
}

fn headline(diff: &PositionalDifference) -> String {
    let name = diff.classification().as_str();
    let name = match diff.classification() {
        DifferenceDatatype::String | DifferenceDatatype::TooLong => name.yellow(),
        _ => name.green(),
    };
    format!("{} (leeway {})", name.bold(), diff.location_leeway())
}
