use std::io::BufRead as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use lingrad::{BatchOutput, BatchPolicy, ConvertOptions};

/// Convert CSS linear-gradient() values to -webkit-gradient() syntax.
#[derive(Parser, Debug)]
#[command(name = "lingrad", version)]
struct Cli {
    /// Property values to convert. Reads one value per stdin line when omitted.
    values: Vec<String>,

    /// What to do with a gradient that can't be converted.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Convert the gradients of each value in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Fewest color stops a gradient may have.
    #[arg(long)]
    min_stops: Option<usize>,

    /// JSON file with conversion options. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report per value instead of the converted text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyArg {
    Abort,
    Skip,
    KeepSource,
}

impl From<PolicyArg> for BatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Abort => BatchPolicy::Abort,
            PolicyArg::Skip => BatchPolicy::Skip,
            PolicyArg::KeepSource => BatchPolicy::KeepSource,
        }
    }
}

impl Cli {
    fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    fn options(&self) -> anyhow::Result<ConvertOptions> {
        let mut options = match &self.config {
            Some(path) => ConvertOptions::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => ConvertOptions::default(),
        };

        if let Some(policy) = self.policy {
            options = options.with_policy(policy.into());
        }
        if self.parallel {
            options = options.with_parallel(true);
        }
        if let Some(min_stops) = self.min_stops {
            options = options.with_min_stops(min_stops);
        }
        Ok(options)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let options = cli.options()?;
    tracing::debug!(?options, "resolved options");

    let values = if cli.values.is_empty() {
        read_stdin_values()?
    } else {
        cli.values.clone()
    };

    for (line, value) in values.iter().enumerate() {
        let output = lingrad::convert_batch(value, &options)
            .with_context(|| format!("convert value {}", line + 1))?;

        tracing::info!(
            value = line + 1,
            converted = output.converted,
            failed = output.failures.len(),
            "converted value"
        );

        if cli.json {
            println!("{}", json_report(value, &output));
        } else {
            println!("{}", output.value);
        }
    }

    Ok(())
}

fn read_stdin_values() -> anyhow::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }
    Ok(values)
}

fn json_report(input: &str, output: &BatchOutput) -> serde_json::Value {
    let failures: Vec<serde_json::Value> = output
        .failures
        .iter()
        .map(|failure| {
            serde_json::json!({
                "index": failure.index,
                "segment": failure.segment,
                "kind": failure.error.kind().as_str(),
                "message": failure.error.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "input": input,
        "output": output.value,
        "converted": output.converted,
        "failures": failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lingrad").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["--policy", "keep-source", "--parallel", "--min-stops", "3", "x"]);
        let options = cli.options().unwrap();
        assert_eq!(options.policy, BatchPolicy::KeepSource);
        assert!(options.parallel);
        assert_eq!(options.min_stops, 3);
        assert_eq!(cli.values, ["x"]);
    }

    #[test]
    fn test_defaults_without_flags() {
        let options = parse(&[]).options().unwrap();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/lingrad.json"]);
        assert!(cli.options().is_err());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&[]).log_level(), tracing::Level::WARN);
        assert_eq!(parse(&["-v"]).log_level(), tracing::Level::INFO);
        assert_eq!(parse(&["-vvv"]).log_level(), tracing::Level::TRACE);
        assert_eq!(parse(&["-q"]).log_level(), tracing::Level::ERROR);
        assert!(Cli::try_parse_from(["lingrad", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["lingrad", "--policy", "retry"]).is_err());
    }

    #[test]
    fn test_json_report() {
        let options = ConvertOptions::default().with_policy(BatchPolicy::Skip);
        let output = lingrad::convert_batch("red, linear-gradient(red, blue)", &options).unwrap();
        let report = json_report("red, linear-gradient(red, blue)", &output);

        assert_eq!(
            report["output"],
            "-webkit-gradient(linear, 0 0, 0 100%, from(red), to(blue))"
        );
        assert_eq!(report["converted"], 1);
        assert_eq!(report["failures"][0]["index"], 0);
        assert_eq!(report["failures"][0]["kind"], "not-recognized");
    }
}
