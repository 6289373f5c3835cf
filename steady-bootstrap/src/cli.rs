//! Command-line interface for steady-bootstrap.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;
use steady_bootstrap_core::ConfidenceLevel;

#[derive(Debug, Parser)]
#[command(name = "steady-bootstrap")]
#[command(about = "Bootstrap confidence intervals for steady-state benchmark timings")]
#[command(version)]
pub struct Cli {
    /// Two-sided confidence level as a decimal string, e.g. 0.99
    #[arg(long)]
    pub confidence_level: Option<ConfidenceLevel>,

    /// Minimum number of bootstrap resamples
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Fix the RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read the measurement document from a file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Print a human-readable report instead of the bare "center,ci" line
    #[arg(long)]
    pub report: bool,

    /// Generate resamples on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Path to config file
    #[arg(long, default_value = ".steady-bootstrap.toml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    /// Only non-None optional values will override the config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(confidence_level) = self.confidence_level {
            config.bootstrap.confidence_level = confidence_level;
        }

        if let Some(iterations) = self.iterations {
            config.bootstrap.iterations = iterations;
        }

        if self.report {
            config.output.report = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_config_with_overrides() {
        let cli = Cli::parse_from([
            "steady-bootstrap",
            "--confidence-level",
            "0.999",
            "--iterations",
            "50000",
            "--report",
        ]);

        let mut config = Config::default();
        cli.apply_to_config(&mut config);

        assert_eq!(config.bootstrap.confidence_level.to_string(), "0.999");
        assert_eq!(config.bootstrap.iterations, 50_000);
        assert!(config.output.report);
    }

    #[test]
    fn test_apply_to_config_without_overrides() {
        let cli = Cli::parse_from(["steady-bootstrap"]);

        let mut config = Config::default();
        let original_level = config.bootstrap.confidence_level;
        let original_iterations = config.bootstrap.iterations;

        cli.apply_to_config(&mut config);

        // Values should remain unchanged
        assert_eq!(config.bootstrap.confidence_level, original_level);
        assert_eq!(config.bootstrap.iterations, original_iterations);
        assert!(!config.output.report);
    }

    /// A report = true config value is not un-set by the absent flag.
    #[test]
    fn test_report_flag_never_disables() {
        let cli = Cli::parse_from(["steady-bootstrap"]);

        let mut config = Config::default();
        config.output.report = true;
        cli.apply_to_config(&mut config);

        assert!(config.output.report);
    }

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::parse_from(["steady-bootstrap"]);

        assert_eq!(cli.confidence_level, None);
        assert_eq!(cli.iterations, None);
        assert_eq!(cli.seed, None);
        assert!(cli.input.is_none());
        assert!(!cli.report);
        assert!(!cli.no_parallel);
        assert_eq!(cli.config, PathBuf::from(".steady-bootstrap.toml"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_full() {
        let cli = Cli::parse_from([
            "steady-bootstrap",
            "--confidence-level",
            "0.95",
            "--iterations",
            "10000",
            "--seed",
            "42",
            "--input",
            "timings.json",
            "--no-parallel",
            "--config",
            "custom.toml",
            "--verbose",
        ]);

        assert_eq!(
            cli.confidence_level,
            Some("0.95".parse::<ConfidenceLevel>().unwrap())
        );
        assert_eq!(cli.iterations, Some(10_000));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.input, Some(PathBuf::from("timings.json")));
        assert!(cli.no_parallel);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(cli.verbose);
    }

    /// Malformed confidence levels are rejected by the parser, not at
    /// estimation time.
    #[test]
    fn test_cli_rejects_bad_confidence_level() {
        let result = Cli::try_parse_from(["steady-bootstrap", "--confidence-level", "1.5"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["steady-bootstrap", "--confidence-level", "abc"]);
        assert!(result.is_err());
    }
}
