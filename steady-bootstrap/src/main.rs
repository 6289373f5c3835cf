use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use steady_bootstrap::{
    bootstrap_steady_perf, BootstrapConfig, Cli, Config, EstimateReport, EstimateRequest,
    EstimateResponse, Reporter, TerminalReporter,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and apply CLI overrides
    let mut config = Config::load_or_default_at(&cli.config)?;
    cli.apply_to_config(&mut config);

    if cli.verbose {
        eprintln!("Configuration: {:?}", config);
    }

    // 1. Read the measurement document (one line of nested JSON)
    let line = read_input(cli.input.as_deref()).context("Failed to read measurement document")?;
    let request =
        EstimateRequest::from_line(&line).context("Failed to parse measurement document")?;

    if cli.verbose {
        eprintln!(
            "Resampling {} executions ({} iterations minimum)...",
            request.executions.len(),
            config.bootstrap.iterations
        );
    }

    // 2. Run the estimator
    let bootstrap = BootstrapConfig {
        target_resamples: config.bootstrap.iterations,
        confidence_level: config.bootstrap.confidence_level,
        seed: cli.seed,
        parallel: !cli.no_parallel,
    };
    let estimate =
        bootstrap_steady_perf(&request.executions, &bootstrap).context("Estimation failed")?;

    // 3. Write the result
    if config.output.report {
        let reporter = TerminalReporter::new();
        reporter.report(&EstimateReport {
            estimate,
            confidence_level: bootstrap.confidence_level,
            executions: request.executions.len(),
        })?;
    } else {
        // The bare wire format: "center,ci" with no trailing newline.
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", EstimateResponse::new(estimate).to_line())?;
        stdout.flush()?;
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read from stdin")?;
            Ok(line)
        }
    }
}
