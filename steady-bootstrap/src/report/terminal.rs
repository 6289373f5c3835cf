use std::io::{self, Write};

use colored::Colorize;

use super::{EstimateReport, ReportError, Reporter};

/// A reporter that renders the steady-state estimate for humans.
#[derive(Debug, Clone, Default)]
pub struct TerminalReporter {
    /// Whether to use colors in output (defaults to true).
    use_colors: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with default settings.
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a terminal reporter with color output disabled.
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// Format a duration in seconds to a human-readable string.
    fn format_time(secs: f64) -> String {
        let abs = secs.abs();
        if abs >= 1.0 {
            format!("{:.6} s", secs)
        } else if abs >= 1e-3 {
            format!("{:.3} ms", secs * 1e3)
        } else if abs >= 1e-6 {
            format!("{:.3} us", secs * 1e6)
        } else {
            format!("{:.3} ns", secs * 1e9)
        }
    }

    fn render(&self, report: &EstimateReport) -> String {
        let center = Self::format_time(report.estimate.center);
        let half_width = Self::format_time(report.estimate.half_width);

        let center = if self.use_colors {
            center.green().bold().to_string()
        } else {
            center
        };

        let executions = if report.executions == 1 {
            "1 process execution".to_string()
        } else {
            format!("{} process executions", report.executions)
        };

        format!(
            "steady state: {} +/- {} ({}% confidence, {})",
            center,
            half_width,
            report.confidence_level.percent(),
            executions
        )
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &EstimateReport) -> Result<(), ReportError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", self.render(report))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steady_bootstrap_core::SteadyStateEstimate;

    fn make_report(center: f64, half_width: f64) -> EstimateReport {
        EstimateReport {
            estimate: SteadyStateEstimate { center, half_width },
            confidence_level: "0.99".parse().unwrap(),
            executions: 3,
        }
    }

    #[test]
    fn test_format_time_units() {
        assert_eq!(TerminalReporter::format_time(1.5), "1.500000 s");
        assert_eq!(TerminalReporter::format_time(0.0015), "1.500 ms");
        assert_eq!(TerminalReporter::format_time(0.0000015), "1.500 us");
        assert_eq!(TerminalReporter::format_time(0.0000000015), "1.500 ns");
    }

    #[test]
    fn test_render_without_colors() {
        let reporter = TerminalReporter::without_colors();
        let rendered = reporter.render(&make_report(0.002, 0.00001));
        assert_eq!(
            rendered,
            "steady state: 2.000 ms +/- 10.000 us (99% confidence, 3 process executions)"
        );
    }

    #[test]
    fn test_render_singular_execution() {
        let reporter = TerminalReporter::without_colors();
        let mut report = make_report(1.0, 0.0);
        report.executions = 1;
        let rendered = reporter.render(&report);
        assert!(rendered.ends_with("1 process execution)"));
    }

    #[test]
    fn test_report_does_not_fail() {
        let reporter = TerminalReporter::without_colors();
        assert!(reporter.report(&make_report(0.5, 0.01)).is_ok());
    }
}
