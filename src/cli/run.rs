//! CLI command handler for running scenarios
//!
//! Plays a scenario and prints each category's ledger report, the optional
//! summary table, and the spend chart.

use std::path::PathBuf;

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::{LedgerPaths, Settings};
use crate::display::format_category_summary;
use crate::error::{LedgerError, LedgerResult};
use crate::services::{Scenario, ScenarioOutcome, ScenarioRunner};

/// Output options shared by `run` and `demo`
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Print the category summary table
    #[arg(long)]
    pub summary: bool,

    /// Skip the per-category ledger reports
    #[arg(long)]
    pub no_reports: bool,

    /// Skip the spend chart
    #[arg(long)]
    pub no_chart: bool,

    /// Append every operation to the audit log
    #[arg(long)]
    pub audit: bool,
}

/// Arguments of the `run` command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scenario file (YAML, or JSON with a .json extension)
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Handle the run command
pub fn handle_run_command(
    paths: &LedgerPaths,
    settings: &Settings,
    args: RunArgs,
) -> LedgerResult<()> {
    let scenario = Scenario::from_path(&args.file)?;
    run_scenario(paths, settings, &scenario, &args.output)
}

/// Handle the demo command
pub fn handle_demo_command(
    paths: &LedgerPaths,
    settings: &Settings,
    output: OutputOptions,
) -> LedgerResult<()> {
    run_scenario(paths, settings, &Scenario::demo(), &output)
}

fn run_scenario(
    paths: &LedgerPaths,
    settings: &Settings,
    scenario: &Scenario,
    output: &OutputOptions,
) -> LedgerResult<()> {
    let outcome = if output.audit || settings.audit_enabled {
        paths.ensure_directories()?;
        let logger = AuditLogger::new(paths.audit_log());
        ScenarioRunner::with_audit(&logger).run(scenario)?
    } else {
        ScenarioRunner::new().run(scenario)?
    };

    print!("{}", format_outcome(&outcome, settings, output)?);
    Ok(())
}

/// Render everything the run command prints
pub fn format_outcome(
    outcome: &ScenarioOutcome,
    settings: &Settings,
    output: &OutputOptions,
) -> LedgerResult<String> {
    let mut sections = Vec::new();

    if !output.no_reports {
        sections.extend(outcome.reports());
    }

    let rejected: Vec<String> = outcome
        .rejected()
        .map(|r| {
            let mut line = format!("  operation {}: {}", r.index + 1, r.step);
            if let Some(reason) = &r.reason {
                line.push_str(&format!(": {}", reason));
            }
            line
        })
        .collect();
    if !rejected.is_empty() {
        sections.push(format!("Rejected operations:\n{}", rejected.join("\n")));
    }

    if output.summary || settings.show_summary {
        sections.push(
            format_category_summary(
                &outcome.categories,
                outcome.totals.get(),
                &settings.currency_symbol,
            )
            .trim_end()
            .to_string(),
        );
    }

    if !output.no_chart {
        match outcome.chart() {
            Ok(chart) => sections.push(chart),
            Err(e @ LedgerError::NoWithdrawals) => sections.push(e.to_string()),
            Err(e) => return Err(e),
        }
    }

    let mut text = sections.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outcome_sections() {
        let outcome = ScenarioRunner::new().run(&Scenario::demo()).unwrap();
        let text = format_outcome(&outcome, &Settings::default(), &OutputOptions::default())
            .unwrap();

        assert!(text.starts_with("*************Food*************\n"));
        assert!(text.contains("Total: 923.96\n\n***********Clothing***********"));
        assert!(text.contains(
            "Rejected operations:\n  operation 6: withdraw 100.00 from Clothing: \
             Insufficient funds in category 'Clothing': need 100.00, have 24.45"
        ));
        assert!(text.contains("Percentage spent by category\n100|"));
        assert!(!text.contains("Total withdrawn"));
    }

    #[test]
    fn test_format_outcome_chart_only() {
        let outcome = ScenarioRunner::new().run(&Scenario::demo()).unwrap();
        let output = OutputOptions {
            no_reports: true,
            ..OutputOptions::default()
        };

        let text = format_outcome(&outcome, &Settings::default(), &output).unwrap();
        assert!(!text.contains("*****"));
        assert!(text.ends_with("        g     \n"));
    }

    #[test]
    fn test_format_outcome_without_withdrawals_keeps_reports() {
        let scenario = Scenario::from_yaml_str(
            "categories: [Food]\noperations:\n  - op: deposit\n    category: Food\n    amount: 900\n",
        )
        .unwrap();
        let outcome = ScenarioRunner::new().run(&scenario).unwrap();
        let settings = Settings {
            show_summary: true,
            ..Settings::default()
        };

        let text = format_outcome(&outcome, &settings, &OutputOptions::default()).unwrap();
        assert!(text.starts_with("*************Food*************\n"));
        assert!(text.contains("Total: 900.0"));
        assert!(text.contains("Total withdrawn: $0.00"));
        assert!(text.ends_with(
            "\n\nCannot chart spending: no withdrawals have been recorded\n"
        ));
    }

    #[test]
    fn test_format_outcome_with_summary() {
        let outcome = ScenarioRunner::new().run(&Scenario::demo()).unwrap();
        let settings = Settings {
            show_summary: true,
            ..Settings::default()
        };
        let output = OutputOptions {
            no_chart: true,
            no_reports: true,
            ..OutputOptions::default()
        };

        let text = format_outcome(&outcome, &settings, &output).unwrap();
        assert!(text.contains("Total withdrawn: $116.59"));
        assert!(!text.contains("Percentage spent"));
    }
}
