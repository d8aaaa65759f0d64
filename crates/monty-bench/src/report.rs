use thiserror::Error;

use crate::experiment::TrialReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serializing report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the strategy × outcome proportion table. Presentation only; the
/// numbers come straight from the aggregated report.
pub fn render_table(report: &TrialReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Strategy outcomes over {} round{} (seed {}):\n\n",
        report.trials,
        if report.trials == 1 { "" } else { "s" },
        report.seed
    ));

    if report.is_empty() {
        out.push_str("no data (0 rounds played)\n");
        return out;
    }

    out.push_str("| Strategy | WIN  | LOSE | 95% CI on win rate |\n");
    out.push_str("|----------|------|------|--------------------|\n");
    for strategy in &report.strategies {
        let win = strategy.win_rate.unwrap_or(0.0);
        let (ci_low, ci_high) = strategy.ci95.unwrap_or((0.0, 0.0));
        out.push_str(&format!(
            "| {name:<8} | {win:.2} | {lose:.2} | [{ci_low:.3}, {ci_high:.3}] |\n",
            name = strategy.strategy.to_string(),
            lose = 1.0 - win,
        ));
    }

    out
}

pub fn to_json(report: &TrialReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
