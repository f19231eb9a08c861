//! Live session display: a tick progress bar plus high-severity alerts
//! printed above it.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::errors::FleetResult;
use crate::models::{FleetSummary, RiskLevel, ThreatEvent};

pub struct LiveDashboard {
    tick_bar: ProgressBar,
}

impl LiveDashboard {
    pub fn new(total_ticks: u64, quiet: bool) -> FleetResult<Self> {
        let tick_bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total_ticks)
        };

        let bar_style = ProgressStyle::with_template(
            "{prefix} {spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ticks {msg}",
        )
        .map_err(|e| crate::errors::FleetError::external("progress template", e.to_string()))?
        .progress_chars("█▉▊▋▌▍▎▏  ");

        tick_bar.set_style(bar_style);
        tick_bar.set_prefix(style("🛰 FLEET").cyan().bold().to_string());

        Ok(Self { tick_bar })
    }

    /// Advance the bar one tick and refresh the live counters.
    pub fn tick(&self, summary: &FleetSummary) {
        self.tick_bar.set_message(format!(
            "| {} | {} | {}",
            style(format!("{} online", summary.online)).green(),
            style(format!("{} critical", summary.critical)).red().bold(),
            style(format!("avg {:.0}", summary.average_score)).yellow(),
        ));
        self.tick_bar.inc(1);
    }

    /// Print a threat alert above the progress bar. Only high and critical
    /// severities interrupt the display.
    pub fn alert(&self, event: &ThreatEvent, device_score: u8) {
        if event.severity < RiskLevel::High {
            log::debug!("Suppressed low-severity alert: {}", event.name);
            return;
        }
        let line = format!(
            "🚨 {} {} on {} (risk now {})",
            style(event.severity.label()).red().bold(),
            style(&event.name).yellow(),
            style(&event.device_id).dim(),
            style(device_score).red().bold(),
        );
        self.tick_bar.println(line);
    }

    pub fn finish(&self) {
        self.tick_bar
            .finish_with_message(style("✅ Session complete").green().bold().to_string());
    }
}
