//! Console rendering of fleet state.
//!
//! Prints the device table (honoring the CLI filters), the threat feed, the
//! maintenance schedule, and the closing summary box.

use console::style;

use crate::cli::{Args, StatusFilter};
use crate::models::{
    DeviceRecord, FleetSummary, MaintenanceAction, MaintenanceItem, Region, RiskLevel, ThreatEvent,
};

pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Apply the CLI's region/status/risk/kind filters to the device list.
    pub fn filter_devices<'a>(args: &Args, devices: &'a [DeviceRecord]) -> Vec<&'a DeviceRecord> {
        let region = args.region.as_deref().map(Region::from_name);
        devices
            .iter()
            .filter(|d| region.map_or(true, |r| d.region == r))
            .filter(|d| match args.status {
                Some(StatusFilter::Online) => d.online,
                Some(StatusFilter::Offline) => !d.online,
                None => true,
            })
            .filter(|d| {
                args.risk_level
                    .map_or(true, |r| d.risk_level == RiskLevel::from(r))
            })
            .filter(|d| {
                args.device_kind
                    .map_or(true, |k| d.detail.kind_label().eq_ignore_ascii_case(k.label()))
            })
            .collect()
    }

    pub fn print_devices(&self, args: &Args, devices: &[DeviceRecord]) {
        if self.quiet {
            return;
        }
        let filtered = Self::filter_devices(args, devices);

        println!();
        println!(
            "{}",
            style(format!(
                "  DEVICES ({} of {} shown)",
                filtered.len(),
                devices.len()
            ))
            .cyan()
            .bold()
        );
        println!(
            "  {:<8} {:<12} {:<14} {:<12} {:>7} {:>7}  {:<8}",
            "ID", "KIND", "IDENTIFIER", "REGION", "POWER", "SCORE", "LEVEL"
        );

        for device in filtered {
            let status = if device.online {
                style("●").green()
            } else {
                style("●").red()
            };
            println!(
                "{} {:<8} {:<12} {:<14} {:<12} {:>6.0}% {:>7}  {}",
                status,
                device.id,
                device.detail.kind_label(),
                device.detail.identifier(),
                device.region.name(),
                device.power_level,
                device.risk_score,
                styled_level(device.risk_level),
            );
        }
    }

    pub fn print_threats(&self, threats: &[ThreatEvent]) {
        if self.quiet || threats.is_empty() {
            return;
        }
        println!();
        println!(
            "{}",
            style(format!("  THREAT FEED ({} events)", threats.len()))
                .red()
                .bold()
        );
        for threat in threats {
            println!(
                "  {:<8} {:<28} {:<10} {}",
                threat.id,
                threat.name,
                styled_level(threat.severity),
                style(&threat.device_id).dim(),
            );
        }
    }

    pub fn print_maintenance(&self, items: &[MaintenanceItem]) {
        if self.quiet || items.is_empty() {
            return;
        }
        println!();
        println!(
            "{}",
            style(format!("  MAINTENANCE FORECAST ({} items)", items.len()))
                .yellow()
                .bold()
        );
        for item in items {
            let action = match item.action {
                MaintenanceAction::Urgent => style(item.action.label()).red().bold(),
                MaintenanceAction::Schedule => style(item.action.label()).yellow(),
                MaintenanceAction::Monitor => style(item.action.label()).dim(),
            };
            println!(
                "  {:<14} {:<18} {:<22} {:>3}% in {:>2}d  {}",
                item.device_name, item.component, item.issue, item.probability, item.days_until,
                action,
            );
        }
    }

    pub fn print_summary(&self, summary: &FleetSummary, elapsed_seconds: f64) {
        if self.quiet {
            return;
        }
        println!();
        println!("{}", style("╔══════════════════════════════════════════════════════════════╗").cyan());
        println!("{}", style("║                       FLEET SUMMARY                          ║").cyan().bold());
        println!("{}", style("╚══════════════════════════════════════════════════════════════╝").cyan());
        println!();
        println!(
            "   {} Online / Offline: {} / {}",
            style("📡").blue(),
            style(summary.online).green().bold(),
            style(summary.offline).red().bold()
        );
        println!(
            "   {} Risk bands: {} low, {} medium, {} high, {} critical",
            style("📊").blue(),
            style(summary.low).green(),
            style(summary.medium).yellow(),
            style(summary.high).color256(208),
            style(summary.critical).red().bold()
        );
        println!(
            "   {} Average risk score: {:.1}",
            style("🎯").blue(),
            style(summary.average_score).white().bold()
        );
        println!(
            "   {} Active threats: {}",
            style("🚨").red(),
            style(summary.active_threats).red().bold()
        );
        println!(
            "   {} Session duration: {:.2}s",
            style("⏱").blue(),
            style(elapsed_seconds).white().bold()
        );
        println!();
    }
}

fn styled_level(level: RiskLevel) -> console::StyledObject<&'static str> {
    match level {
        RiskLevel::Low => style(level.label()).green(),
        RiskLevel::Medium => style(level.label()).yellow(),
        RiskLevel::High => style(level.label()).color256(208),
        RiskLevel::Critical => style(level.label()).red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DeviceKindFilter, RiskLevelFilter};
    use crate::simulator::FleetSimulator;
    use clap::Parser;

    fn args_from(argv: &[&str]) -> Args {
        let mut full = vec!["fleetwatch"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn test_filter_by_status() {
        let mut sim = FleetSimulator::new(Some(2));
        sim.generate_fleet(40);

        let args = args_from(&["--status", "offline"]);
        let filtered = ConsoleReporter::filter_devices(&args, sim.devices());
        assert!(filtered.iter().all(|d| !d.online));

        let args = args_from(&["--status", "online"]);
        let online = ConsoleReporter::filter_devices(&args, sim.devices());
        assert_eq!(online.len() + filtered.len(), 40);
    }

    #[test]
    fn test_filter_by_region_and_kind() {
        let mut sim = FleetSimulator::new(Some(4));
        sim.generate_fleet(60);

        let args = args_from(&["--region", "konya", "--device-kind", "vehicle"]);
        let filtered = ConsoleReporter::filter_devices(&args, sim.devices());
        for device in filtered {
            assert_eq!(device.region, Region::Konya);
            assert!(device.detail.is_vehicle());
        }
    }

    #[test]
    fn test_filter_by_risk_level() {
        let mut sim = FleetSimulator::new(Some(6));
        sim.generate_fleet(60);

        let args = args_from(&["--risk-level", "critical"]);
        let filtered = ConsoleReporter::filter_devices(&args, sim.devices());
        for device in filtered {
            assert_eq!(device.risk_level, RiskLevel::Critical);
        }
    }

    #[test]
    fn test_unknown_region_filter_matches_nothing() {
        let mut sim = FleetSimulator::new(Some(8));
        sim.generate_fleet(30);

        let args = args_from(&["--region", "atlantis"]);
        let filtered = ConsoleReporter::filter_devices(&args, sim.devices());
        assert!(filtered.is_empty(), "no generated device sits in Region::Other");
    }

    #[test]
    fn test_filter_value_enums_cover_levels() {
        assert_eq!(RiskLevel::from(RiskLevelFilter::Low), RiskLevel::Low);
        assert_eq!(RiskLevel::from(RiskLevelFilter::Critical), RiskLevel::Critical);
        assert_eq!(DeviceKindFilter::Vehicle.label(), "Vehicle");
    }
}
