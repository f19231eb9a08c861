use clap::Parser;
use env_logger::Env;
use std::time::{Duration, Instant};

use fleetwatch::cli::Args;
use fleetwatch::exporter::JsonExporter;
use fleetwatch::models::{FleetInfo, FleetReport};
use fleetwatch::reporter::ConsoleReporter;
use fleetwatch::ui::LiveDashboard;
use fleetwatch::{FleetError, FleetSimulator};

fn display_banner(quiet: bool) {
    if quiet {
        return;
    }
    println!();
    println!("    \x1b[38;5;51m███████╗██╗     ███████╗███████╗████████╗\x1b[0m");
    println!("    \x1b[38;5;45m██╔════╝██║     ██╔════╝██╔════╝╚══██╔══╝\x1b[0m");
    println!("    \x1b[38;5;39m█████╗  ██║     █████╗  █████╗     ██║\x1b[0m");
    println!("    \x1b[38;5;33m██╔══╝  ██║     ██╔══╝  ██╔══╝     ██║\x1b[0m");
    println!("    \x1b[38;5;27m██║     ███████╗███████╗███████╗   ██║\x1b[0m");
    println!("    \x1b[38;5;21m╚═╝     ╚══════╝╚══════╝╚══════╝   ╚═╝\x1b[0m  \x1b[1;37mWATCH\x1b[0m");
    println!();
    println!("         \x1b[3;38;5;147mSimulated IoT security operations center\x1b[0m");
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Initialize logging based on verbosity and quiet flags
    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    if args.devices == 0 {
        return Err(FleetError::InvalidArgument(
            "--devices must be at least 1".to_string(),
        )
        .into());
    }

    display_banner(args.quiet);
    log::info!("Fleetwatch starting with args: {:?}", args);

    let started_at = chrono::Utc::now();
    let start = Instant::now();

    let mut sim = FleetSimulator::new(args.seed);
    log::info!("Session seed: {}", sim.seed());
    sim.generate_fleet(args.devices);
    sim.generate_maintenance(args.maintenance_items);

    let dashboard = LiveDashboard::new(args.ticks, args.quiet)?;
    let mut interval = tokio::time::interval(Duration::from_millis(args.interval_ms.max(1)));
    for _ in 0..args.ticks {
        interval.tick().await;
        if let Some(event) = sim.tick() {
            let score = sim
                .devices()
                .iter()
                .find(|d| d.id == event.device_id)
                .map(|d| d.risk_score)
                .unwrap_or(0);
            dashboard.alert(&event, score);
        }
        dashboard.tick(&sim.summary());
    }
    dashboard.finish();

    let summary = sim.summary();
    let reporter = ConsoleReporter::new(args.quiet);
    reporter.print_devices(&args, sim.devices());
    reporter.print_threats(sim.threats());
    reporter.print_maintenance(sim.maintenance());
    reporter.print_summary(&summary, start.elapsed().as_secs_f64());

    if let Some(path) = &args.output {
        let report = FleetReport {
            info: FleetInfo {
                started_at: started_at.to_rfc3339(),
                finished_at: chrono::Utc::now().to_rfc3339(),
                duration_seconds: start.elapsed().as_secs_f64(),
                seed: sim.seed(),
                device_count: sim.devices().len(),
                ticks: args.ticks,
                tick_interval_ms: args.interval_ms,
            },
            summary,
            devices: sim.devices().to_vec(),
            threats: sim.threats().to_vec(),
            maintenance: sim.maintenance().to_vec(),
        };
        JsonExporter::export(&report, path)?;
        if !args.quiet {
            println!("    📄 Fleet report written to {}", path.display());
        }
    }

    Ok(())
}
