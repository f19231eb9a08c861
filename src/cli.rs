use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::models::RiskLevel;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fleetwatch",
    about = "Fleetwatch - Simulated IoT security operations fleet with live risk scoring",
    version
)]
pub struct Args {
    /// Number of synthetic devices in the fleet
    #[arg(short, long, default_value = "40")]
    pub devices: usize,

    /// Number of simulated telemetry ticks to run
    #[arg(short, long, default_value = "30")]
    pub ticks: u64,

    /// Interval between ticks in milliseconds
    #[arg(long, default_value = "1000")]
    pub interval_ms: u64,

    /// RNG seed for a reproducible session (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of predictive maintenance items to forecast
    #[arg(long, default_value = "12")]
    pub maintenance_items: usize,

    /// Only show devices in this region in the final table
    #[arg(long)]
    pub region: Option<String>,

    /// Only show devices with this connectivity status
    #[arg(long)]
    pub status: Option<StatusFilter>,

    /// Only show devices at this risk level
    #[arg(long)]
    pub risk_level: Option<RiskLevelFilter>,

    /// Only show devices of this kind
    #[arg(long)]
    pub device_kind: Option<DeviceKindFilter>,

    /// Write the full fleet report to a JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging of all operations
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the live dashboard and use quiet output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum StatusFilter {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum RiskLevelFilter {
    Low,
    Medium,
    High,
    Critical,
}

impl From<RiskLevelFilter> for RiskLevel {
    fn from(filter: RiskLevelFilter) -> Self {
        match filter {
            RiskLevelFilter::Low => RiskLevel::Low,
            RiskLevelFilter::Medium => RiskLevel::Medium,
            RiskLevelFilter::High => RiskLevel::High,
            RiskLevelFilter::Critical => RiskLevel::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum DeviceKindFilter {
    Vehicle,
    Robot,
    Controller,
    Equipment,
}

impl DeviceKindFilter {
    pub fn label(self) -> &'static str {
        match self {
            DeviceKindFilter::Vehicle => "Vehicle",
            DeviceKindFilter::Robot => "Robot",
            DeviceKindFilter::Controller => "Controller",
            DeviceKindFilter::Equipment => "Equipment",
        }
    }
}
