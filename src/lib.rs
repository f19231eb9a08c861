//! Fleetwatch
//!
//! A simulated security-operations fleet for automotive and industrial IoT
//! devices. Synthetic telemetry is generated client-side, every device is
//! scored by a pure composite risk function, and the session is rendered to
//! the terminal and optionally exported as JSON.

pub mod cli;
pub mod errors;
pub mod exporter;
pub mod models;
pub mod reporter;
pub mod risk;
pub mod simulator;
pub mod ui;

pub use errors::{FleetError, FleetResult};
pub use models::{DeviceProfile, DeviceSnapshot, Region, RiskLevel, RiskTier, RiskVerdict};
pub use risk::calculate_risk_score;
pub use simulator::FleetSimulator;
