//! Synthetic fleet simulation.
//!
//! Fabricates a fleet of vehicles and industrial assets, injects threat
//! events from per-kind catalogs, and drifts telemetry on every tick the way
//! live devices would. All randomness goes through one seedable RNG so runs
//! are reproducible with `--seed`.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;

use crate::models::{
    AssetKind, DeviceDetail, DeviceRecord, FleetSummary, MaintenanceAction, MaintenanceItem,
    Region, RiskLevel, RiskTier, ThreatEvent,
};
use crate::risk::calculate_risk_score;

const VEHICLE_BRANDS: &[&str] = &[
    "Mercedes", "BMW", "Audi", "Volkswagen", "Ford", "Toyota", "Renault", "Fiat",
];
const VEHICLE_MODELS: &[&str] = &[
    "Vito", "Sprinter", "320d", "A4", "Passat", "Transit", "Corolla", "Megane",
];
const ROBOT_BRANDS: &[&str] = &[
    "ABB", "KUKA", "Fanuc", "Yaskawa", "Universal Robots", "Kawasaki",
];
const ROBOT_MODELS: &[&str] = &[
    "IRB 6700", "KR QUANTEC", "M-20iD", "GP180", "UR10e", "RS080N",
];
const CONTROLLER_BRANDS: &[&str] = &[
    "Siemens", "Allen-Bradley", "Schneider", "Mitsubishi", "Dell", "HP",
];
const CONTROLLER_MODELS: &[&str] = &[
    "S7-1500", "ControlLogix", "Modicon M580", "MELSEC", "OptiPlex", "ProDesk",
];
const EQUIPMENT_BRANDS: &[&str] = &["Haas", "DMG Mori", "Mazak", "Trumpf", "Bosch", "Schneider"];
const EQUIPMENT_MODELS: &[&str] = &[
    "VF-2", "DMU 50", "Integrex i-200", "TruLaser", "Rexroth", "TeSys",
];

/// Letters legal on Turkish license plates.
const PLATE_LETTERS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'U', 'V',
    'Y', 'Z',
];

struct ThreatSpec {
    name: &'static str,
    severities: &'static [RiskLevel],
}

const VEHICLE_THREATS: &[ThreatSpec] = &[
    ThreatSpec {
        name: "CAN Flood",
        severities: &[RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical],
    },
    ThreatSpec {
        name: "GPS Spoofing",
        severities: &[RiskLevel::Medium, RiskLevel::High],
    },
    ThreatSpec {
        name: "OTA Anomaly",
        severities: &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High],
    },
    ThreatSpec {
        name: "DoS Attack",
        severities: &[RiskLevel::High, RiskLevel::Critical],
    },
    ThreatSpec {
        name: "IDS Alert",
        severities: &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High],
    },
];

const ROBOT_THREATS: &[ThreatSpec] = &[
    ThreatSpec {
        name: "PLC Injection",
        severities: &[RiskLevel::High, RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Motion Control Hijack",
        severities: &[RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Modbus Attack",
        severities: &[RiskLevel::Medium, RiskLevel::High],
    },
    ThreatSpec {
        name: "Safety System Override",
        severities: &[RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Firmware Tampering",
        severities: &[RiskLevel::High, RiskLevel::Critical],
    },
];

const CONTROLLER_THREATS: &[ThreatSpec] = &[
    ThreatSpec {
        name: "Ransomware",
        severities: &[RiskLevel::Critical],
    },
    ThreatSpec {
        name: "SQL Injection",
        severities: &[RiskLevel::High, RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Zero-Day Exploit",
        severities: &[RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Brute Force",
        severities: &[RiskLevel::Medium, RiskLevel::High],
    },
    ThreatSpec {
        name: "Malware Detection",
        severities: &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High],
    },
];

const EQUIPMENT_THREATS: &[ThreatSpec] = &[
    ThreatSpec {
        name: "SCADA Attack",
        severities: &[RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Sensor Manipulation",
        severities: &[RiskLevel::High, RiskLevel::Critical],
    },
    ThreatSpec {
        name: "HMI Compromise",
        severities: &[RiskLevel::Medium, RiskLevel::High],
    },
    ThreatSpec {
        name: "Industrial Protocol Abuse",
        severities: &[RiskLevel::High, RiskLevel::Critical],
    },
    ThreatSpec {
        name: "Operational Disruption",
        severities: &[RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical],
    },
];

struct ComponentSpec {
    name: &'static str,
    issues: &'static [&'static str],
}

const VEHICLE_COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec {
        name: "Battery pack",
        issues: &["Capacity fade", "Charging faults", "Cell imbalance"],
    },
    ComponentSpec {
        name: "Brake system",
        issues: &["Pad wear", "Disc aging", "ABS sensor fault"],
    },
    ComponentSpec {
        name: "Engine sensors",
        issues: &["Oxygen sensor", "MAF sensor", "Crankshaft sensor"],
    },
    ComponentSpec {
        name: "Suspension",
        issues: &["Damper leak", "Tie rod end", "Control arm bushing"],
    },
    ComponentSpec {
        name: "Transmission",
        issues: &["Gearbox oil", "Clutch disc", "Gearbox wear"],
    },
];

const ROBOT_COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec {
        name: "Servo drive",
        issues: &["Overheating", "Power fluctuation", "Servo motor failure"],
    },
    ComponentSpec {
        name: "Joints",
        issues: &["Bearing wear", "Gear train wear", "Lubrication system"],
    },
    ComponentSpec {
        name: "Sensors",
        issues: &["Position sensor", "Torque sensor", "Vision system"],
    },
    ComponentSpec {
        name: "Control unit",
        issues: &["PLC fault", "Communication error", "Firmware update due"],
    },
];

const CONTROLLER_COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec {
        name: "Disk",
        issues: &["SMART warnings", "Slow read/write", "Bad sectors"],
    },
    ComponentSpec {
        name: "Memory",
        issues: &["RAM errors", "Memory leak", "Insufficient capacity"],
    },
    ComponentSpec {
        name: "Processor",
        issues: &["Overheating", "Sustained high usage", "Throttling"],
    },
    ComponentSpec {
        name: "Network",
        issues: &["Link instability", "Slow transfer", "Packet loss"],
    },
];

const EQUIPMENT_COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec {
        name: "Hydraulic system",
        issues: &["Oil leak", "Pump failure", "Pressure drop"],
    },
    ComponentSpec {
        name: "Conveyor",
        issues: &["Belt wear", "Motor failure", "Alignment drift"],
    },
    ComponentSpec {
        name: "Sensors",
        issues: &["Calibration due", "Signal loss", "Sensitivity drop"],
    },
    ComponentSpec {
        name: "Control panel",
        issues: &["HMI fault", "Button wear", "Display fault"],
    },
];

/// Owns the simulated fleet state and all mutation paths.
///
/// The scorer itself stays pure: every rescore builds a fresh
/// [`crate::models::DeviceSnapshot`] from the stored record plus the
/// device's current attributed threat count.
pub struct FleetSimulator {
    rng: StdRng,
    seed: u64,
    devices: Vec<DeviceRecord>,
    threats: Vec<ThreatEvent>,
    maintenance: Vec<MaintenanceItem>,
    threat_seq: usize,
}

impl FleetSimulator {
    /// Create a simulator; without an explicit seed a random one is drawn
    /// (and still recorded so the run can be replayed).
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            devices: Vec::new(),
            threats: Vec::new(),
            maintenance: Vec::new(),
            threat_seq: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    pub fn threats(&self) -> &[ThreatEvent] {
        &self.threats
    }

    pub fn maintenance(&self) -> &[MaintenanceItem] {
        &self.maintenance
    }

    /// Fabricate `count` devices, each with a small initial threat history,
    /// and score them.
    pub fn generate_fleet(&mut self, count: usize) {
        log::info!("Generating synthetic fleet of {} devices", count);
        self.devices.clear();
        self.threats.clear();

        for i in 0..count {
            let device = self.generate_device(i);
            let initial_threats = self.rng.gen_range(0..3);
            for _ in 0..initial_threats {
                self.push_threat_for(&device);
            }
            self.devices.push(device);
        }
        self.rescore_all();
    }

    fn generate_device(&mut self, index: usize) -> DeviceRecord {
        let region = *Region::ALL.choose(&mut self.rng).unwrap_or(&Region::Other);
        let online = self.rng.gen_bool(0.85);
        let power_level = self.rng.gen_range(0..100) as f64;

        let (brand, model, detail) = match self.rng.gen_range(0..4u8) {
            0 => {
                let plate = self.generate_plate(region);
                let speed_kmh = self.rng.gen_range(0..120) as f64;
                (
                    pick(&mut self.rng, VEHICLE_BRANDS),
                    pick(&mut self.rng, VEHICLE_MODELS),
                    DeviceDetail::Vehicle { plate, speed_kmh },
                )
            }
            1 => (
                pick(&mut self.rng, ROBOT_BRANDS),
                pick(&mut self.rng, ROBOT_MODELS),
                DeviceDetail::Robot {
                    serial: Self::generate_serial(AssetKind::Robot, region, 1000 + index),
                    load_pct: self.rng.gen_range(0..100) as f64,
                    environment: *[RiskTier::Low, RiskTier::Medium, RiskTier::High]
                        .choose(&mut self.rng)
                        .unwrap_or(&RiskTier::Low),
                    temperature_c: (20 + self.rng.gen_range(0..60)) as f64,
                    cycle_count: self.rng.gen_range(0..100_000),
                },
            ),
            2 => (
                pick(&mut self.rng, CONTROLLER_BRANDS),
                pick(&mut self.rng, CONTROLLER_MODELS),
                DeviceDetail::Controller {
                    serial: Self::generate_serial(AssetKind::Controller, region, 2000 + index),
                    load_pct: self.rng.gen_range(0..100) as f64,
                    // Server rooms never hit the harsh outdoor tier
                    environment: *[RiskTier::Low, RiskTier::Medium]
                        .choose(&mut self.rng)
                        .unwrap_or(&RiskTier::Low),
                    cpu_pct: self.rng.gen_range(0..100) as f64,
                    memory_pct: self.rng.gen_range(0..100) as f64,
                },
            ),
            _ => (
                pick(&mut self.rng, EQUIPMENT_BRANDS),
                pick(&mut self.rng, EQUIPMENT_MODELS),
                DeviceDetail::Equipment {
                    serial: Self::generate_serial(AssetKind::Equipment, region, 3000 + index),
                    load_pct: self.rng.gen_range(0..100) as f64,
                    environment: *[RiskTier::Low, RiskTier::Medium, RiskTier::High]
                        .choose(&mut self.rng)
                        .unwrap_or(&RiskTier::Low),
                    operating_hours: self.rng.gen_range(0..50_000),
                    efficiency_pct: (60 + self.rng.gen_range(0..40)) as f64,
                },
            ),
        };

        DeviceRecord {
            id: format!("dev_{}", index + 1),
            brand,
            model,
            region,
            lat: 38.0 + self.rng.gen::<f64>() * 4.0,
            lon: 27.0 + self.rng.gen::<f64>() * 18.0,
            online,
            power_level,
            detail,
            last_update: Utc::now(),
            risk_score: 0,
            risk_level: RiskLevel::Low,
        }
    }

    fn generate_plate(&mut self, region: Region) -> String {
        let mut letters = String::new();
        for _ in 0..3 {
            letters.push(*PLATE_LETTERS.choose(&mut self.rng).unwrap_or(&'A'));
        }
        format!(
            "{} {} {}",
            region.plate_code(),
            letters,
            self.rng.gen_range(100..1000)
        )
    }

    fn generate_serial(kind: AssetKind, region: Region, number: usize) -> String {
        let region_tag: String = region.name().chars().take(3).collect();
        format!(
            "{}-{}-{}",
            kind.serial_prefix(),
            region_tag.to_uppercase(),
            number
        )
    }

    /// Number of recorded threats attributed to a device.
    pub fn threat_count_for(&self, device_id: &str) -> u32 {
        self.threats
            .iter()
            .filter(|t| t.device_id == device_id)
            .count() as u32
    }

    fn push_threat_for(&mut self, device: &DeviceRecord) -> ThreatEvent {
        let catalog = match &device.detail {
            DeviceDetail::Vehicle { .. } => VEHICLE_THREATS,
            DeviceDetail::Robot { .. } => ROBOT_THREATS,
            DeviceDetail::Controller { .. } => CONTROLLER_THREATS,
            DeviceDetail::Equipment { .. } => EQUIPMENT_THREATS,
        };
        let spec = &catalog[self.rng.gen_range(0..catalog.len())];
        let severity = *spec.severities.choose(&mut self.rng).unwrap_or(&RiskLevel::Low);

        self.threat_seq += 1;
        let event = ThreatEvent {
            id: format!("thr_{}", self.threat_seq),
            device_id: device.id.clone(),
            name: spec.name.to_string(),
            severity,
            detected_at: Utc::now(),
            acknowledged: false,
        };
        log::debug!(
            "Threat injected: {} [{}] on {}",
            event.name,
            event.severity,
            event.device_id
        );
        self.threats.push(event.clone());
        event
    }

    /// Attribute a new threat to a random device and rescore it.
    /// Returns `None` on an empty fleet.
    pub fn inject_threat(&mut self) -> Option<ThreatEvent> {
        if self.devices.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.devices.len());
        let device = self.devices[index].clone();
        let event = self.push_threat_for(&device);

        let threat_count = self.threat_count_for(&device.id);
        let verdict = calculate_risk_score(&self.devices[index].snapshot(), threat_count);
        self.devices[index].risk_score = verdict.score;
        self.devices[index].risk_level = verdict.level;
        Some(event)
    }

    /// Mark a threat event as acknowledged by the operator. Acknowledged
    /// threats drop out of the active count but stay attributed to their
    /// device for scoring. Returns false for an unknown id.
    pub fn acknowledge_threat(&mut self, threat_id: &str) -> bool {
        match self.threats.iter_mut().find(|t| t.id == threat_id) {
            Some(threat) => {
                threat.acknowledged = true;
                true
            }
            None => false,
        }
    }

    /// One simulated telemetry interval: online devices drift, a threat may
    /// fire, and the whole fleet is rescored.
    ///
    /// Returns the threat event when one fired this tick.
    pub fn tick(&mut self) -> Option<ThreatEvent> {
        let now = Utc::now();
        for device in &mut self.devices {
            if !device.online {
                continue;
            }
            device.lat += (self.rng.gen::<f64>() - 0.5) * 0.01;
            device.lon += (self.rng.gen::<f64>() - 0.5) * 0.01;
            device.power_level =
                (device.power_level + (self.rng.gen::<f64>() - 0.5) * 2.0).clamp(0.0, 100.0);

            match &mut device.detail {
                DeviceDetail::Vehicle { speed_kmh, .. } => {
                    *speed_kmh = (*speed_kmh + (self.rng.gen::<f64>() - 0.5) * 10.0).max(0.0);
                }
                DeviceDetail::Robot {
                    load_pct,
                    temperature_c,
                    ..
                } => {
                    *load_pct = (*load_pct + (self.rng.gen::<f64>() - 0.5) * 5.0).clamp(0.0, 100.0);
                    *temperature_c =
                        (*temperature_c + (self.rng.gen::<f64>() - 0.5) * 2.0).clamp(20.0, 80.0);
                }
                DeviceDetail::Controller {
                    load_pct,
                    cpu_pct,
                    memory_pct,
                    ..
                } => {
                    *load_pct = (*load_pct + (self.rng.gen::<f64>() - 0.5) * 5.0).clamp(0.0, 100.0);
                    *cpu_pct = (*cpu_pct + (self.rng.gen::<f64>() - 0.5) * 10.0).clamp(0.0, 100.0);
                    *memory_pct =
                        (*memory_pct + (self.rng.gen::<f64>() - 0.5) * 10.0).clamp(0.0, 100.0);
                }
                DeviceDetail::Equipment { load_pct, .. } => {
                    *load_pct = (*load_pct + (self.rng.gen::<f64>() - 0.5) * 5.0).clamp(0.0, 100.0);
                }
            }
            device.last_update = now;
        }

        let fired = if self.rng.gen_bool(0.2) {
            self.inject_threat()
        } else {
            None
        };

        self.rescore_all();
        fired
    }

    /// Rescore every device against its current snapshot and threat count.
    /// Calls are independent, so the batch runs in parallel.
    pub fn rescore_all(&mut self) {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for threat in &self.threats {
            *counts.entry(threat.device_id.as_str()).or_insert(0) += 1;
        }

        let devices = &mut self.devices;
        devices.par_iter_mut().for_each(|device| {
            let threat_count = counts.get(device.id.as_str()).copied().unwrap_or(0);
            let verdict = calculate_risk_score(&device.snapshot(), threat_count);
            device.risk_score = verdict.score;
            device.risk_level = verdict.level;
        });
    }

    /// Sample predicted component failures across the fleet.
    pub fn generate_maintenance(&mut self, count: usize) {
        self.maintenance.clear();
        if self.devices.is_empty() {
            return;
        }

        for i in 0..count {
            let device = self.devices[self.rng.gen_range(0..self.devices.len())].clone();
            let components = match &device.detail {
                DeviceDetail::Vehicle { .. } => VEHICLE_COMPONENTS,
                DeviceDetail::Robot { .. } => ROBOT_COMPONENTS,
                DeviceDetail::Controller { .. } => CONTROLLER_COMPONENTS,
                DeviceDetail::Equipment { .. } => EQUIPMENT_COMPONENTS,
            };
            let component = &components[self.rng.gen_range(0..components.len())];
            let probability = 50 + self.rng.gen_range(0..45u8);

            self.maintenance.push(MaintenanceItem {
                id: format!("maint_{}", i + 1),
                device_id: device.id.clone(),
                device_name: device.detail.identifier().to_string(),
                component: component.name.to_string(),
                issue: pick(&mut self.rng, component.issues),
                probability,
                days_until: 5 + self.rng.gen_range(0..30),
                action: MaintenanceAction::from_probability(probability),
            });
        }
        self.maintenance
            .sort_by(|a, b| b.probability.cmp(&a.probability));
    }

    /// Aggregate statistics over the current fleet state.
    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary::default();
        let mut total: u64 = 0;
        for device in &self.devices {
            if device.online {
                summary.online += 1;
            } else {
                summary.offline += 1;
            }
            match device.risk_level {
                RiskLevel::Low => summary.low += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Critical => summary.critical += 1,
            }
            total += u64::from(device.risk_score);
        }
        if !self.devices.is_empty() {
            summary.average_score = total as f64 / self.devices.len() as f64;
        }
        summary.active_threats = self.threats.iter().filter(|t| !t.acknowledged).count();
        summary
    }
}

fn pick(rng: &mut StdRng, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or("Unknown").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviceProfile;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = FleetSimulator::new(Some(7));
        let mut b = FleetSimulator::new(Some(7));
        a.generate_fleet(20);
        b.generate_fleet(20);

        assert_eq!(a.devices().len(), b.devices().len());
        for (da, db) in a.devices().iter().zip(b.devices()) {
            assert_eq!(da.id, db.id);
            assert_eq!(da.region, db.region);
            assert_eq!(da.risk_score, db.risk_score);
            assert_eq!(da.detail.identifier(), db.detail.identifier());
        }

        a.tick();
        b.tick();
        for (da, db) in a.devices().iter().zip(b.devices()) {
            assert_eq!(da.risk_score, db.risk_score);
        }
    }

    #[test]
    fn test_fleet_size_and_ids() {
        let mut sim = FleetSimulator::new(Some(1));
        sim.generate_fleet(40);
        assert_eq!(sim.devices().len(), 40);
        assert_eq!(sim.devices()[0].id, "dev_1");
        assert_eq!(sim.devices()[39].id, "dev_40");
    }

    #[test]
    fn test_stored_scores_agree_with_scorer() {
        let mut sim = FleetSimulator::new(Some(3));
        sim.generate_fleet(30);
        for _ in 0..5 {
            sim.tick();
        }
        for device in sim.devices() {
            let verdict =
                calculate_risk_score(&device.snapshot(), sim.threat_count_for(&device.id));
            assert_eq!(device.risk_score, verdict.score);
            assert_eq!(device.risk_level, verdict.level);
        }
    }

    #[test]
    fn test_tick_keeps_telemetry_in_bounds() {
        let mut sim = FleetSimulator::new(Some(11));
        sim.generate_fleet(25);
        for _ in 0..200 {
            sim.tick();
        }
        for device in sim.devices() {
            assert!((0.0..=100.0).contains(&device.power_level));
            match &device.detail {
                DeviceDetail::Vehicle { speed_kmh, .. } => assert!(*speed_kmh >= 0.0),
                DeviceDetail::Robot {
                    load_pct,
                    temperature_c,
                    ..
                } => {
                    assert!((0.0..=100.0).contains(load_pct));
                    assert!((20.0..=80.0).contains(temperature_c));
                }
                DeviceDetail::Controller { load_pct, .. }
                | DeviceDetail::Equipment { load_pct, .. } => {
                    assert!((0.0..=100.0).contains(load_pct));
                }
            }
        }
    }

    #[test]
    fn test_offline_devices_do_not_drift() {
        let mut sim = FleetSimulator::new(Some(5));
        sim.generate_fleet(40);
        let before: Vec<_> = sim
            .devices()
            .iter()
            .filter(|d| !d.online)
            .map(|d| (d.id.clone(), d.lat, d.lon, d.power_level))
            .collect();
        assert!(!before.is_empty(), "seed 5 should produce offline devices");

        sim.tick();
        for (id, lat, lon, power) in before {
            let device = sim.devices().iter().find(|d| d.id == id).unwrap();
            assert_eq!(device.lat, lat);
            assert_eq!(device.lon, lon);
            assert_eq!(device.power_level, power);
        }
    }

    #[test]
    fn test_inject_threat_attributes_and_rescores() {
        let mut sim = FleetSimulator::new(Some(9));
        sim.generate_fleet(10);
        let before = sim.threats().len();

        let event = sim.inject_threat().expect("fleet is not empty");
        assert_eq!(sim.threats().len(), before + 1);
        assert!(sim.threat_count_for(&event.device_id) >= 1);

        let device = sim
            .devices()
            .iter()
            .find(|d| d.id == event.device_id)
            .unwrap();
        let expected =
            calculate_risk_score(&device.snapshot(), sim.threat_count_for(&device.id));
        assert_eq!(device.risk_score, expected.score);
    }

    #[test]
    fn test_acknowledged_threats_stay_attributed() {
        let mut sim = FleetSimulator::new(Some(19));
        sim.generate_fleet(10);
        let event = sim.inject_threat().expect("fleet is not empty");
        let active_before = sim.summary().active_threats;
        let attributed_before = sim.threat_count_for(&event.device_id);

        assert!(sim.acknowledge_threat(&event.id));
        assert_eq!(sim.summary().active_threats, active_before - 1);
        assert_eq!(sim.threat_count_for(&event.device_id), attributed_before);

        assert!(!sim.acknowledge_threat("thr_unknown"));
    }

    #[test]
    fn test_inject_threat_on_empty_fleet() {
        let mut sim = FleetSimulator::new(Some(1));
        assert!(sim.inject_threat().is_none());
    }

    #[test]
    fn test_maintenance_generation() {
        let mut sim = FleetSimulator::new(Some(13));
        sim.generate_fleet(20);
        sim.generate_maintenance(12);

        let items = sim.maintenance();
        assert_eq!(items.len(), 12);
        for pair in items.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        for item in items {
            assert!((50..95).contains(&item.probability));
            assert!((5..35).contains(&item.days_until));
            assert_eq!(item.action, MaintenanceAction::from_probability(item.probability));
            assert!(sim.devices().iter().any(|d| d.id == item.device_id));
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut sim = FleetSimulator::new(Some(21));
        sim.generate_fleet(35);
        let summary = sim.summary();
        assert_eq!(summary.online + summary.offline, 35);
        assert_eq!(
            summary.low + summary.medium + summary.high + summary.critical,
            35
        );
        assert!(summary.average_score >= 0.0 && summary.average_score <= 100.0);
        assert_eq!(summary.active_threats, sim.threats().len());
    }

    #[test]
    fn test_vehicle_snapshot_uses_region_table() {
        let mut sim = FleetSimulator::new(Some(17));
        sim.generate_fleet(50);
        for device in sim.devices().iter().filter(|d| d.detail.is_vehicle()) {
            match device.snapshot().profile {
                DeviceProfile::Vehicle { region, .. } => assert_eq!(region, device.region),
                _ => panic!("vehicle detail must project to vehicle profile"),
            }
        }
    }
}
