use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse classification of a device's operating environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Banded classification of a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Map a clamped 0-100 score into its band (highest qualifying wins).
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => RiskLevel::Critical,
            50..=74 => RiskLevel::High,
            25..=49 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Operating regions covered by the fleet.
///
/// Each region carries a fixed environmental risk tier (weather exposure for
/// road vehicles). Regions outside the coverage table map to `Other`, which
/// is treated as low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Istanbul,
    Ankara,
    Izmir,
    Bursa,
    Antalya,
    Konya,
    Adana,
    Gaziantep,
    Kayseri,
    Diyarbakir,
    Mersin,
    Eskisehir,
    Trabzon,
    Samsun,
    Erzurum,
    Other,
}

impl Region {
    /// All covered regions (excludes the `Other` fallback).
    pub const ALL: [Region; 15] = [
        Region::Istanbul,
        Region::Ankara,
        Region::Izmir,
        Region::Bursa,
        Region::Antalya,
        Region::Konya,
        Region::Adana,
        Region::Gaziantep,
        Region::Kayseri,
        Region::Diyarbakir,
        Region::Mersin,
        Region::Eskisehir,
        Region::Trabzon,
        Region::Samsun,
        Region::Erzurum,
    ];

    /// Fixed region -> environmental risk tier table.
    pub fn risk_tier(self) -> RiskTier {
        match self {
            Region::Konya | Region::Kayseri | Region::Trabzon | Region::Erzurum => RiskTier::High,
            Region::Istanbul
            | Region::Bursa
            | Region::Gaziantep
            | Region::Diyarbakir
            | Region::Eskisehir
            | Region::Samsun => RiskTier::Medium,
            Region::Ankara
            | Region::Izmir
            | Region::Antalya
            | Region::Adana
            | Region::Mersin
            | Region::Other => RiskTier::Low,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Istanbul => "Istanbul",
            Region::Ankara => "Ankara",
            Region::Izmir => "Izmir",
            Region::Bursa => "Bursa",
            Region::Antalya => "Antalya",
            Region::Konya => "Konya",
            Region::Adana => "Adana",
            Region::Gaziantep => "Gaziantep",
            Region::Kayseri => "Kayseri",
            Region::Diyarbakir => "Diyarbakir",
            Region::Mersin => "Mersin",
            Region::Eskisehir => "Eskisehir",
            Region::Trabzon => "Trabzon",
            Region::Samsun => "Samsun",
            Region::Erzurum => "Erzurum",
            Region::Other => "Other",
        }
    }

    /// Turkish license plate prefix for the region.
    pub fn plate_code(self) -> &'static str {
        match self {
            Region::Istanbul => "34",
            Region::Ankara => "06",
            Region::Izmir => "35",
            Region::Bursa => "16",
            Region::Antalya => "07",
            Region::Konya => "42",
            Region::Adana => "01",
            Region::Gaziantep => "27",
            Region::Kayseri => "38",
            Region::Diyarbakir => "21",
            Region::Mersin => "33",
            Region::Eskisehir => "26",
            Region::Trabzon => "61",
            Region::Samsun => "55",
            Region::Erzurum => "25",
            Region::Other => "00",
        }
    }

    /// Case-insensitive region lookup; anything unrecognized falls back to
    /// `Other` rather than failing.
    pub fn from_name(name: &str) -> Region {
        Region::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
            .unwrap_or(Region::Other)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Kind-specific portion of a scoring snapshot.
///
/// Vehicles derive their environment tier from the region table and are
/// rated on road speed; fixed assets carry an explicit environment tier and
/// are rated on utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceProfile {
    Vehicle {
        region: Region,
        speed_kmh: f64,
    },
    IndustrialAsset {
        environment: Option<RiskTier>,
        load_pct: f64,
    },
}

/// Immutable device state handed to the risk scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub profile: DeviceProfile,
    /// Remaining power capacity in percent; absent readings are treated as
    /// a full charge.
    pub power_level: Option<f64>,
    pub online: bool,
}

/// Result of scoring one device snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    /// Composite risk score, clamped to 0-100.
    pub score: u8,
    /// Band classification consistent with `score`.
    pub level: RiskLevel,
}

/// Non-vehicle device categories tracked by the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Robot,
    Controller,
    Equipment,
}

impl AssetKind {
    pub fn serial_prefix(self) -> &'static str {
        match self {
            AssetKind::Robot => "RB",
            AssetKind::Controller => "PC",
            AssetKind::Equipment => "EQ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Robot => "Robot",
            AssetKind::Controller => "Controller",
            AssetKind::Equipment => "Equipment",
        }
    }
}

/// Kind-specific telemetry carried by a fleet device record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceDetail {
    Vehicle {
        plate: String,
        speed_kmh: f64,
    },
    Robot {
        serial: String,
        load_pct: f64,
        environment: RiskTier,
        temperature_c: f64,
        cycle_count: u64,
    },
    Controller {
        serial: String,
        load_pct: f64,
        environment: RiskTier,
        cpu_pct: f64,
        memory_pct: f64,
    },
    Equipment {
        serial: String,
        load_pct: f64,
        environment: RiskTier,
        operating_hours: u64,
        efficiency_pct: f64,
    },
}

impl DeviceDetail {
    /// Human-readable identifier (plate or serial number).
    pub fn identifier(&self) -> &str {
        match self {
            DeviceDetail::Vehicle { plate, .. } => plate,
            DeviceDetail::Robot { serial, .. }
            | DeviceDetail::Controller { serial, .. }
            | DeviceDetail::Equipment { serial, .. } => serial,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            DeviceDetail::Vehicle { .. } => "Vehicle",
            DeviceDetail::Robot { .. } => AssetKind::Robot.label(),
            DeviceDetail::Controller { .. } => AssetKind::Controller.label(),
            DeviceDetail::Equipment { .. } => AssetKind::Equipment.label(),
        }
    }

    pub fn is_vehicle(&self) -> bool {
        matches!(self, DeviceDetail::Vehicle { .. })
    }
}

/// One device in the simulated fleet.
///
/// The fleet store owns the mutable state; scoring always goes through an
/// immutable [`DeviceSnapshot`] derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub region: Region,
    pub lat: f64,
    pub lon: f64,
    pub online: bool,
    /// Battery (vehicles) or power-supply status (assets), percent.
    pub power_level: f64,
    pub detail: DeviceDetail,
    pub last_update: DateTime<Utc>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

impl DeviceRecord {
    /// Project the mutable fleet record into the immutable scoring input.
    pub fn snapshot(&self) -> DeviceSnapshot {
        let profile = match &self.detail {
            DeviceDetail::Vehicle { speed_kmh, .. } => DeviceProfile::Vehicle {
                region: self.region,
                speed_kmh: *speed_kmh,
            },
            DeviceDetail::Robot {
                load_pct,
                environment,
                ..
            }
            | DeviceDetail::Controller {
                load_pct,
                environment,
                ..
            }
            | DeviceDetail::Equipment {
                load_pct,
                environment,
                ..
            } => DeviceProfile::IndustrialAsset {
                environment: Some(*environment),
                load_pct: *load_pct,
            },
        };

        DeviceSnapshot {
            profile,
            power_level: Some(self.power_level),
            online: self.online,
        }
    }
}

/// Security event attributed to a fleet device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatEvent {
    pub id: String,
    pub device_id: String,
    pub name: String,
    pub severity: RiskLevel,
    pub detected_at: DateTime<Utc>,
    pub acknowledged: bool,
}

/// Recommended response to a predicted component failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceAction {
    Urgent,
    Schedule,
    Monitor,
}

impl MaintenanceAction {
    /// Derive the action from failure probability (percent).
    pub fn from_probability(probability: u8) -> Self {
        if probability > 80 {
            MaintenanceAction::Urgent
        } else if probability > 60 {
            MaintenanceAction::Schedule
        } else {
            MaintenanceAction::Monitor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaintenanceAction::Urgent => "Urgent maintenance required",
            MaintenanceAction::Schedule => "Schedule maintenance soon",
            MaintenanceAction::Monitor => "Continue monitoring",
        }
    }
}

/// Predicted component failure for one device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceItem {
    pub id: String,
    pub device_id: String,
    pub device_name: String,
    pub component: String,
    pub issue: String,
    /// Failure probability, percent.
    pub probability: u8,
    pub days_until: u32,
    pub action: MaintenanceAction,
}

/// Session-level metadata for a simulated run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetInfo {
    pub started_at: String,
    pub finished_at: String,
    pub duration_seconds: f64,
    pub seed: u64,
    pub device_count: usize,
    pub ticks: u64,
    pub tick_interval_ms: u64,
}

/// Aggregate fleet statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSummary {
    pub online: usize,
    pub offline: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
    pub average_score: f64,
    pub active_threats: usize,
}

/// Full output of a simulated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetReport {
    pub info: FleetInfo,
    pub summary: FleetSummary,
    pub devices: Vec<DeviceRecord>,
    pub threats: Vec<ThreatEvent>,
    pub maintenance: Vec<MaintenanceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bands() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn test_region_tier_table() {
        assert_eq!(Region::Konya.risk_tier(), RiskTier::High);
        assert_eq!(Region::Erzurum.risk_tier(), RiskTier::High);
        assert_eq!(Region::Istanbul.risk_tier(), RiskTier::Medium);
        assert_eq!(Region::Samsun.risk_tier(), RiskTier::Medium);
        assert_eq!(Region::Izmir.risk_tier(), RiskTier::Low);
        assert_eq!(Region::Other.risk_tier(), RiskTier::Low);
    }

    #[test]
    fn test_region_from_name() {
        assert_eq!(Region::from_name("ankara"), Region::Ankara);
        assert_eq!(Region::from_name("Trabzon"), Region::Trabzon);
        assert_eq!(Region::from_name("Gotham"), Region::Other);
    }

    #[test]
    fn test_maintenance_action_thresholds() {
        assert_eq!(
            MaintenanceAction::from_probability(94),
            MaintenanceAction::Urgent
        );
        assert_eq!(
            MaintenanceAction::from_probability(81),
            MaintenanceAction::Urgent
        );
        assert_eq!(
            MaintenanceAction::from_probability(80),
            MaintenanceAction::Schedule
        );
        assert_eq!(
            MaintenanceAction::from_probability(61),
            MaintenanceAction::Schedule
        );
        assert_eq!(
            MaintenanceAction::from_probability(60),
            MaintenanceAction::Monitor
        );
        assert_eq!(
            MaintenanceAction::from_probability(50),
            MaintenanceAction::Monitor
        );
    }

    #[test]
    fn test_snapshot_projection() {
        let record = DeviceRecord {
            id: "dev_1".to_string(),
            brand: "Mercedes".to_string(),
            model: "Sprinter".to_string(),
            region: Region::Konya,
            lat: 38.5,
            lon: 32.5,
            online: false,
            power_level: 42.0,
            detail: DeviceDetail::Vehicle {
                plate: "42 ABC 123".to_string(),
                speed_kmh: 85.0,
            },
            last_update: Utc::now(),
            risk_score: 0,
            risk_level: RiskLevel::Low,
        };

        let snap = record.snapshot();
        assert!(!snap.online);
        assert_eq!(snap.power_level, Some(42.0));
        match snap.profile {
            DeviceProfile::Vehicle { region, speed_kmh } => {
                assert_eq!(region, Region::Konya);
                assert_eq!(speed_kmh, 85.0);
            }
            _ => panic!("vehicle record should project to a vehicle profile"),
        }
    }
}
