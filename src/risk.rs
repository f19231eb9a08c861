//! Composite risk scoring for fleet devices.
//!
//! The scorer is a pure function over an immutable [`DeviceSnapshot`] plus
//! the number of recently attributed threats. It never fails: missing or
//! out-of-range telemetry falls through to documented defaults so a render
//! loop can call it on every tick without guarding.

use crate::models::{DeviceProfile, DeviceSnapshot, RiskLevel, RiskTier, RiskVerdict};

/// Points per attributed threat, and the cap on the threat term.
const THREAT_POINTS_EACH: u32 = 10;
const THREAT_POINTS_CAP: u32 = 30;

/// Penalty for a device that is not reporting.
const OFFLINE_PENALTY: u32 = 15;

/// Calculate the composite risk score (0-100) and its band for one device.
///
/// Five additive contributions, summed then clamped to 100. The individual
/// maxima add up to 120, so the clamp is load-bearing: a device can hit the
/// ceiling without maxing out every term.
pub fn calculate_risk_score(device: &DeviceSnapshot, recent_threats: u32) -> RiskVerdict {
    let mut score: u32 = 0;

    // 1. Environmental contribution (0-30)
    let tier = match &device.profile {
        DeviceProfile::Vehicle { region, .. } => region.risk_tier(),
        DeviceProfile::IndustrialAsset { environment, .. } => {
            environment.unwrap_or(RiskTier::Low)
        }
    };
    score += match tier {
        RiskTier::High => 30,
        RiskTier::Medium => 15,
        RiskTier::Low => 5,
    };

    // 2. Performance/load contribution (0-25), strict lower bounds.
    // Vehicles are rated on road speed, fixed assets on utilization.
    score += match device.profile {
        DeviceProfile::Vehicle { speed_kmh, .. } => {
            performance_bracket(speed_kmh, 100.0, 80.0, 60.0)
        }
        DeviceProfile::IndustrialAsset { load_pct, .. } => {
            performance_bracket(load_pct, 90.0, 75.0, 60.0)
        }
    };

    // 3. Power contribution (0-20); an absent reading counts as full.
    let power = device.power_level.unwrap_or(100.0);
    score += if power < 20.0 {
        20
    } else if power < 40.0 {
        10
    } else if power < 60.0 {
        5
    } else {
        0
    };

    // 4. Connectivity contribution (0 or 15)
    if !device.online {
        score += OFFLINE_PENALTY;
    }

    // 5. Threat contribution (0-30)
    score += recent_threats
        .saturating_mul(THREAT_POINTS_EACH)
        .min(THREAT_POINTS_CAP);

    let score = score.min(100) as u8;
    RiskVerdict {
        score,
        level: RiskLevel::from_score(score),
    }
}

/// Highest matching bracket wins; intervals are open at the lower bound.
/// NaN compares false everywhere and lands in the zero bracket.
fn performance_bracket(value: f64, top: f64, mid: f64, low: f64) -> u32 {
    if value > top {
        25
    } else if value > mid {
        15
    } else if value > low {
        8
    } else {
        0
    }
}
