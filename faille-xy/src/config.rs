//! Scénarios de calcul (les six entrées)

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use geodesie::GeoPoint;

/// Les six entrées d'un calcul d'offsets.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Scenario {
    /// Point de référence (origine du repère XY)
    pub origin: GeoPoint,

    /// Point de départ de la rupture
    pub fault_start: GeoPoint,

    /// Azimut de la rupture (degrés, sens horaire depuis le nord)
    pub strike_deg: f64,

    /// Longueur de la rupture (km)
    pub length_km: f64,
}

impl Scenario {
    /// Charge un scénario depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read scenario file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse scenario JSON")
    }

    /// Charge un scénario depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "demo" => Self::load_embedded(include_str!("presets/demo.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: demo", preset),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded scenario")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_preset_parses() {
        let s = Scenario::from_preset("demo").unwrap();
        assert!((s.origin.lat_deg - 34.5).abs() < 1e-12);
        assert!((s.fault_start.lon_deg - 135.2).abs() < 1e-12);
        assert!(s.length_km > 0.0);
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(Scenario::from_preset("full").is_err());
    }

    #[test]
    fn test_scenario_round_trips_json() {
        let s = Scenario::from_preset("demo").unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back.origin.lat_deg, s.origin.lat_deg);
        assert_eq!(back.strike_deg, s.strike_deg);
    }
}
