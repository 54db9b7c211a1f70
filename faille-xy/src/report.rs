//! Rapport de calcul: rendu texte (4 décimales) et JSON

use anyhow::Result;
use serde::Serialize;

use geodesie::{GeoPoint, OffsetResult};

use crate::config::Scenario;

/// Résultat complet d'un calcul, prêt à afficher ou sérialiser.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OffsetReport {
    /// Entrées du calcul
    pub scenario: Scenario,
    /// Point d'arrivée projeté de la rupture (degrés)
    pub fault_end: GeoPoint,
    /// Coordonnées relatives (km)
    pub offsets: OffsetResult,
}

impl OffsetReport {
    pub fn new(scenario: Scenario, fault_end: GeoPoint, offsets: OffsetResult) -> Self {
        Self {
            scenario,
            fault_end,
            offsets,
        }
    }

    /// Affiche le rapport en texte, coordonnées à 4 décimales
    pub fn print(&self) {
        println!(
            "Point d'arrivée : ({:.6}°, {:.6}°)",
            self.fault_end.lat_deg, self.fault_end.lon_deg
        );
        println!(
            "Départ : (x: {:.4} km, y: {:.4} km)",
            self.offsets.x_start_km, self.offsets.y_start_km
        );
        println!(
            "Arrivée : (x: {:.4} km, y: {:.4} km)",
            self.offsets.x_end_km, self.offsets.y_end_km
        );
    }

    /// Sérialise le rapport en JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodesie::compute_offsets;

    fn sample_report() -> OffsetReport {
        let scenario = Scenario::from_preset("demo").unwrap();
        let fault_end = geodesie::bearing::project_destination(
            scenario.fault_start,
            scenario.strike_deg,
            scenario.length_km,
        );
        let offsets = compute_offsets(
            scenario.origin,
            scenario.fault_start,
            scenario.strike_deg,
            scenario.length_km,
        );
        OffsetReport::new(scenario, fault_end, offsets)
    }

    #[test]
    fn test_json_contains_offsets() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["offsets"]["x_start_km"].is_f64());
        assert!(value["fault_end"]["lat_deg"].is_f64());
        assert!(value["scenario"]["strike_deg"].is_f64());
    }
}
