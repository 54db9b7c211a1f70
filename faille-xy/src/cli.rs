//! Définition et implémentation de la commande de calcul
//!
//! Le cœur numérique ne valide rien : le rejet des entrées malformées
//! (non finies, hors plage) se fait ici, à la frontière, avant l'appel.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use geodesie::bearing::project_destination;
use geodesie::{compute_offsets, validate, GeoPoint};

use crate::config::Scenario;
use crate::report::OffsetReport;

/// Entrées du calcul. Soit les six valeurs en drapeaux explicites, soit
/// un fichier de scénario JSON, soit un preset embarqué.
#[derive(Args)]
pub struct InputArgs {
    /// Latitude du point de référence (degrés)
    #[arg(long, allow_hyphen_values = true)]
    origin_lat: Option<f64>,

    /// Longitude du point de référence (degrés)
    #[arg(long, allow_hyphen_values = true)]
    origin_lon: Option<f64>,

    /// Latitude du point de départ de la rupture (degrés)
    #[arg(long, allow_hyphen_values = true)]
    start_lat: Option<f64>,

    /// Longitude du point de départ de la rupture (degrés)
    #[arg(long, allow_hyphen_values = true)]
    start_lon: Option<f64>,

    /// Azimut de la rupture (degrés, sens horaire depuis le nord)
    #[arg(long, allow_hyphen_values = true)]
    strike: Option<f64>,

    /// Longueur de la rupture (km)
    #[arg(long)]
    length: Option<f64>,

    /// Fichier de scénario JSON (remplace les drapeaux individuels)
    #[arg(long, conflicts_with_all = ["origin_lat", "origin_lon", "start_lat", "start_lon", "strike", "length", "preset"])]
    scenario: Option<PathBuf>,

    /// Preset embarqué (demo)
    #[arg(long, conflicts_with_all = ["origin_lat", "origin_lon", "start_lat", "start_lon", "strike", "length"])]
    preset: Option<String>,
}

impl InputArgs {
    /// Résout les entrées en un scénario complet.
    pub fn resolve(&self) -> Result<Scenario> {
        if let Some(path) = &self.scenario {
            debug!(path = %path.display(), "Chargement du scénario");
            return Scenario::load(path);
        }
        if let Some(preset) = &self.preset {
            debug!(preset, "Chargement du preset");
            return Scenario::from_preset(preset);
        }

        let require = |name: &str, value: Option<f64>| {
            value.context(format!(
                "Missing --{name} (or use --scenario / --preset demo)"
            ))
        };

        Ok(Scenario {
            origin: GeoPoint::new(
                require("origin-lat", self.origin_lat)?,
                require("origin-lon", self.origin_lon)?,
            ),
            fault_start: GeoPoint::new(
                require("start-lat", self.start_lat)?,
                require("start-lon", self.start_lon)?,
            ),
            strike_deg: require("strike", self.strike)?,
            length_km: require("length", self.length)?,
        })
    }
}

/// Valide les entrées, calcule les offsets et affiche le rapport.
pub fn cmd_compute(scenario: &Scenario, json: bool) -> Result<()> {
    validate::check_inputs(
        scenario.origin,
        scenario.fault_start,
        scenario.strike_deg,
        scenario.length_km,
    )
    .context("Invalid input")?;

    let fault_end = project_destination(
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

    info!(
        x_start = offsets.x_start_km,
        y_start = offsets.y_start_km,
        x_end = offsets.x_end_km,
        y_end = offsets.y_end_km,
        "Offsets calculés"
    );

    let report = OffsetReport::new(*scenario, fault_end, offsets);
    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print();
    }

    Ok(())
}
