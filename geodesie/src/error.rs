//! Types d'erreurs pour le crate geodesie

use thiserror::Error;

/// Erreurs de validation des entrées à la frontière du calcul.
///
/// Le cœur numérique ne valide rien et propage les NaN ; seules les
/// fonctions de [`crate::validate`] produisent ces erreurs.
#[derive(Debug, Error, PartialEq)]
pub enum GeodesieError {
    /// Valeur non finie (NaN ou infini)
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Latitude hors de [-90, 90]
    #[error("Latitude out of range [-90, 90] for {field}: {value}")]
    LatitudeOutOfRange { field: &'static str, value: f64 },

    /// Longitude hors de [-180, 180]
    #[error("Longitude out of range [-180, 180] for {field}: {value}")]
    LongitudeOutOfRange { field: &'static str, value: f64 },

    /// Longueur de rupture négative
    #[error("Rupture length must be non-negative: {0}")]
    NegativeLength(f64),
}
