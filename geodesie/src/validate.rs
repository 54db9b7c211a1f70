//! Validation des entrées à la frontière
//!
//! Collaborateur externe au cœur numérique : celui-ci ne valide rien et
//! propage les NaN. L'appelant qui veut rejeter les entrées malformées
//! passe par ici AVANT d'appeler [`crate::compute_offsets`]. Sur des
//! entrées valides, le comportement du cœur n'est jamais modifié.

use crate::error::GeodesieError;
use crate::point::GeoPoint;

/// Vérifie qu'un point est fini et dans les plages [-90, 90] / [-180, 180].
///
/// `name` identifie le point dans les messages d'erreur ("origin",
/// "fault_start", ...).
pub fn check_point(name: &'static str, point: GeoPoint) -> Result<(), GeodesieError> {
    if !point.lat_deg.is_finite() {
        return Err(GeodesieError::NonFinite {
            field: name,
            value: point.lat_deg,
        });
    }
    if !point.lon_deg.is_finite() {
        return Err(GeodesieError::NonFinite {
            field: name,
            value: point.lon_deg,
        });
    }
    if !(-90.0..=90.0).contains(&point.lat_deg) {
        return Err(GeodesieError::LatitudeOutOfRange {
            field: name,
            value: point.lat_deg,
        });
    }
    if !(-180.0..=180.0).contains(&point.lon_deg) {
        return Err(GeodesieError::LongitudeOutOfRange {
            field: name,
            value: point.lon_deg,
        });
    }
    Ok(())
}

/// Vérifie les six entrées du calcul d'offsets.
pub fn check_inputs(
    origin: GeoPoint,
    fault_start: GeoPoint,
    strike_deg: f64,
    length_km: f64,
) -> Result<(), GeodesieError> {
    check_point("origin", origin)?;
    check_point("fault_start", fault_start)?;
    if !strike_deg.is_finite() {
        return Err(GeodesieError::NonFinite {
            field: "strike",
            value: strike_deg,
        });
    }
    if !length_km.is_finite() {
        return Err(GeodesieError::NonFinite {
            field: "length",
            value: length_km,
        });
    }
    if length_km < 0.0 {
        return Err(GeodesieError::NegativeLength(length_km));
    }
    Ok(())
}
