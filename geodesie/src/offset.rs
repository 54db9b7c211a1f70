//! Calcul des coordonnées (x, y) relatives d'une rupture de faille
//!
//! Orchestration: projection du point d'arrivée par azimut/longueur, puis
//! linéarisation locale indépendante de chaque extrémité autour du point
//! de référence.

use serde::Serialize;

use crate::bearing::project_destination;
use crate::point::GeoPoint;
use crate::scale::LocalScale;

/// Coordonnées planes relatives (km) des deux extrémités de la rupture.
///
/// x positif vers l'est, y positif vers le nord, origine au point de référence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OffsetResult {
    /// x du point de départ (km)
    pub x_start_km: f64,
    /// y du point de départ (km)
    pub y_start_km: f64,
    /// x du point d'arrivée (km)
    pub x_end_km: f64,
    /// y du point d'arrivée (km)
    pub y_end_km: f64,
}

/// Convertit la rupture (point de départ, azimut, longueur) en deux paires
/// (x, y) en km relatives au point de référence `origin`.
///
/// Chaque extrémité est linéarisée séparément : l'échelle km/degré est prise
/// à la latitude médiane entre l'extrémité et le point de référence, donc les
/// deux repères locaux diffèrent légèrement. C'est un compromis voulu
/// (précision locale contre cohérence entre extrémités) à préserver tel quel.
///
/// Aucune validation : NaN en entrée donne NaN en sortie (voir [`crate::validate`]).
pub fn compute_offsets(
    origin: GeoPoint,
    fault_start: GeoPoint,
    strike_deg: f64,
    length_km: f64,
) -> OffsetResult {
    let fault_end = project_destination(fault_start, strike_deg, length_km);

    let (x_start_km, y_start_km) = local_offset(origin, fault_start);
    let (x_end_km, y_end_km) = local_offset(origin, fault_end);

    OffsetResult {
        x_start_km,
        y_start_km,
        x_end_km,
        y_end_km,
    }
}

/// Linéarise `point` autour de `origin` à la latitude médiane des deux.
fn local_offset(origin: GeoPoint, point: GeoPoint) -> (f64, f64) {
    let mid_lat = (point.lat_deg + origin.lat_deg) / 2.0;
    let scale = LocalScale::at(mid_lat);

    let x = (point.lon_deg - origin.lon_deg) * scale.km_per_lon_deg;
    let y = (point.lat_deg - origin.lat_deg) * scale.km_per_lat_deg;
    (x, y)
}
