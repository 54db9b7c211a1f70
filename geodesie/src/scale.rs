//! Échelles locales km/degré sur l'ellipsoïde GRS80
//!
//! Conversion degré → kilomètre valable uniquement comme linéarisation
//! locale autour de la latitude interrogée.

use crate::ellipsoid::GRS80;

/// Échelle locale à une latitude donnée.
///
/// Recalculée à chaque latitude interrogée, jamais mise en cache :
/// elle n'a de sens que comme approximation linéaire locale.
#[derive(Debug, Clone, Copy)]
pub struct LocalScale {
    /// Distance en km pour 1 degré de latitude
    pub km_per_lat_deg: f64,
    /// Distance en km pour 1 degré de longitude
    pub km_per_lon_deg: f64,
}

impl LocalScale {
    /// Calcule l'échelle locale à la latitude donnée (degrés).
    pub fn at(lat_deg: f64) -> Self {
        Self {
            km_per_lat_deg: km_per_latitude_degree(lat_deg),
            km_per_lon_deg: km_per_longitude_degree(lat_deg),
        }
    }
}

/// Distance (km) pour 1 degré de latitude à la latitude donnée (arc méridien).
///
/// M(φ) = A·(1−E2) / (1−E2·sin²φ)^(3/2) est le rayon de courbure méridien (m) ;
/// l'arc par degré vaut M·π/180, converti en km. Croît de l'équateur vers les
/// pôles avec l'aplatissement. Aucune validation : NaN se propage.
pub fn km_per_latitude_degree(lat_deg: f64) -> f64 {
    let sin_lat = lat_deg.to_radians().sin();
    let w = (1.0 - GRS80::E2 * sin_lat * sin_lat).sqrt();
    let m = GRS80::A * (1.0 - GRS80::E2) / (w * w * w);
    m * std::f64::consts::PI / 180.0 / 1000.0
}

/// Distance (km) pour 1 degré de longitude à la latitude donnée (arc du parallèle).
///
/// N(φ) = A / (1−E2·sin²φ)^(1/2) est le rayon de courbure de la première
/// verticale (m) ; l'arc par degré vaut N·cos(φ)·π/180, converti en km.
/// Tend vers 0 aux pôles (facteur cosinus), ce qui est correct et non une erreur.
pub fn km_per_longitude_degree(lat_deg: f64) -> f64 {
    let lat_rad = lat_deg.to_radians();
    let sin_lat = lat_rad.sin();
    let w = (1.0 - GRS80::E2 * sin_lat * sin_lat).sqrt();
    let n = GRS80::A / w;
    n * lat_rad.cos() * std::f64::consts::PI / 180.0 / 1000.0
}
