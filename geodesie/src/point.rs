//! Point en coordonnées géographiques (degrés)

use serde::{Deserialize, Serialize};

/// Point géographique en degrés décimaux.
///
/// Invariant attendu (non vérifié ici, voir [`crate::validate`]) :
/// latitude dans [-90, 90], longitude dans [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude en degrés
    pub lat_deg: f64,
    /// Longitude en degrés
    pub lon_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Latitude en radians
    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    /// Longitude en radians
    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }
}

// Interop avec l'écosystème géospatial Rust: geo::Point porte (x, y) = (lon, lat)
impl From<geo::Point<f64>> for GeoPoint {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            lat_deg: p.y(),
            lon_deg: p.x(),
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon_deg, p.lat_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_conversion() {
        let p = GeoPoint::new(90.0, -180.0);
        assert!((p.lat_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((p.lon_rad() + std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_geo_interop_axis_order() {
        // geo::Point est (x=lon, y=lat)
        let p: GeoPoint = geo::Point::new(135.0, 35.0).into();
        assert_eq!(p.lat_deg, 35.0);
        assert_eq!(p.lon_deg, 135.0);

        let g: geo::Point<f64> = GeoPoint::new(35.0, 135.0).into();
        assert_eq!(g.x(), 135.0);
        assert_eq!(g.y(), 35.0);
    }
}
