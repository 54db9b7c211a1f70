//! Projection sphérique par azimut et distance
//!
//! Formule classique du point de destination sur une sphère de rayon
//! moyen [`R_BEARING_KM`]. Modèle volontairement sphérique, distinct des
//! échelles ellipsoïdales de [`crate::scale`] (voir `ellipsoid.rs`).

use crate::ellipsoid::R_BEARING_KM;
use crate::point::GeoPoint;

/// Calcule le point atteint depuis `start` en suivant un azimut (degrés,
/// sens horaire depuis le nord) sur une distance en km.
///
/// La longitude retournée n'est PAS normalisée dans [-180, 180] : pour les
/// courtes distances locales visées ici, elle reste dans la plage d'entrée,
/// mais un appelant ne doit pas supposer la normalisation.
/// Aucune validation : NaN se propage.
pub fn project_destination(start: GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let lat1 = start.lat_rad();
    let lon1 = start.lon_rad();
    let bearing = bearing_deg.to_radians();
    let delta = distance_km / R_BEARING_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Problème inverse sphérique : distance orthodromique (km) et azimut
/// initial (degrés, normalisé dans [0, 360)) entre deux points.
///
/// Même sphère R = 6371 km que la projection directe, ce qui garantit
/// l'aller-retour projection → inverse sur de courtes distances.
pub fn inverse(from: GeoPoint, to: GeoPoint) -> (f64, f64) {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let dlon = to.lon_rad() - from.lon_rad();

    let a = (lat2.cos() * dlon.sin()).powi(2)
        + (lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos()).powi(2);
    let b = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    let distance_km = a.sqrt().atan2(b) * R_BEARING_KM;

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let mut bearing_deg = y.atan2(x).to_degrees();
    if bearing_deg < 0.0 {
        bearing_deg += 360.0;
    }

    (distance_km, bearing_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_is_identity() {
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let start = GeoPoint::new(35.0, 135.0);
            let dest = project_destination(start, bearing, 0.0);
            assert!((dest.lat_deg - 35.0).abs() < 1e-12, "bearing={}", bearing);
            assert!((dest.lon_deg - 135.0).abs() < 1e-12, "bearing={}", bearing);
        }
    }

    #[test]
    fn test_due_north_keeps_longitude() {
        let dest = project_destination(GeoPoint::new(35.0, 135.0), 0.0, 10.0);
        assert!((dest.lon_deg - 135.0).abs() < 1e-9, "lon={}", dest.lon_deg);
        // ~111.19 km par degré sur la sphère de 6371 km
        let dlat = dest.lat_deg - 35.0;
        assert!((dlat - 10.0 / 111.19).abs() < 1e-4, "dlat={}", dlat);
    }

    #[test]
    fn test_due_east_mid_latitude() {
        // 10 km vers l'est à 35°N: la longitude croît, la latitude recule
        // très légèrement (courbure de l'orthodromie)
        let dest = project_destination(GeoPoint::new(35.0, 135.0), 90.0, 10.0);
        assert!((dest.lon_deg - 135.1097869).abs() < 1e-6, "lon={}", dest.lon_deg);
        assert!((dest.lat_deg - 34.9999506).abs() < 1e-6, "lat={}", dest.lat_deg);
    }

    #[test]
    fn test_longitude_not_normalized() {
        // Proche de l'antiméridien, cap à l'est: la longitude dépasse 180°
        let dest = project_destination(GeoPoint::new(0.0, 179.9), 90.0, 50.0);
        assert!(dest.lon_deg > 180.0, "lon={}", dest.lon_deg);
    }

    #[test]
    fn test_nan_propagates() {
        let dest = project_destination(GeoPoint::new(f64::NAN, 135.0), 90.0, 10.0);
        assert!(dest.lat_deg.is_nan());
        assert!(dest.lon_deg.is_nan());
    }

    #[test]
    fn test_inverse_recovers_bearing_and_distance() {
        // Aller-retour pour de courtes longueurs aux latitudes moyennes
        let start = GeoPoint::new(36.2, 138.5);
        for (bearing, distance) in [(63.0, 42.0), (220.0, 45.0), (359.5, 8.0), (90.0, 49.9)] {
            let dest = project_destination(start, bearing, distance);
            let (d, b) = inverse(start, dest);
            assert!((d - distance).abs() < 1e-6, "d={} attendu={}", d, distance);
            assert!((b - bearing).abs() < 1e-6, "b={} attendu={}", b, bearing);
        }
    }

    #[test]
    fn test_inverse_bearing_normalized() {
        // Cap plein ouest: azimut attendu 270°, jamais -90°
        let (_, b) = inverse(GeoPoint::new(0.0, 10.0), GeoPoint::new(0.0, 9.0));
        assert!((b - 270.0).abs() < 1e-9, "b={}", b);
    }
}
