//! # geodesie
//!
//! Calculs géodésiques pour ruptures de faille : conversion d'un azimut
//! (strike) et d'une longueur de rupture, ancrés sur un point de départ,
//! en coordonnées planes (x, y) relatives à un point de référence.
//!
//! ## Modèles
//!
//! - Échelles locales km/degré sur l'ellipsoïde GRS80 (rayons de courbure
//!   méridien et de la première verticale)
//! - Projection du point d'arrivée par azimut sur une sphère R = 6371 km
//!
//! Les deux modèles sont volontairement distincts ; les résultats sont
//! calibrés sur cette combinaison.
//!
//! ## Usage
//!
//! ```rust
//! use geodesie::{compute_offsets, GeoPoint};
//!
//! let origin = GeoPoint::new(34.5, 134.5);
//! let fault_start = GeoPoint::new(35.0, 135.2);
//! let result = compute_offsets(origin, fault_start, 220.0, 45.0);
//! println!("start: ({:.4}, {:.4}) km", result.x_start_km, result.y_start_km);
//! println!("end:   ({:.4}, {:.4}) km", result.x_end_km, result.y_end_km);
//! ```
//!
//! Le cœur numérique est pur et sans état : aucune validation, les NaN se
//! propagent. Le module [`validate`] fournit le rejet des entrées
//! malformées à la frontière, pour les appelants qui le souhaitent.

pub mod bearing;
pub mod ellipsoid;
pub mod error;
pub mod offset;
pub mod point;
pub mod scale;
pub mod validate;

pub use error::GeodesieError;
pub use offset::{compute_offsets, OffsetResult};
pub use point::GeoPoint;
pub use scale::LocalScale;
