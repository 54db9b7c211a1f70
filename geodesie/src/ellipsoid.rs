//! Définitions des ellipsoïdes et rayons terrestres

/// Ellipsoïde GRS80
pub struct GRS80;

impl GRS80 {
    /// Demi-grand axe (rayon équatorial) en mètres
    pub const A: f64 = 6378137.0;

    /// Aplatissement
    pub const F: f64 = 1.0 / 298.257222101;

    /// Première excentricité au carré
    pub const E2: f64 = Self::F * (2.0 - Self::F);
}

/// Rayon moyen sphérique utilisé UNIQUEMENT pour la projection par azimut (km).
///
/// Le calcul d'azimut est volontairement sphérique (R = 6371 km) alors que les
/// échelles locales sont ellipsoïdales (GRS80). Les sorties numériques sont
/// calibrées sur cette combinaison de modèles : ne pas unifier.
pub const R_BEARING_KM: f64 = 6371.0;
