//! src/app/reglages.rs
//!
//! Réglages (constantes) de la calculatrice payante.
//!
//! Tout est fixé à la compilation ; `Reglages::default()` les regroupe pour
//! les constructeurs (et les tests peuvent en fabriquer d’autres).

use eframe::egui::Color32;

/// Au-delà, un chiffre de plus est refusé (sauf début d’opérande).
pub const LONGUEUR_MAX_AFFICHAGE: usize = 12;

/// Latence simulée du “paiement”, en secondes.
pub const DELAI_PAIEMENT_S: f64 = 2.0;

/// Montant affiché dans la fenêtre de paiement.
pub const MONTANT: u32 = 100;

pub const CONFETTIS_NOMBRE: usize = 150;
pub const CONFETTIS_DISPERSION_DEG: f32 = 70.0;
pub const CONFETTIS_ORIGINE: [f32; 2] = [0.5, 0.6];
pub const CONFETTIS_COULEURS: [Color32; 3] = [
    Color32::from_rgb(0xbb, 0x86, 0xfc),
    Color32::from_rgb(0xd9, 0x46, 0xef),
    Color32::WHITE,
];

/// Gerbe de confettis : nombre, dispersion, origine (fraction de fenêtre), palette.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigConfettis {
    pub nombre: usize,
    pub dispersion_deg: f32,
    pub origine: [f32; 2],
    pub couleurs: Vec<Color32>,
}

impl Default for ConfigConfettis {
    fn default() -> Self {
        Self {
            nombre: CONFETTIS_NOMBRE,
            dispersion_deg: CONFETTIS_DISPERSION_DEG,
            origine: CONFETTIS_ORIGINE,
            couleurs: CONFETTIS_COULEURS.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Reglages {
    pub longueur_max_affichage: usize,
    pub delai_paiement_s: f64,
    pub montant: u32,
    pub confettis: ConfigConfettis,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max_affichage: LONGUEUR_MAX_AFFICHAGE,
            delai_paiement_s: DELAI_PAIEMENT_S,
            montant: MONTANT,
            confettis: ConfigConfettis::default(),
        }
    }
}
