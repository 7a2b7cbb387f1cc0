// src/app/confettis.rs
//
// Confettis (egui) — gerbe de particules à la libération du résultat
// -----------------------------------------------------------------
// - declencher() ne fait que mettre la gerbe en file : la taille de la fenêtre
//   n’est connue qu’au dessin
// - avancer() crée les particules en attente puis les fait vivre
//   (vitesse qui décroît, gravité, oscillation)
// - dessiner() peint sur une couche Foreground, au-dessus de la calculatrice
//
// Unité de temps : le “tick” à 60 i/s, pour garder des constantes lisibles.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui::{self, Color32, Pos2, Rect, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::reglages::ConfigConfettis;

const VITESSE_INITIALE: f32 = 45.0;
const AMORTISSEMENT: f32 = 0.9;
const GRAVITE: f32 = 3.0;
const DUREE_TICKS: f32 = 200.0;
const ANGLE_DEG: f32 = 90.0;
const TAILLE: f32 = 6.0;
const TICKS_PAR_SECONDE: f32 = 60.0;

/// Reçoit les demandes de fête.
pub trait Celebration {
    fn declencher(&mut self, config: &ConfigConfettis);
}

#[derive(Clone, Debug)]
pub struct Particule {
    pub pos: Pos2,
    pub vitesse: f32,
    /// Direction (radians, repère écran : y vers le bas).
    pub angle: f32,
    pub oscillation: f32,
    pub couleur: Color32,
    pub age: f32,
}

impl Particule {
    pub fn vivante(&self) -> bool {
        self.age < DUREE_TICKS
    }

    fn avancer(&mut self, ticks: f32) {
        self.pos.x += self.angle.cos() * self.vitesse * ticks;
        self.pos.y += (self.angle.sin() * self.vitesse + GRAVITE) * ticks;
        self.vitesse *= AMORTISSEMENT.powf(ticks);
        self.oscillation += 0.1 * ticks;
        self.age += ticks;
    }
}

#[derive(Debug)]
pub struct Confettis {
    en_attente: Vec<ConfigConfettis>,
    particules: Vec<Particule>,
    rafales: u64,
}

impl Default for Confettis {
    fn default() -> Self {
        Self::new()
    }
}

impl Confettis {
    pub fn new() -> Self {
        Self {
            en_attente: Vec::new(),
            particules: Vec::new(),
            rafales: 0,
        }
    }

    pub fn actif(&self) -> bool {
        !self.en_attente.is_empty() || !self.particules.is_empty()
    }

    #[cfg(test)]
    pub fn particules(&self) -> &[Particule] {
        &self.particules
    }

    /// Lance les gerbes en attente dans `zone`, puis fait vivre tout le monde `dt` secondes.
    pub fn avancer(&mut self, dt: f32, zone: Rect) {
        for config in std::mem::take(&mut self.en_attente) {
            self.lancer(&config, zone);
        }

        let ticks = dt.max(0.0) * TICKS_PAR_SECONDE;
        for p in &mut self.particules {
            p.avancer(ticks);
        }
        self.particules.retain(Particule::vivante);
    }

    fn lancer(&mut self, config: &ConfigConfettis, zone: Rect) {
        if config.couleurs.is_empty() {
            return;
        }

        self.rafales += 1;
        let mut rng = SmallRng::seed_from_u64(self.rafales.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let origine = zone.min
            + Vec2::new(
                zone.width() * config.origine[0],
                zone.height() * config.origine[1],
            );
        let demi = config.dispersion_deg / 2.0;

        for i in 0..config.nombre {
            let deg = ANGLE_DEG + rng.random_range(-demi..=demi);
            self.particules.push(Particule {
                pos: origine,
                vitesse: VITESSE_INITIALE * rng.random_range(0.5..=1.0),
                // vers le haut : angle négatif en repère écran
                angle: -deg.to_radians(),
                oscillation: rng.random_range(0.0..std::f32::consts::TAU),
                couleur: config.couleurs[i % config.couleurs.len()],
                age: 0.0,
            });
        }
    }

    pub fn dessiner(&self, painter: &egui::Painter) {
        for p in &self.particules {
            let fondu = 1.0 - p.age / DUREE_TICKS;
            let largeur = TAILLE * (0.6 + 0.4 * p.oscillation.cos().abs());
            let rect = Rect::from_center_size(p.pos, Vec2::new(largeur, TAILLE));
            painter.rect_filled(rect, 1.0, p.couleur.gamma_multiply(fondu.clamp(0.0, 1.0)));
        }
    }
}

impl Celebration for Confettis {
    fn declencher(&mut self, config: &ConfigConfettis) {
        self.en_attente.push(config.clone());
    }
}

/// Poignée partagée : la caisse déclenche, la vue dessine.
#[derive(Clone, Default)]
pub struct PoigneeConfettis(pub Rc<RefCell<Confettis>>);

impl Celebration for PoigneeConfettis {
    fn declencher(&mut self, config: &ConfigConfettis) {
        self.0.borrow_mut().declencher(config);
    }
}
