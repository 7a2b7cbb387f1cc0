// src/app.rs
//
// Calculatrice payante — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (état, caisse, paiement, effets, vues)
// - Assembler AppPayante : calculatrice + caisse + confettis
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Ordre d’une image :
//   minuteur de la porte -> synchro -> calculatrice -> synchro
//   -> fenêtre de paiement -> synchro -> confettis
// La synchro recopie “porte ouverte” dans la calculatrice (désactivée) et
// lui passe la dernière libération (appliquée une seule fois par numéro).

pub mod caisse;
pub mod confettis;
pub mod etat;
pub mod paiement;
pub mod reglages;
pub mod son;
pub mod vue;
pub mod vue_paiement;

#[cfg(test)]
mod tests_parcours;

use std::rc::Rc;
use std::time::Duration;

use eframe::egui::{self, RichText};

use caisse::Caisse;
use confettis::PoigneeConfettis;
use etat::{Calculatrice, ResultatPret};
use paiement::{Porte, ReglementSimule};
use reglages::Reglages;
use son::Son;
use vue_paiement::ActionPorte;

pub struct AppPayante {
    calc: Calculatrice,
    caisse: Caisse,
    confettis: PoigneeConfettis,
}

impl Default for AppPayante {
    fn default() -> Self {
        Self::new(Reglages::default(), son::son_plateforme())
    }
}

impl AppPayante {
    pub fn new(reglages: Reglages, son: Rc<dyn Son>) -> Self {
        let confettis = PoigneeConfettis::default();
        let reglement = Rc::new(ReglementSimule {
            delai_s: reglages.delai_paiement_s,
        });

        Self {
            calc: Calculatrice::new(reglages.longueur_max_affichage, son.clone()),
            caisse: Caisse::new(reglages, reglement, son, Box::new(confettis.clone())),
            confettis,
        }
    }

    /// Caisse -> calculatrice : désactivation + libération éventuelle.
    fn synchroniser(&mut self) {
        self.calc.set_desactivee(self.caisse.porte_ouverte());
        if let Some(lib) = self.caisse.liberation() {
            self.calc.liberer(lib);
        }
    }

    /// Un résultat sort de la calculatrice : la caisse le garde et ouvre la porte.
    fn recevoir(&mut self, resultat: Option<ResultatPret>) {
        if let Some(r) = resultat {
            self.caisse.demander_autorisation(r);
        }
        self.synchroniser();
    }
}

impl eframe::App for AppPayante {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (maintenant, dt) = ctx.input(|i| (i.time, i.stable_dt));

        self.caisse.avancer(maintenant);
        self.synchroniser();

        let panneau = egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    RichText::new(crate::TITRE_APP)
                        .size(30.0)
                        .strong()
                        .color(egui::Color32::from_rgb(0xd9, 0x46, 0xef)),
                );
                ui.add_space(20.0);
                self.calc.ui(ui)
            })
            .inner
        });
        self.recevoir(panneau.inner);

        let action = self.caisse.porte_mut().map(|p| p.ui(ctx, maintenant));
        if action == Some(ActionPorte::Annuler) {
            self.caisse.autorisation_annulee();
        }
        self.synchroniser();

        {
            let mut confettis = self.confettis.0.borrow_mut();
            confettis.avancer(dt, panneau.response.rect);
            confettis.dessiner(&ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("confettis"),
            )));
            if confettis.actif() {
                ctx.request_repaint();
            }
        }

        // Le minuteur de paiement ne vit que si l’on redessine.
        if self.caisse.porte().is_some_and(Porte::occupee) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
