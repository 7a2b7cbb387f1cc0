// src/app/vue_paiement.rs
//
// Fenêtre de paiement (egui::Modal)
// ---------------------------------
// - Aperçu de carte (valeurs ou gabarits)
// - 4 champs masqués, Enter dans un champ = soumettre (comme un <form>)
// - Pendant l’attente : champs figés, bouton grisé, spinner
// - Annuler / Escape / clic hors fenêtre : on rend la main sans rien libérer

use eframe::egui::{self, Color32, RichText};

use super::paiement::{Champ, Porte};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionPorte {
    Rien,
    Annuler,
}

impl Porte {
    /// Dessine la fenêtre ; `maintenant` date une éventuelle soumission.
    pub fn ui(&mut self, ctx: &egui::Context, maintenant: f64) -> ActionPorte {
        let mut annuler = false;

        let reponse = egui::Modal::new(egui::Id::new("porte_paiement")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 10.0);

            ui.horizontal(|ui| {
                ui.heading("Paiement sécurisé");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small("🔒 SSL 256 bits");
                });
            });

            self.ui_carte(ui);

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("Montant total : {},00 €", self.montant()))
                        .size(16.0)
                        .strong(),
                );
            });

            let occupee = self.occupee();
            let mut entree = false;

            ui.add_enabled_ui(!occupee, |ui| {
                entree |= self.champ(ui, Champ::Nom, "Nom sur la carte", 380.0);
                entree |= self.champ(ui, Champ::Numero, "Numéro de carte", 380.0);
                ui.horizontal(|ui| {
                    entree |= self.champ(ui, Champ::Expiration, "MM/AA", 250.0);
                    entree |= self.champ(ui, Champ::Cvv, "CVV", 120.0);
                });
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let texte = if occupee {
                    "Paiement en cours…".to_string()
                } else {
                    format!("Payer ({} €)", self.montant())
                };
                let payer = ui.add_enabled(
                    self.peut_soumettre(),
                    egui::Button::new(RichText::new(texte).strong()).min_size(egui::vec2(220.0, 36.0)),
                );
                if payer.clicked() || entree {
                    self.soumettre(maintenant);
                }
                if occupee {
                    ui.spinner();
                }
                if ui.button("Annuler").clicked() {
                    annuler = true;
                }
            });
        });

        if annuler || reponse.should_close() {
            ActionPorte::Annuler
        } else {
            ActionPorte::Rien
        }
    }

    fn ui_carte(&self, ui: &mut egui::Ui) {
        let f = &self.formulaire;
        let ou = |v: &str, defaut: &str| -> String {
            if v.is_empty() {
                defaut.to_string()
            } else {
                v.to_string()
            }
        };

        egui::Frame::new()
            .fill(Color32::from_rgb(0x6a, 0x5a, 0xf0))
            .corner_radius(16.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(ou(&f.numero, "•••• •••• •••• ••••"))
                        .monospace()
                        .size(20.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(18.0);
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.small("TITULAIRE");
                        ui.label(RichText::new(ou(&f.nom, "NOM PRÉNOM")).color(Color32::WHITE));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.vertical(|ui| {
                            ui.small("EXP");
                            ui.label(RichText::new(ou(&f.expiration, "MM/AA")).color(Color32::WHITE));
                        });
                    });
                });
            });
    }

    /// Un champ masqué. Retourne true si Enter y a été pressé.
    fn champ(&mut self, ui: &mut egui::Ui, champ: Champ, indice: &str, largeur: f32) -> bool {
        let mut texte = self.formulaire.valeur(champ).to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut texte)
                .hint_text(indice)
                .desired_width(largeur),
        );

        if champ == Champ::Nom && self.focus_nom {
            resp.request_focus();
            self.focus_nom = false;
        }

        if resp.changed() {
            self.formulaire.saisir(champ, &texte);
        }

        resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}
