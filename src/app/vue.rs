// src/app/vue.rs
//
// Vue calculatrice (UI egui) — natif + web
// ----------------------------------------
// Objectifs :
// - Même Calculatrice (etat.rs) pour natif + wasm
// - Pavé et clavier passent par le MÊME point d’entrée (Calculatrice::appuyer)
// - Clavier : chiffres, + - * /, Enter (=), Backspace, Escape (C)
// - Désactivée : on ne lit même pas le clavier (pas de double traitement
//   avec les champs de la fenêtre de paiement)

use eframe::egui::{self, Color32, RichText};

use super::etat::{Calculatrice, Operateur, ResultatPret, Touche};

const COTE: f32 = 58.0;
const ECART: f32 = 10.0;

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Operateur,
    Action,
    Egal,
}

impl Genre {
    fn fond(self) -> Color32 {
        match self {
            Genre::Chiffre => Color32::from_white_alpha(12),
            Genre::Operateur => Color32::from_rgba_unmultiplied(187, 134, 252, 50),
            Genre::Action => Color32::from_rgba_unmultiplied(3, 218, 198, 50),
            Genre::Egal => Color32::from_rgb(0xa8, 0x55, 0xf7),
        }
    }
}

type Bouton = (&'static str, Touche, Genre);

const fn op(label: &'static str, o: Operateur) -> Bouton {
    (label, Touche::Operateur(o), Genre::Operateur)
}

const fn ch(label: &'static str, c: char) -> Bouton {
    (label, Touche::Chiffre(c), Genre::Chiffre)
}

const RANGEES: [[Bouton; 4]; 4] = [
    [
        ("C", Touche::Effacer, Genre::Action),
        op("(", Operateur::ParenOuvrante),
        op(")", Operateur::ParenFermante),
        op("/", Operateur::Divise),
    ],
    [ch("7", '7'), ch("8", '8'), ch("9", '9'), op("*", Operateur::Fois)],
    [ch("4", '4'), ch("5", '5'), ch("6", '6'), op("-", Operateur::Moins)],
    [ch("1", '1'), ch("2", '2'), ch("3", '3'), op("+", Operateur::Plus)],
];

impl Calculatrice {
    /// UI principale. Retourne le résultat à faire autoriser, s’il y en a un.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<ResultatPret> {
        let mut touches = Vec::new();

        let largeur = 4.0 * COTE + 3.0 * ECART;
        egui::Frame::group(ui.style())
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(24.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(largeur);
                ui.spacing_mut().item_spacing = egui::vec2(ECART, ECART);

                self.ui_ecran(ui, largeur);
                ui.add_space(4.0);
                self.ui_pave(ui, &mut touches);
            });

        if !self.desactivee() {
            touches.extend(touches_clavier(ui.ctx()));
        }

        // Après un résultat, la porte s’ouvre : le reste de l’image est ignoré.
        for t in touches {
            tracing::debug!(?t, "touche");
            if let Some(r) = self.appuyer(t) {
                return Some(r);
            }
        }
        None
    }

    fn ui_ecran(&self, ui: &mut egui::Ui, largeur: f32) {
        egui::Frame::new()
            .fill(Color32::from_black_alpha(80))
            .corner_radius(15.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(largeur - 32.0);
                ui.set_min_height(72.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        RichText::new(self.expression())
                            .monospace()
                            .size(13.0)
                            .color(Color32::from_white_alpha(150)),
                    );
                    ui.label(
                        RichText::new(self.affichage())
                            .size(38.0)
                            .color(Color32::WHITE),
                    );
                });
            });
    }

    fn ui_pave(&self, ui: &mut egui::Ui, touches: &mut Vec<Touche>) {
        let actif = !self.desactivee();

        for rangee in RANGEES {
            ui.horizontal(|ui| {
                for (label, touche, genre) in rangee {
                    if bouton(ui, actif, label, genre, COTE).clicked() {
                        touches.push(touche);
                    }
                }
            });
        }

        ui.horizontal(|ui| {
            if bouton(ui, actif, "0", Genre::Chiffre, 2.0 * COTE + ECART).clicked() {
                touches.push(Touche::Chiffre('0'));
            }
            if bouton(ui, actif, ".", Genre::Chiffre, COTE).clicked() {
                touches.push(Touche::Chiffre('.'));
            }
            if bouton(ui, actif, "=", Genre::Egal, COTE).clicked() {
                touches.push(Touche::Egal);
            }
        });
    }
}

fn bouton(ui: &mut egui::Ui, actif: bool, label: &str, genre: Genre, largeur: f32) -> egui::Response {
    ui.add_enabled(
        actif,
        egui::Button::new(RichText::new(label).size(20.0).strong())
            .min_size(egui::vec2(largeur, COTE))
            .fill(genre.fond())
            .corner_radius(18.0),
    )
}

/// Touches clavier de l’image courante, dans l’ordre de frappe.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Touche::Egal),
                    egui::Key::Backspace => out.push(Touche::Retour),
                    egui::Key::Escape => out.push(Touche::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}
