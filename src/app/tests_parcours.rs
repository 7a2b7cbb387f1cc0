//! Parcours complets sans fenêtre : touches -> "PAY ME" -> paiement -> résultat.
//!
//! On pilote AppPayante comme le ferait update(), image par image, avec une
//! horloge fictive.

use std::rc::Rc;

use super::etat::tests::SonCompteur;
use super::etat::{Operateur, Touche};
use super::paiement::tests::remplir;
use super::reglages::Reglages;
use super::AppPayante;

struct Banc {
    app: AppPayante,
    son: Rc<SonCompteur>,
    horloge: f64,
}

impl Banc {
    fn new() -> Self {
        let son = Rc::new(SonCompteur::default());
        Self {
            app: AppPayante::new(Reglages::default(), son.clone()),
            son,
            horloge: 0.0,
        }
    }

    fn taper(&mut self, touches: &str) {
        for ch in touches.chars() {
            let t = match ch {
                '=' => Touche::Egal,
                'C' => Touche::Effacer,
                '<' => Touche::Retour,
                '(' => Touche::Operateur(Operateur::ParenOuvrante),
                ')' => Touche::Operateur(Operateur::ParenFermante),
                '.' => Touche::Chiffre('.'),
                autre => Touche::depuis_caractere(autre).expect("touche de test"),
            };
            let r = self.app.calc.appuyer(t);
            self.app.recevoir(r);
        }
    }

    /// Une image : le minuteur avance, puis synchro.
    fn image(&mut self, dt: f64) {
        self.horloge += dt;
        self.app.caisse.avancer(self.horloge);
        self.app.synchroniser();
    }

    fn payer(&mut self) {
        let t = self.horloge;
        let porte = self.app.caisse.porte_mut().expect("porte ouverte");
        remplir(&mut porte.formulaire);
        assert!(porte.soumettre(t));
    }

    fn affichage(&self) -> &str {
        self.app.calc.affichage()
    }
}

#[test]
fn scenario_addition_payee() {
    let mut b = Banc::new();
    b.taper("7+3=");
    assert_eq!(b.affichage(), "PAY ME");
    assert!(b.app.caisse.porte_ouverte());
    assert!(b.app.calc.desactivee());

    b.payer();
    b.image(1.0);
    assert_eq!(b.affichage(), "PAY ME", "délai non écoulé");

    b.image(1.0);
    assert_eq!(b.affichage(), "10");
    assert_eq!(b.app.calc.expression(), "");
    assert!(!b.app.calc.desactivee());
    assert_eq!(b.son.succes.get(), 1);
    assert!(b.app.confettis.0.borrow().actif());
}

#[test]
fn porte_ouverte_bloque_toutes_les_touches() {
    let mut b = Banc::new();
    b.taper("7+3=");
    let expr = b.app.calc.expression().to_string();

    b.taper("123+-C<=");
    assert_eq!(b.affichage(), "PAY ME");
    assert_eq!(b.app.calc.expression(), expr);
}

#[test]
fn annulation_garde_pay_me() {
    let mut b = Banc::new();
    b.taper("7+3=");
    b.payer();
    b.image(0.5);

    b.app.caisse.autorisation_annulee();
    b.app.synchroniser();
    assert!(!b.app.calc.desactivee());
    assert_eq!(b.affichage(), "PAY ME");

    // le délai aurait expiré : rien ne sort
    b.image(5.0);
    assert_eq!(b.affichage(), "PAY ME");
    assert_eq!(b.son.succes.get(), 0);

    // on peut repayer en réévaluant
    b.taper("=");
    assert!(b.app.caisse.porte_ouverte());
}

#[test]
fn meme_resultat_deux_fois_reste_visible() {
    let mut b = Banc::new();
    b.taper("7+3=");
    b.payer();
    b.image(2.0);
    assert_eq!(b.affichage(), "10");

    b.taper("5+5=");
    assert_eq!(b.affichage(), "PAY ME");
    b.payer();
    b.image(2.0);
    assert_eq!(b.affichage(), "10");
    assert_eq!(b.son.succes.get(), 2);
}

#[test]
fn liberation_appliquee_une_seule_fois() {
    let mut b = Banc::new();
    b.taper("2*4=");
    b.payer();
    b.image(2.0);
    assert_eq!(b.affichage(), "8");

    b.taper("C");
    b.image(0.1);
    b.image(0.1);
    assert_eq!(b.affichage(), "0", "la synchro ne doit pas réécrire le résultat");
}

#[test]
fn erreur_n_ouvre_pas_la_porte() {
    let mut b = Banc::new();
    b.taper("+=");
    assert_eq!(b.affichage(), "Error");
    assert_eq!(b.app.calc.expression(), "");
    assert!(!b.app.caisse.porte_ouverte());
}

#[test]
fn division_par_zero_payee() {
    let mut b = Banc::new();
    b.taper("5/0=");
    b.payer();
    b.image(2.0);
    assert_eq!(b.affichage(), "Infinity");
}

#[test]
fn precedence_jusqu_a_l_ecran() {
    let mut b = Banc::new();
    b.taper("2+3*4-(6/2)=");
    b.payer();
    b.image(2.0);
    assert_eq!(b.affichage(), "11");
}
