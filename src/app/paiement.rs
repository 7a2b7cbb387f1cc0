//! src/app/paiement.rs
//!
//! Porte de paiement (simulée) : formulaire cosmétique + attente + “succès”.
//!
//! Contrats :
//! - Les champs sont masqués à la saisie, jamais lus par la logique.
//! - Soumettre n’est possible que formulaire complet et porte libre.
//! - L’issue vient d’un `Reglement` injecté (délai puis accepté, en production).
//! - Fermer la porte = la détruire : son attente disparaît avec elle.

use std::rc::Rc;

/// Issue d’une soumission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Issue {
    Acceptee,
    Refusee,
}

/// Stratégie “attendre puis répondre”.
pub trait Reglement {
    /// `ecoule` : secondes depuis la soumission. `None` = toujours en cours.
    fn issue(&self, ecoule: f64) -> Option<Issue>;
}

/// Production : accepte toujours, après `delai_s`.
#[derive(Clone, Copy, Debug)]
pub struct ReglementSimule {
    pub delai_s: f64,
}

impl Reglement for ReglementSimule {
    fn issue(&self, ecoule: f64) -> Option<Issue> {
        (ecoule >= self.delai_s).then_some(Issue::Acceptee)
    }
}

/* ------------------------ Formulaire ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Champ {
    Nom,
    Numero,
    Expiration,
    Cvv,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formulaire {
    pub nom: String,
    pub numero: String,
    pub expiration: String,
    pub cvv: String,
}

impl Formulaire {
    /// Dépose une saisie brute, après masquage.
    pub fn saisir(&mut self, champ: Champ, brut: &str) {
        match champ {
            Champ::Nom => self.nom = brut.to_string(),
            Champ::Numero => self.numero = masque_numero(brut),
            Champ::Expiration => self.expiration = masque_expiration(brut),
            Champ::Cvv => self.cvv = masque_cvv(brut),
        }
    }

    pub fn valeur(&self, champ: Champ) -> &str {
        match champ {
            Champ::Nom => &self.nom,
            Champ::Numero => &self.numero,
            Champ::Expiration => &self.expiration,
            Champ::Cvv => &self.cvv,
        }
    }

    /// Tous les champs requis sont remplis.
    pub fn complet(&self) -> bool {
        !self.nom.trim().is_empty()
            && !self.numero.is_empty()
            && !self.expiration.is_empty()
            && !self.cvv.is_empty()
    }
}

fn chiffres(brut: &str, max: usize) -> String {
    brut.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// 16 chiffres max, par blocs de 4 : "4242 4242 4242 4242".
pub fn masque_numero(brut: &str) -> String {
    let c: Vec<char> = chiffres(brut, 16).chars().collect();
    c.chunks(4)
        .map(|bloc| bloc.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// MMAA : le '/' apparaît dès le 3e chiffre ("12" -> "12", "123" -> "12/3").
pub fn masque_expiration(brut: &str) -> String {
    let c = chiffres(brut, 4);
    if c.len() >= 3 {
        format!("{}/{}", &c[..2], &c[2..])
    } else {
        c
    }
}

pub fn masque_cvv(brut: &str) -> String {
    chiffres(brut, 3)
}

/* ------------------------ Porte ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
enum EtatPorte {
    Saisie,
    EnCours { soumis_a: f64 },
}

pub struct Porte {
    pub formulaire: Formulaire,
    montant: u32,
    etat: EtatPorte,
    reglement: Rc<dyn Reglement>,
    // À l’ouverture, le curseur va dans le premier champ.
    pub(super) focus_nom: bool,
}

impl Porte {
    pub fn new(montant: u32, reglement: Rc<dyn Reglement>) -> Self {
        Self {
            formulaire: Formulaire::default(),
            montant,
            etat: EtatPorte::Saisie,
            reglement,
            focus_nom: true,
        }
    }

    pub fn montant(&self) -> u32 {
        self.montant
    }

    pub fn occupee(&self) -> bool {
        matches!(self.etat, EtatPorte::EnCours { .. })
    }

    pub fn peut_soumettre(&self) -> bool {
        !self.occupee() && self.formulaire.complet()
    }

    /// Lance l’attente. Retourne false si refusé (incomplet ou déjà en cours).
    pub fn soumettre(&mut self, maintenant: f64) -> bool {
        if !self.peut_soumettre() {
            return false;
        }
        tracing::info!(montant = self.montant, "paiement soumis");
        self.etat = EtatPorte::EnCours {
            soumis_a: maintenant,
        };
        true
    }

    /// À appeler à chaque image. Rend l’issue une seule fois, puis la porte est libre.
    pub fn avancer(&mut self, maintenant: f64) -> Option<Issue> {
        let EtatPorte::EnCours { soumis_a } = self.etat else {
            return None;
        };

        let issue = self.reglement.issue(maintenant - soumis_a)?;
        self.etat = EtatPorte::Saisie;
        Some(issue)
    }
}
