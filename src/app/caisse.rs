//! src/app/caisse.rs
//!
//! La caisse : coordonne calculatrice et porte de paiement.
//!
//! - garde le résultat en attente (jamais lu par la calculatrice)
//! - ouvre / ferme la porte (porte ouverte => calculatrice désactivée)
//! - à l’accord : libère le résultat (numéroté) + carillon + confettis, une fois
//!
//! Libération en deux temps : une nouvelle demande efface la libération
//! précédente, l’accord en publie une nouvelle avec un numéro strictement
//! croissant. Deux résultats identiques de suite restent deux libérations.

use std::rc::Rc;

use super::confettis::Celebration;
use super::etat::{Liberation, ResultatPret};
use super::paiement::{Issue, Porte, Reglement};
use super::reglages::Reglages;
use super::son::Son;

pub struct Caisse {
    porte: Option<Porte>,
    en_attente: Option<String>,
    liberation: Option<Liberation>,
    sequence: u64,
    reglages: Reglages,
    reglement: Rc<dyn Reglement>,
    son: Rc<dyn Son>,
    celebration: Box<dyn Celebration>,
}

impl Caisse {
    pub fn new(
        reglages: Reglages,
        reglement: Rc<dyn Reglement>,
        son: Rc<dyn Son>,
        celebration: Box<dyn Celebration>,
    ) -> Self {
        Self {
            porte: None,
            en_attente: None,
            liberation: None,
            sequence: 0,
            reglages,
            reglement,
            son,
            celebration,
        }
    }

    pub fn porte_ouverte(&self) -> bool {
        self.porte.is_some()
    }

    pub fn porte(&self) -> Option<&Porte> {
        self.porte.as_ref()
    }

    pub fn porte_mut(&mut self) -> Option<&mut Porte> {
        self.porte.as_mut()
    }

    /// Dernier résultat libéré (None entre une demande et son accord).
    pub fn liberation(&self) -> Option<&Liberation> {
        self.liberation.as_ref()
    }

    /// La calculatrice a un résultat : on le garde et on ouvre la porte.
    pub fn demander_autorisation(&mut self, resultat: ResultatPret) {
        tracing::info!("autorisation demandée");
        self.en_attente = Some(resultat.0);
        self.liberation = None;
        self.porte = Some(Porte::new(self.reglages.montant, self.reglement.clone()));
    }

    /// Paiement accepté : porte fermée, résultat libéré, fête.
    pub fn autorisation_accordee(&mut self) {
        if self.porte.take().is_none() {
            tracing::debug!("accord ignoré: porte déjà fermée");
            return;
        }
        let Some(valeur) = self.en_attente.take() else {
            tracing::debug!("accord ignoré: aucun résultat en attente");
            return;
        };

        self.sequence += 1;
        tracing::info!(sequence = self.sequence, "résultat libéré");
        self.liberation = Some(Liberation {
            valeur,
            sequence: self.sequence,
        });

        self.son.jouer_succes();
        self.celebration.declencher(&self.reglages.confettis);
    }

    /// Fermeture sans paiement : rien n’est libéré, l’attente en cours est abandonnée.
    pub fn autorisation_annulee(&mut self) {
        if self.porte.take().is_some() {
            tracing::info!("paiement annulé");
        }
    }

    /// Fait avancer l’attente de la porte (à chaque image).
    pub fn avancer(&mut self, maintenant: f64) {
        let Some(porte) = self.porte.as_mut() else {
            return;
        };
        match porte.avancer(maintenant) {
            Some(Issue::Acceptee) => self.autorisation_accordee(),
            Some(Issue::Refusee) => tracing::warn!("paiement refusé"),
            None => {}
        }
    }
}
