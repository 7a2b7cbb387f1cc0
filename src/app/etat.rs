//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue).
//!
//! Rôle : tenir l’affichage, l’expression en cours et le drapeau “début d’opérande”,
//! et offrir les actions des touches. L’évaluation passe par le noyau, mais le
//! résultat n’est JAMAIS écrit à l’écran ici : il est remis à l’appelant
//! (`ResultatPret`) et l’écran passe à "PAY ME".
//!
//! Contrats :
//! - `desactivee` => toute action qui modifie l’état est sans effet.
//! - Affichage et expression divergent : l’affichage montre l’opérande courante
//!   (ou le symbole de l’opérateur), l’expression accumule tout le texte tapé.
//! - Une libération (`Liberation`) n’est appliquée qu’une fois par numéro de séquence.

use std::rc::Rc;

use super::son::Son;

pub const AFFICHAGE_ZERO: &str = "0";
pub const AFFICHAGE_PAYE_MOI: &str = "PAY ME";
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Résultat calculé, à faire autoriser avant affichage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultatPret(pub String);

/// Résultat autorisé, numéroté : deux libérations de la même valeur restent distinctes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Liberation {
    pub valeur: String,
    pub sequence: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    ParenOuvrante,
    ParenFermante,
}

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::ParenOuvrante => "(",
            Operateur::ParenFermante => ")",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Operateur(Operateur),
    Egal,
    Effacer,
    Retour,
}

impl Touche {
    /// Caractères tapés au clavier : chiffres et les quatre opérateurs.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '+' => Some(Touche::Operateur(Operateur::Plus)),
            '-' => Some(Touche::Operateur(Operateur::Moins)),
            '*' => Some(Touche::Operateur(Operateur::Fois)),
            '/' => Some(Touche::Operateur(Operateur::Divise)),
            _ => None,
        }
    }
}

pub struct Calculatrice {
    affichage: String,
    expression: String,
    /// Vrai juste après un opérateur : le prochain chiffre remplace l’affichage.
    operande_neuve: bool,
    desactivee: bool,
    derniere_sequence: u64,
    longueur_max: usize,
    son: Rc<dyn Son>,
}

impl Calculatrice {
    pub fn new(longueur_max: usize, son: Rc<dyn Son>) -> Self {
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            expression: String::new(),
            operande_neuve: false,
            desactivee: false,
            derniere_sequence: 0,
            longueur_max,
            son,
        }
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn desactivee(&self) -> bool {
        self.desactivee
    }

    pub fn set_desactivee(&mut self, desactivee: bool) {
        self.desactivee = desactivee;
    }

    /* ------------------------ Touches ------------------------ */

    /// Point d’entrée unique (pavé + clavier).
    pub fn appuyer(&mut self, touche: Touche) -> Option<ResultatPret> {
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => return self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour(),
        }
        None
    }

    /// Chiffre ou point décimal.
    pub fn chiffre(&mut self, c: char) {
        if self.desactivee {
            return;
        }
        self.son.jouer_clic();

        if !self.operande_neuve && self.affichage.chars().count() >= self.longueur_max {
            tracing::debug!(affichage = %self.affichage, "chiffre refusé: affichage plein");
            return;
        }

        let sentinelle = matches!(
            self.affichage.as_str(),
            AFFICHAGE_ZERO | AFFICHAGE_PAYE_MOI | AFFICHAGE_ERREUR
        );
        if self.operande_neuve || sentinelle {
            self.affichage = c.to_string();
            self.operande_neuve = false;
        } else {
            self.affichage.push(c);
        }
        self.expression.push(c);
    }

    pub fn operateur(&mut self, op: Operateur) {
        if self.desactivee {
            return;
        }
        self.son.jouer_clic();

        self.operande_neuve = true;
        self.expression.push(' ');
        self.expression.push_str(op.symbole());
        self.expression.push(' ');
        self.affichage = op.symbole().to_string();
    }

    /// C : écran à "0", expression vide.
    pub fn effacer(&mut self) {
        if self.desactivee {
            return;
        }
        self.son.jouer_clic();

        self.affichage = AFFICHAGE_ZERO.to_string();
        self.expression.clear();
    }

    /// = : évalue, mais n’affiche rien d’autre que "PAY ME" (ou "Error").
    pub fn egal(&mut self) -> Option<ResultatPret> {
        if self.desactivee {
            return None;
        }
        self.son.jouer_clic();

        match crate::noyau::eval_expression(&self.expression) {
            Ok(resultat) => {
                tracing::info!(expression = %self.expression, "résultat prêt, paiement requis");
                self.affichage = AFFICHAGE_PAYE_MOI.to_string();
                Some(ResultatPret(resultat))
            }
            Err(e) => {
                tracing::debug!(expression = %self.expression, erreur = %e, "évaluation impossible");
                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.expression.clear();
                None
            }
        }
    }

    /// Retour arrière : un caractère de chaque côté, indépendamment.
    pub fn retour(&mut self) {
        if self.desactivee {
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = AFFICHAGE_ZERO.to_string();
        }
        self.expression.pop();
    }

    /* ------------------------ Libération (hôte) ------------------------ */

    /// Écrase l’affichage avec un résultat autorisé. Retourne false si déjà appliqué.
    pub fn liberer(&mut self, liberation: &Liberation) -> bool {
        if liberation.sequence <= self.derniere_sequence {
            return false;
        }
        self.derniere_sequence = liberation.sequence;

        self.affichage = liberation.valeur.clone();
        self.expression.clear();
        self.operande_neuve = false;
        true
    }
}
