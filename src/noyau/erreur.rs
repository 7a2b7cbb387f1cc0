// src/noyau/erreur.rs
//
// Erreurs du noyau : toute entrée non évaluable tombe ici.
// L’UI ne lit pas le détail (elle affiche "Error"), mais les tests et le journal si.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurExpression {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("opérateur collé: '{0}{0}'")]
    OperateurDouble(char),

    #[error("opérande manquante avant '{0}'")]
    OperandeManquante(char),

    #[error("expression incomplète (opérateur final)")]
    Incomplete,

    #[error("valeur inattendue après une valeur")]
    ValeurInattendue,

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseOrpheline,

    #[error("expression invalide")]
    Invalide,
}
