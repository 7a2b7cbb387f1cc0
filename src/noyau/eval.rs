//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (validée) -> valeur f64 -> texte
//!
//! Remplace toute exécution dynamique de texte : seule la grammaire
//! chiffres / '.' / + - * / / parenthèses est acceptée.

use super::erreur::ErreurExpression;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};

/// API publique : évalue une expression et retourne le résultat en texte.
///
/// Division par zéro et 0/0 ne sont PAS des erreurs : "Infinity" / "NaN".
/// Seules les entrées mal formées échouent.
pub fn eval_expression(expr_str: &str) -> Result<String, ErreurExpression> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurExpression::Vide);
    }

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    tracing::debug!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "expression analysée");

    let valeur = evaluer_rpn(&rpn)?;
    Ok(format_nombre(valeur))
}
