//! Noyau d’évaluation (sans UI)
//!
//! Organisation interne :
//! - erreur.rs   : ErreurExpression (thiserror)
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard validé + évaluation f64
//! - format.rs   : texte d’un nombre (NaN, Infinity, 1e+21…)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_arithmetique;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurExpression;
pub use eval::eval_expression;
