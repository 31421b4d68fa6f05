//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - saisie.rs     : construction de l’expression (touches, collage)
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST f64 + évaluation
//! - eval.rs       : pipeline complet + classification des erreurs
//! - format.rs     : politique d’affichage numérique
//! - historique.rs : journal borné des évaluations réussies

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluer, Evaluation};
pub use historique::{EntreeHistorique, Historique};
pub use saisie::Saisie;
