//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> évaluation f64 -> format
//!
//! Remarque : la grammaire est volontairement fermée (nombres, + - * / ^,
//! parenthèses, cinq fonctions). Tout le reste est refusé et classé ;
//! aucune panique ne sort d’ici.

use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// Résultat d’une évaluation réussie.
///
/// `affichage` est la forme canonique pour l’écran et l’historique ;
/// elle re-parse exactement vers `valeur` (cf. format.rs).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub affichage: String,
}

/// API publique : évalue une expression et retourne la valeur + son
/// affichage, ou une erreur classée (division par zéro, domaine,
/// syntaxe, autre).
pub fn evaluer(expr_str: &str) -> Result<Evaluation, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::Syntaxe("entrée vide".into()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Valeur numérique
    let valeur = expr.evaluer()?;

    // Débordement f64 (l’arithmétique flottante ne lève rien d’elle-même).
    if !valeur.is_finite() {
        return Err(ErreurEval::Autre(format!("résultat non fini ({valeur})")));
    }

    let affichage = format_nombre(valeur);
    tracing::debug!(expression = s, resultat = %affichage, "évaluation");

    Ok(Evaluation { valeur, affichage })
}
