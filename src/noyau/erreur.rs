// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Contrat : AUCUNE panique ne sort du noyau ; tout échec d’évaluation
// devient une variante typée, avec un message lisible.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    /// Division dont le diviseur vaut zéro (y compris `0^n` avec n < 0).
    #[error("division par zéro interdite")]
    DivisionParZero,

    /// Fonction appliquée hors de son domaine (sqrt d’un négatif, log d’un
    /// non strictement positif). Le message porte la plainte d’origine.
    #[error("erreur de domaine : {0}")]
    Domaine(String),

    /// Le texte ne se lit pas comme une expression de la grammaire
    /// (parenthèses déséquilibrées, opérateur pendant, entrée vide…).
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(String),

    /// Tout autre échec (fonction sans argument, résultat non fini…).
    #[error("entrée invalide : {0}")]
    Autre(String),
}
