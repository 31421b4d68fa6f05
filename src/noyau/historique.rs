// src/noyau/historique.rs
//
// Journal borné des évaluations réussies.
// - ordre d’insertion conservé (le plus récent en dernier)
// - capacité 20, éviction FIFO du plus ancien
// - pas d’autre API de suppression : une nouvelle session repart à vide

use std::collections::VecDeque;
use std::fmt;

/// Capacité maximale du journal.
pub const CAPACITE: usize = 20;

/// Une évaluation réussie, figée : `"<expression> = <résultat>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Enregistre une évaluation ; évince la plus ancienne au-delà de
    /// la capacité.
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push_back(EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
        });
        if self.entrees.len() > CAPACITE {
            self.entrees.pop_front();
        }
    }

    /// Entrées dans l’ordre d’insertion (la plus récente en dernier).
    pub fn entrees(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }
}
