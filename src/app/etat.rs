//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la session (saisie, historique, thème,
//! erreur) et traduire le protocole de touches brut en opérations du
//! noyau. Tout est mono-thread, un objet de session par fenêtre.
//!
//! Contrats :
//! - Aucun parsing ici : l’évaluation passe par noyau::evaluer.
//! - Un "=" réussi : affichage du résultat, entrée au journal, la
//!   saisie repart du résultat (calcul chaîné).
//! - Un "=" raté : message classé + saisie remise à zéro.
//! - Presse-papiers best-effort : toute erreur est avalée.

use arboard::Clipboard;

use super::theme::Theme;
use crate::noyau::{evaluer, ErreurEval, Historique, Saisie};

#[derive(Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub saisie: Saisie,
    pub historique: Historique,

    // --- UI ---
    pub theme: Theme,
    pub erreur: String,
}

impl AppCalc {
    /// Protocole de touches brut : chiffres, `+ - * / ( ) .`, les cinq
    /// fonctions, `^`, `C` (effacer), `<-` (retour arrière), `=`.
    pub fn sur_touche(&mut self, touche: &str) {
        match touche {
            "C" => {
                self.saisie.effacer();
                self.erreur.clear();
            }
            "<-" => self.saisie.retour_arriere(),
            "=" => self.evaluer_saisie(),
            _ => {
                self.saisie.ajouter(touche);
                self.erreur.clear();
            }
        }
    }

    /// "=" : évalue la saisie courante via le noyau.
    fn evaluer_saisie(&mut self) {
        let expression = self.saisie.texte().to_string();

        match evaluer(&expression) {
            Ok(eval) => {
                self.historique.ajouter(expression, eval.affichage.clone());
                self.saisie.definir(eval.affichage);
                self.erreur.clear();
            }
            Err(e) => {
                // échec => message affiché et saisie remise à zéro,
                // jamais d’expression à moitié invalide conservée
                self.erreur = message_erreur(&e);
                self.saisie.effacer();
            }
        }
    }

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
    }

    /* ------------------------ Presse-papiers (best-effort) ------------------------ */

    /// Copie le texte affiché ; sans effet si le presse-papiers échoue.
    pub fn copier(&mut self) {
        let texte = self.saisie.texte().to_string();
        let sortie = Clipboard::new().and_then(|mut p| p.set_text(texte));
        if let Err(e) = sortie {
            tracing::warn!(erreur = %e, "copie presse-papiers ignorée");
        }
    }

    /// Colle le contenu du presse-papiers via le filtre de la saisie ;
    /// sans effet si le presse-papiers échoue.
    pub fn coller(&mut self) {
        match Clipboard::new().and_then(|mut p| p.get_text()) {
            Ok(texte) => self.coller_texte(&texte),
            Err(e) => {
                tracing::warn!(erreur = %e, "collage presse-papiers ignoré");
            }
        }
    }

    /// Collage d’un texte brut (presse-papiers ou événement de la vue).
    /// Un collage accepté est une frappe comme une autre : il efface
    /// aussi le message d’erreur courant.
    pub fn coller_texte(&mut self, texte: &str) {
        if self.saisie.coller(texte) {
            self.erreur.clear();
        }
    }
}

/// Message utilisateur par classe d’erreur (mêmes familles que les
/// boîtes de dialogue : mathématique / saisie / générique).
fn message_erreur(e: &ErreurEval) -> String {
    match e {
        ErreurEval::DivisionParZero | ErreurEval::Domaine(_) => {
            format!("Erreur mathématique : {e}")
        }
        ErreurEval::Syntaxe(_) => format!("Erreur de saisie : {e}"),
        ErreurEval::Autre(_) => format!("Erreur : {e}"),
    }
}
