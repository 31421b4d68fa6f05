// src/noyau/saisie.rs
//
// Saisie : la chaîne d’expression en cours de construction.
//
// Contrats :
// - Propriétaire exclusif du texte ; la vue ne le modifie jamais en direct.
// - Aucune validation à l’ajout : une expression malformée n’est détectée
//   qu’à l’évaluation.
// - retour_arriere() retire exactement UN caractère (no-op si vide).

/// Les cinq fonctions reconnues par le pavé et par l’évaluateur.
pub const FONCTIONS: [&str; 5] = ["sin", "cos", "tan", "log", "sqrt"];

/// Caractères admis lors d’un collage (en plus des blancs).
const CARACTERES_COLLAGE: &str = "0123456789+-*/().^";

#[derive(Clone, Debug, Default)]
pub struct Saisie {
    texte: String,
}

impl Saisie {
    /// Ajoute une touche : caractère littéral, ou `"<nom>("` pour une
    /// des cinq fonctions.
    pub fn ajouter(&mut self, touche: &str) {
        if FONCTIONS.contains(&touche) {
            self.texte.push_str(touche);
            self.texte.push('(');
        } else {
            self.texte.push_str(touche);
        }
    }

    /// Retire le dernier caractère ; no-op sur une saisie vide.
    pub fn retour_arriere(&mut self) {
        self.texte.pop();
    }

    /// Remet la saisie à vide.
    pub fn effacer(&mut self) {
        self.texte.clear();
    }

    /// Texte courant, pour l’affichage.
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Remplace la saisie entière (utilisé après un "=" réussi pour
    /// enchaîner un calcul sur le résultat précédent).
    pub fn definir(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }

    /// Collage filtré d’un texte externe.
    ///
    /// Les cinq noms de fonctions sont retirés AVANT le contrôle des
    /// caractères : un collage contenant `sin(1)` devient `(1)` et peut
    /// donc changer de sens. Filtre volontairement conservateur. Si un
    /// caractère hors de l’ensemble admis subsiste, le collage est
    /// ignoré en silence (aucune erreur remontée).
    ///
    /// Retourne true si le texte a été accepté.
    pub fn coller(&mut self, texte: &str) -> bool {
        let mut filtre = texte.to_string();
        for nom in FONCTIONS {
            filtre = filtre.replace(nom, "");
        }

        let admis = filtre
            .chars()
            .all(|c| CARACTERES_COLLAGE.contains(c) || c.is_whitespace());
        if admis {
            self.texte.push_str(filtre.trim());
        }
        admis
    }
}
