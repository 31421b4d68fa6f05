// src/noyau/format.rs
//
// Politique unique d’affichage numérique :
// - `Display` par défaut de f64 (chaîne la plus courte qui re-parse
//   exactement vers la même valeur), jamais de notation scientifique ;
// - zéro négatif normalisé en "0".
//
// Conséquence : l’affichage d’un résultat fini re-parse toujours vers la
// même valeur, ce qui rend le calcul chaîné ("=" puis "+1") exact.

/// Formate un résultat pour l’affichage et l’historique.
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        // couvre 0.0 et -0.0
        return "0".to_string();
    }
    format!("{v}")
}
