//! Scénarios de bout en bout du noyau : saisie -> évaluation -> historique.
//!
//! Ces tests traversent les composants ensemble, comme le fait la vue :
//! touches une à une, "=" qui enchaîne le résultat, échec qui remet la
//! saisie à zéro, journal borné.

use super::eval::evaluer;
use super::historique::{Historique, CAPACITE};
use super::saisie::Saisie;

/// Simule la frappe d’une suite de touches du pavé.
fn taper(saisie: &mut Saisie, touches: &[&str]) {
    for t in touches {
        saisie.ajouter(t);
    }
}

#[test]
fn frappe_puis_evaluation() {
    let mut s = Saisie::default();
    taper(&mut s, &["2", "+", "3", "*", "4"]);
    assert_eq!(s.texte(), "2+3*4");

    let eval = evaluer(s.texte()).unwrap();
    assert_eq!(eval.valeur, 14.0);
    assert_eq!(eval.affichage, "14");
}

#[test]
fn frappe_fonction_et_parentheses() {
    let mut s = Saisie::default();
    taper(&mut s, &["sqrt", "1", "6", ")"]);
    assert_eq!(s.texte(), "sqrt(16)");
    assert_eq!(evaluer(s.texte()).unwrap().valeur, 4.0);
}

#[test]
fn calcul_chaine_resultat_plus_un() {
    // Aller-retour : le résultat affiché ressème la saisie, puis "+1".
    let mut s = Saisie::default();
    taper(&mut s, &["7", "*", "6"]);

    let premier = evaluer(s.texte()).unwrap();
    s.definir(premier.affichage.clone());
    s.ajouter("+");
    s.ajouter("1");

    let second = evaluer(s.texte()).unwrap();
    assert_eq!(second.valeur, premier.valeur + 1.0);
}

#[test]
fn calcul_chaine_avec_decimales() {
    // Même enchaînement sur un résultat non entier : l’affichage
    // re-parse exactement, donc l’addition reste exacte en f64.
    let premier = evaluer("1/3").unwrap();

    let mut s = Saisie::default();
    s.definir(premier.affichage.clone());
    s.ajouter("+");
    s.ajouter("1");

    let second = evaluer(s.texte()).unwrap();
    assert_eq!(second.valeur, premier.valeur + 1.0);
}

#[test]
fn echec_laisse_le_journal_intact() {
    let mut h = Historique::default();
    h.ajouter("1+1", "2");

    assert!(evaluer("1/0").is_err());
    assert_eq!(h.entrees().count(), 1);
}

#[test]
fn vingt_et_un_calculs_gardent_vingt_entrees() {
    let mut h = Historique::default();
    for i in 1..=(CAPACITE + 1) {
        let expr = format!("{i}+{i}");
        let eval = evaluer(&expr).unwrap();
        h.ajouter(expr, eval.affichage);
    }

    assert_eq!(h.entrees().count(), CAPACITE);
    // la première ("1+1") est évincée
    let premiere = h.entrees().next().unwrap();
    assert_eq!(premiere.expression, "2+2");
    let derniere = h.entrees().last().unwrap();
    assert_eq!(derniere.to_string(), "21+21 = 42");
}

#[test]
fn collage_puis_evaluation() {
    let mut s = Saisie::default();
    s.coller("3+4");
    assert_eq!(s.texte(), "3+4");
    assert_eq!(evaluer(s.texte()).unwrap().valeur, 7.0);
}

#[test]
fn collage_avec_fonction_change_le_sens() {
    // Arête assumée : "sin" est retiré avant le contrôle, le texte
    // collé "2*sin(1)" devient "2*(1)" et s'évalue donc à 2.
    let mut s = Saisie::default();
    s.coller("2*sin(1)");
    assert_eq!(s.texte(), "2*(1)");
    assert_eq!(evaluer(s.texte()).unwrap().valeur, 2.0);
}

#[test]
fn collage_hostile_ignore() {
    let mut s = Saisie::default();
    s.coller("import os; os.system('x')");
    assert_eq!(s.texte(), "");
}
