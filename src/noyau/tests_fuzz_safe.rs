//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les échecs classés (division par zéro, domaine, non fini…)
//! - invariant clé : jamais de panique, et tout affichage de succès
//!   re-parse vers exactement la même valeur

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3".to_string(),
        4 => "7".to_string(),
        5 => "0.5".to_string(),
        6 => "2.25".to_string(),
        _ => "10".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(11) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        // exposant borné par un atome (évite les tours de puissances)
        5 => format!("({}^{})", gen_expr(rng, depth - 1), gen_atome(rng)),
        6 => format!("(-{})", gen_expr(rng, depth - 1)),
        7 => format!("sin({})", gen_expr(rng, depth - 1)),
        8 => format!("cos({})", gen_expr(rng, depth - 1)),
        9 => format!("sqrt({})", gen_expr(rng, depth - 1)),
        _ => {
            if rng.coin() {
                format!("log({})", gen_expr(rng, depth - 1))
            } else {
                format!("tan({})", gen_expr(rng, depth - 1))
            }
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_et_affichage_fidele() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluer(&expr) {
            Ok(eval) => {
                // le résultat d’un succès est fini…
                assert!(eval.valeur.is_finite(), "non fini accepté: {expr:?}");
                // …et son affichage re-parse vers la même valeur
                let retour = evaluer(&eval.affichage)
                    .unwrap_or_else(|e| panic!("affichage illisible {:?}: {e}", eval.affichage));
                assert_eq!(retour.valeur, eval.valeur, "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                // Les expressions générées sont lexicalement valides :
                // seuls les échecs d’évaluation sont attendus ici.
                assert!(
                    !matches!(e, ErreurEval::Syntaxe(_)),
                    "syntaxe inattendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let a = evaluer(&expr);
        let b = evaluer(&expr);
        assert_eq!(a, b, "évaluation non déterministe pour {expr:?}");
    }
}

#[test]
fn fuzz_safe_texte_arbitraire_classe_sans_panique() {
    // Entrées volontairement cassées : tout doit revenir en erreur typée.
    let cassees = [
        "", "   ", "+", "-", "^", "((", "))", "2++2", "..", "2..3", "sin", "sin()", "sin(1",
        "log()", "2 3", "()", "a+b", "2#3", "-*3", "2^", "/2", "sin 3", "sqrt16", "cos.5",
    ];

    for s in cassees {
        let sortie = evaluer(s);
        assert!(sortie.is_err(), "succès inattendu pour {s:?}: {sortie:?}");
    }
}
