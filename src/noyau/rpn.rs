// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, log, sqrt} => fonction unaire (postfixée en RPN)
//    - sinon => refus (la grammaire n’a ni variables ni autres identifiants)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, il devient Tok::Neg,
//      opérateur préfixe qui lie plus fort que * / mais moins fort que ^
//      (donc "-2^2" = -(2^2) et "2*-3" = 2*(-3))
// - '^' est associatif à droite ; + - * / à gauche.
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

/// Identificateurs reconnus comme fonctions (unaire).
pub fn est_fonction(name: &str) -> bool {
    matches!(name, "sin" | "cos" | "tan" | "log" | "sqrt")
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(1), Slash, Num(2), RPar]
///   rpn:    [Num(1), Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à distinguer le moins unaire du moins binaire.
    let mut prev_was_value = false;

    for (i, tok) in tokens.iter().cloned().enumerate() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if !est_fonction(&name) {
                    return Err(ErreurEval::Syntaxe(format!(
                        "identifiant inconnu : '{name}'"
                    )));
                }
                // une fonction s'applique à UNE sous-expression parenthésée :
                // "sin 3" ou "sqrt16" sont refusés
                if !matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    return Err(ErreurEval::Syntaxe(format!(
                        "fonction '{name}' sans parenthèse ouvrante"
                    )));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Tok::Ident(name));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurEval::Syntaxe(
                        "parenthèse fermante sans ouvrante".into(),
                    ));
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Ident(name)) = ops.last() {
                    if est_fonction(name.as_str()) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : rien à sa gauche ne lui appartient, on empile direct
                ops.push(Tok::Neg);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Tok::Ident(name) = top {
                        if est_fonction(name.as_str()) {
                            break;
                        }
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // Neg ne sort jamais du tokenizer
            Tok::Neg => unreachable!(),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// - Opérateur binaire sans ses deux opérandes => Syntaxe ("2+")
/// - Fonction sans argument => Autre ("sin()")
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Num(v)),

            // moins unaire : pas de nœud propre, on matérialise 0 - x
            Tok::Neg => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))?;
                st.push(Expr::Sub(Box::new(Expr::Num(0.0)), Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::Ident(name) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Autre(format!("fonction '{name}' sans argument")))?;
                let e = match name.as_str() {
                    "sqrt" => Expr::Sqrt(Box::new(x)),
                    "sin" => Expr::Sin(Box::new(x)),
                    "cos" => Expr::Cos(Box::new(x)),
                    "tan" => Expr::Tan(Box::new(x)),
                    "log" => Expr::Log(Box::new(x)),
                    _ => {
                        return Err(ErreurEval::Syntaxe(format!(
                            "identifiant inconnu : '{name}'"
                        )))
                    }
                };
                st.push(e);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Syntaxe("parenthèse inattendue en RPN".into()))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::Syntaxe("expression invalide".into()));
    }
    st.pop()
        .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))
}
