// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Identifiants (candidats fonctions : sin/cos/tan/log/sqrt)
    // NOTE: c’est le parse (RPN->Expr) qui décide si l’identifiant est
    // une fonction reconnue ; ici on tokenise seulement.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins préfixe. Jamais produit par tokenize() : c’est to_rpn qui
    // requalifie un Minus en Neg d’après sa position.
    Neg,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - identifiants [a-zA-Z]+ (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre décimal : chiffres et/ou point (ex: 12, 3.5, .5)
        // Un point seul ou doublé ("2..5") échoue au parse => Syntaxe.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let n: f64 = lit
                .parse()
                .map_err(|_| ErreurEval::Syntaxe(format!("nombre invalide : '{lit}'")))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurEval::Syntaxe(format!("caractère inattendu : '{c}'")));
    }

    Ok(out)
}
