// src/noyau/expr.rs
//
// AST numérique (f64).
// - Num : littéral décimal
// - fonctions unaires : sqrt, sin, cos, tan, log (log = base 10)
// - opérateurs binaires : + - * / ^
//
// IMPORTANT (SAFE):
// - evaluer() classe chaque échec (division par zéro, domaine) au nœud
//   où il se produit ; aucune panique, aucun NaN silencieux côté domaine.
// - Le moins unaire n’a pas de nœud propre : le parse injecte Sub(0, x).

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Sqrt(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Log(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation numérique récursive.
    pub fn evaluer(&self) -> Result<f64, ErreurEval> {
        use Expr::*;

        match self {
            Num(v) => Ok(*v),

            Add(a, b) => Ok(a.evaluer()? + b.evaluer()?),
            Sub(a, b) => Ok(a.evaluer()? - b.evaluer()?),
            Mul(a, b) => Ok(a.evaluer()? * b.evaluer()?),

            Div(a, b) => {
                let num = a.evaluer()?;
                let den = b.evaluer()?;
                if den == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(num / den)
            }

            Pow(a, b) => {
                let base = a.evaluer()?;
                let exp = b.evaluer()?;
                // 0^n avec n < 0 : même classe qu’une division par zéro.
                if base == 0.0 && exp < 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(base.powf(exp))
            }

            Sqrt(x) => {
                let v = x.evaluer()?;
                if v < 0.0 {
                    return Err(ErreurEval::Domaine(format!(
                        "racine carrée d'un nombre négatif ({v})"
                    )));
                }
                Ok(v.sqrt())
            }

            Log(x) => {
                let v = x.evaluer()?;
                if v <= 0.0 {
                    return Err(ErreurEval::Domaine(format!(
                        "logarithme d'un nombre non strictement positif ({v})"
                    )));
                }
                Ok(v.log10())
            }

            Sin(x) => Ok(x.evaluer()?.sin()),
            Cos(x) => Ok(x.evaluer()?.cos()),
            Tan(x) => Ok(x.evaluer()?.tan()),
        }
    }
}
