//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile f64 -> arrondi -> texte
//!
//! Aucune erreur ne traverse la frontière : `evaluer` rend toujours un `Resultat`.

use std::f64::consts::{E, PI};

use tracing::debug;

use super::erreur::ErreurCalcul;
use super::format::{arrondir, format_nombre};
use super::jetons::{format_tokens, tokenize, Fonction, Tok};
use super::rpn::to_rpn;

/// Issue d’une évaluation. Créée à chaque appel, jamais modifiée ensuite.
#[derive(Clone, Debug, PartialEq)]
pub enum Resultat {
    /// Valeur finie, déjà arrondie ; `texte` est sa forme décimale la plus courte.
    Numerique { valeur: f64, texte: String },
    Echec,
}

impl Resultat {
    #[cfg(test)]
    pub fn est_echec(&self) -> bool {
        matches!(self, Resultat::Echec)
    }

    /// Texte numérique, ou None si échec.
    pub fn texte(&self) -> Option<&str> {
        match self {
            Resultat::Numerique { texte, .. } => Some(texte),
            Resultat::Echec => None,
        }
    }
}

/// API publique : évalue le texte du tampon.
///
/// Toute erreur (syntaxe, parenthèses, domaine, valeur non finie) devient `Echec`.
pub fn evaluer(texte: &str, decimales: u32) -> Resultat {
    match calculer(texte) {
        Ok(v) => {
            let valeur = arrondir(v, decimales);
            Resultat::Numerique {
                texte: format_nombre(valeur),
                valeur,
            }
        }
        Err(e) => {
            debug!(expression = texte, cause = %e, "évaluation en échec");
            Resultat::Echec
        }
    }
}

/// Valeur brute (non arrondie) d’une expression.
pub fn calculer(texte: &str) -> Result<f64, ErreurCalcul> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "expression convertie");

    // 3) Pile
    let v = evaluer_rpn(&rpn)?;

    // NaN (√ négatif, log ≤ 0, asin hors domaine) ou ±∞ (division par zéro)
    if !v.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }
    Ok(v)
}

fn appliquer(f: Fonction, x: f64) -> f64 {
    match f {
        Fonction::Racine => x.sqrt(),
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => x.tan(),
        Fonction::Asin => x.asin(),
        Fonction::Acos => x.acos(),
        Fonction::Atan => x.atan(),
        Fonction::Log10 => x.log10(),
    }
}

/// Évalue une RPN produite par `to_rpn`.
fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),
            Tok::Pi => st.push(PI),
            Tok::E => st.push(E),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                st.push(-x);
            }

            Tok::Fonction(f) => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                st.push(appliquer(*f, x));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => a.powf(b),
                });
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::JetonInattendu(format_tokens(
                    std::slice::from_ref(tok),
                )))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::ExpressionIncomplete),
    }
}
