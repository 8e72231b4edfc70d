// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en vérifiant la syntaxe au passage
// - L’évaluation de la RPN vit dans eval.rs
//
// Règles:
// - Fonction(f): poussée sur la pile, sortie après la parenthèse fermante de son argument
// - Moins unaire: si '-' arrive quand on attend une valeur => Tok::Neg (préfixe)
//   Précédence: + - (1) < * / (2) < neg (3) < ^ (4, associatif à droite)
//   donc -2^2 = -(2^2) et 2^-1 = 2^(-1)
// - Moins unaire répété (--2): erreur
// - Plus unaire: ignoré
// - Deux valeurs collées (π2, )( ...) => erreur : pas de multiplication implicite ici

use super::erreur::ErreurCalcul;
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
    matches!(t, Tok::Caret)
}

fn inattendu(t: &Tok) -> ErreurCalcul {
    ErreurCalcul::JetonInattendu(super::jetons::format_tokens(std::slice::from_ref(t)))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sin), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Fonction(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Au début (et après un opérateur / '(' / fonction), on attend une valeur.
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Pi | Tok::E => {
                if !attend_valeur {
                    return Err(inattendu(&tok));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::Fonction(_) | Tok::LPar => {
                if !attend_valeur {
                    return Err(inattendu(&tok));
                }
                ops.push(tok);
                attend_valeur = true;
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(inattendu(&tok));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalcul::ParentheseSansOuvrante);
                }

                // si une fonction est au sommet, elle prend la parenthèse comme argument
                if let Some(Tok::Fonction(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                attend_valeur = false;
            }

            Tok::Minus if attend_valeur => {
                // préfixe : rien à dépiler, mais pas de "--2"
                if matches!(ops.last(), Some(Tok::Neg)) {
                    return Err(inattendu(&tok));
                }
                ops.push(Tok::Neg);
            }

            Tok::Plus if attend_valeur => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if attend_valeur {
                    return Err(inattendu(&tok));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Fonction(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg => return Err(inattendu(&tok)),
        }
    }

    if attend_valeur {
        return Err(ErreurCalcul::ExpressionIncomplete);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::Fonction(_)) {
            return Err(ErreurCalcul::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}
