//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - saisie.rs       : tampon d’expression construit touche par touche
//! - jetons.rs       : tokenisation du texte affiché (×, ÷, %, π, e, sin(, √( ...)
//! - rpn.rs          : shunting-yard + contrôle de syntaxe
//! - eval.rs         : pipeline complet -> Resultat
//! - format.rs       : arrondi 12 décimales + texte
//! - historique.rs   : évaluations passées (plus récente d’abord)
//! - calculatrice.rs : contrôleur (tampon + résultat + historique)
//! - erreur.rs       : erreurs internes (jamais exposées à l’UI)

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod saisie;


#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calculatrice::Calculatrice;
