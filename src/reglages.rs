//! Réglages d’exécution.
//!
//! - Natif : ligne de commande (clap) + RUST_LOG pour la journalisation.
//! - Web (wasm32) : valeurs par défaut.

use crate::noyau::calculatrice::MARQUEUR_ECHEC;
use crate::noyau::format::{DECIMALES_DEFAUT, DECIMALES_MAX};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Décimales conservées après arrondi (bornées à DECIMALES_MAX).
    pub decimales: u32,
    /// Texte affiché (et historisé) quand l’évaluation échoue.
    pub marqueur_echec: String,
    /// Panneau scientifique ouvert au démarrage.
    pub scientifique_visible: bool,
    /// Journal détaillé (debug) même sans RUST_LOG.
    pub verbeux: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            marqueur_echec: MARQUEUR_ECHEC.to_string(),
            scientifique_visible: false,
            verbeux: false,
        }
    }
}

impl Reglages {
    /// Garde-fou : limite les décimales (au-delà, le f64 ne suit plus).
    pub fn borner(mut self) -> Self {
        self.decimales = self.decimales.min(DECIMALES_MAX);
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod cli {
    use clap::Parser;

    use super::Reglages;
    use crate::noyau::calculatrice::MARQUEUR_ECHEC;
    use crate::noyau::format::DECIMALES_DEFAUT;

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Calculatrice scientifique", long_about = None)]
    pub struct Args {
        /// Décimales conservées après arrondi (0 à 15)
        #[arg(short, long, default_value_t = DECIMALES_DEFAUT)]
        pub decimales: u32,

        /// Texte affiché quand une expression ne peut pas être évaluée
        #[arg(long, default_value = MARQUEUR_ECHEC)]
        pub marqueur_echec: String,

        /// Ouvre le panneau scientifique au démarrage
        #[arg(short, long)]
        pub scientifique: bool,

        /// Journal détaillé (équivaut à RUST_LOG=debug)
        #[arg(short, long)]
        pub verbeux: bool,
    }

    impl From<Args> for Reglages {
        fn from(a: Args) -> Self {
            Reglages {
                decimales: a.decimales,
                marqueur_echec: a.marqueur_echec,
                scientifique_visible: a.scientifique,
                verbeux: a.verbeux,
            }
            .borner()
        }
    }

}
