//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : envelopper la calculatrice du noyau + l’état purement visuel
//! (panneau scientifique, fenêtre d’historique) et traduire les commandes.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `noyau::Calculatrice`.
//! - Actions déterministes, sans effet de bord caché.

use tracing::debug;

use super::clavier::Commande;
use crate::noyau::Calculatrice;
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- UX ---
    pub scientifique_visible: bool,
    pub historique_ouvert: bool,
    /// Vrai si la dernière évaluation a échoué (ligne résultat en couleur d’erreur).
    pub dernier_echec: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            calc: Calculatrice::new(reglages.decimales, reglages.marqueur_echec.clone()),
            scientifique_visible: reglages.scientifique_visible,
            historique_ouvert: false,
            dernier_echec: false,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Point d’entrée unique des boutons et du clavier.
    pub fn executer(&mut self, cmd: Commande) {
        debug!(?cmd, "commande");
        match cmd {
            Commande::Jeton(j) => self.calc.ajouter(j),
            Commande::Egal => self.egal(),
            Commande::Effacer => {
                self.calc.effacer_tout();
                self.dernier_echec = false;
            }
            Commande::Supprimer => self.calc.supprimer_dernier(),
        }
    }

    fn egal(&mut self) {
        if let Some(ev) = self.calc.evaluer() {
            self.dernier_echec = ev.echec;
        }
    }

    pub fn basculer_scientifique(&mut self) {
        self.scientifique_visible = !self.scientifique_visible;
    }

    /// Clic sur une ligne d’historique : rappel puis fermeture de la fenêtre.
    pub fn rappeler(&mut self, n: usize) {
        if self.calc.selectionner_historique(n) {
            self.dernier_echec = self.calc.texte_resultat() == self.calc.marqueur_echec();
            self.historique_ouvert = false;
        }
    }

    pub fn vider_historique(&mut self) {
        self.calc.vider_historique();
    }
}
