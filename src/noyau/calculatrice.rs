//! Calculatrice : propriétaire unique du tampon, du résultat affiché et de l’historique.
//!
//! C’est la seule porte d’entrée de la coquille UI :
//! ajouter / effacer_tout / supprimer_dernier / evaluer + historique.

use tracing::{debug, info};

use super::eval::evaluer;
use super::format::{DECIMALES_DEFAUT, DECIMALES_MAX};
use super::historique::Historique;
use super::saisie::Saisie;

/// Marqueur d’échec par défaut (affiché et stocké dans l’historique).
pub const MARQUEUR_ECHEC: &str = "Erreur";

/// Ce que la coquille affiche après « = ».
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Texte de l’expression après évaluation (le résultat si succès).
    pub texte_affiche: String,
    /// Résultat, ou marqueur d’échec.
    pub texte_resultat: String,
    pub echec: bool,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    saisie: Saisie,
    resultat: Option<String>,
    historique: Historique,

    decimales: u32,
    marqueur_echec: String,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(DECIMALES_DEFAUT, MARQUEUR_ECHEC)
    }
}

impl Calculatrice {
    pub fn new(decimales: u32, marqueur_echec: impl Into<String>) -> Self {
        Self {
            saisie: Saisie::new(),
            resultat: None,
            historique: Historique::new(),
            decimales: decimales.min(DECIMALES_MAX),
            marqueur_echec: marqueur_echec.into(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn ajouter(&mut self, jeton: &str) {
        self.saisie.ajouter(jeton);
    }

    /// AC : tampon vide + résultat affiché oublié.
    pub fn effacer_tout(&mut self) {
        self.saisie.vider();
        self.resultat = None;
    }

    pub fn supprimer_dernier(&mut self) {
        self.saisie.supprimer_dernier();
    }

    /* ------------------------ Affichage ------------------------ */

    /// Tampon brut.
    #[cfg(test)]
    pub fn expression(&self) -> &str {
        self.saisie.texte()
    }

    /// Ligne expression : "0" si vide.
    pub fn texte_expression(&self) -> &str {
        if self.saisie.is_empty() {
            "0"
        } else {
            self.saisie.texte()
        }
    }

    /// Ligne résultat : "0" tant que rien n’a été évalué.
    pub fn texte_resultat(&self) -> &str {
        self.resultat.as_deref().unwrap_or("0")
    }

    pub fn marqueur_echec(&self) -> &str {
        &self.marqueur_echec
    }

    /* ------------------------ Évaluation ------------------------ */

    /// « = » : évalue le tampon.
    ///
    /// - tampon vide => None, rien ne bouge (ni affichage ni historique)
    /// - sinon une entrée d’historique est créée, succès ou échec
    /// - succès : le tampon devient le résultat (enchaînement)
    /// - échec : le tampon reste intact
    pub fn evaluer(&mut self) -> Option<Evaluation> {
        let source = self.saisie.texte().to_string();
        if source.trim().is_empty() {
            return None;
        }

        let resultat = evaluer(&source, self.decimales);
        let (texte_resultat, echec) = match resultat.texte() {
            Some(texte) => (texte.to_string(), false),
            None => (self.marqueur_echec.clone(), true),
        };

        debug!(expression = %source, resultat = %texte_resultat, echec, "évaluation");

        self.historique.ajouter(source, texte_resultat.clone());
        self.resultat = Some(texte_resultat.clone());

        if !echec {
            self.saisie.remplacer(texte_resultat.clone());
        }

        Some(Evaluation {
            texte_affiche: self.saisie.texte().to_string(),
            texte_resultat,
            echec,
        })
    }

    /* ------------------------ Historique ------------------------ */

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn vider_historique(&mut self) {
        info!(entrees = self.historique.len(), "historique vidé");
        self.historique.vider();
    }

    /// Rappel de l’entrée n : tampon := expression, résultat := texte stocké.
    /// Pas de réévaluation, pas de nouvelle entrée. Faux si n hors bornes.
    pub fn selectionner_historique(&mut self, n: usize) -> bool {
        let Some(entree) = self.historique.get(n) else {
            return false;
        };

        let expression = entree.expression_source.clone();
        let resultat = entree.resultat.clone();
        info!(index = n, expression = %expression, "rappel d’historique");

        self.saisie.remplacer(expression);
        self.resultat = Some(resultat);
        true
    }
}
