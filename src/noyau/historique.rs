// src/noyau/historique.rs
//
// Historique des évaluations (durée de vie du processus, jamais persisté).
// Ordre : la plus récente d’abord.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Une évaluation passée. Immuable une fois créée.
#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression_source: String,
    /// Texte du résultat, ou marqueur d’échec.
    pub resultat: String,
    pub horodatage: DateTime<Local>,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute en tête (plus récente d’abord).
    pub fn ajouter(&mut self, expression_source: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push_front(EntreeHistorique {
            expression_source: expression_source.into(),
            resultat: resultat.into(),
            horodatage: Local::now(),
        });
    }

    /// Entrée n (0 = plus récente).
    pub fn get(&self, n: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(n)
    }

    pub fn entrees(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }
}
