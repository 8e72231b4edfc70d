// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + clavier.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier physique est lu ici, une seule fois par frame, puis traduit en
//   Commande (clavier.rs) : même chemin que les boutons.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use clavier::{commande_texte, Commande};

impl AppCalc {
    /// Événements clavier de la frame -> commandes (ordre de frappe conservé).
    fn commandes_clavier(&self, ctx: &egui::Context) -> Vec<Commande> {
        ctx.input(|i| {
            let mut cmds: Vec<Commande> = Vec::new();

            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => cmds.extend(t.chars().filter_map(commande_texte)),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => cmds.push(Commande::Egal),
                        egui::Key::Backspace => cmds.push(Commande::Supprimer),
                        egui::Key::Escape if !self.historique_ouvert => {
                            cmds.push(Commande::Effacer)
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            cmds
        })
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let cmds = self.commandes_clavier(ctx);

        // ESC ferme d’abord la fenêtre d’historique, sinon efface tout (comme AC).
        if self.historique_ouvert && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.historique_ouvert = false;
        }

        for cmd in cmds {
            self.executer(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
