// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran deux lignes : expression (haut), résultat (bas)
// - Pavé principal + panneau scientifique repliable
// - Fenêtre d’historique : clic = rappel, bouton « Vider »
//
// Note :
// - Le clavier physique est lu dans app.rs (une fois par frame)

use eframe::egui;

use super::clavier::Commande;
use super::etat::AppCalc;

const TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Historique").clicked() {
                    self.historique_ouvert = true;
                }
                let sci = ui.add(egui::Button::new("Sci").selected(self.scientifique_visible));
                if sci.on_hover_text("Fonctions scientifiques").clicked() {
                    self.basculer_scientifique();
                }
            });
        });

        ui.add_space(6.0);
        self.ui_ecran(ui);
        ui.add_space(8.0);

        if self.scientifique_visible {
            self.ui_scientifique(ui);
            ui.add_space(6.0);
        }

        self.ui_pave_numerique(ui);

        let ctx = ui.ctx().clone();
        self.ui_historique(&ctx);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur_resultat = if self.dernier_echec {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.calc.texte_expression())
                            .monospace()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(self.calc.texte_resultat())
                            .monospace()
                            .size(32.0)
                            .color(couleur_resultat),
                    );
                });
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "sin", Commande::Jeton("sin("));
                self.touche(ui, "cos", Commande::Jeton("cos("));
                self.touche(ui, "tan", Commande::Jeton("tan("));
                self.touche(ui, "(", Commande::Jeton("("));
                ui.end_row();

                self.touche(ui, "asin", Commande::Jeton("asin("));
                self.touche(ui, "acos", Commande::Jeton("acos("));
                self.touche(ui, "atan", Commande::Jeton("atan("));
                self.touche(ui, ")", Commande::Jeton(")"));
                ui.end_row();

                self.touche(ui, "log", Commande::Jeton("log("));
                self.touche(ui, "√", Commande::Jeton("√("));
                self.touche(ui, "π", Commande::Jeton("π"));
                self.touche(ui, "e", Commande::Jeton("e"));
                ui.end_row();
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "AC", Commande::Effacer);
                self.touche(ui, "DEL", Commande::Supprimer);
                self.touche(ui, "%", Commande::Jeton("%"));
                self.touche(ui, "÷", Commande::Jeton("÷"));
                ui.end_row();

                self.touche(ui, "7", Commande::Jeton("7"));
                self.touche(ui, "8", Commande::Jeton("8"));
                self.touche(ui, "9", Commande::Jeton("9"));
                self.touche(ui, "×", Commande::Jeton("×"));
                ui.end_row();

                self.touche(ui, "4", Commande::Jeton("4"));
                self.touche(ui, "5", Commande::Jeton("5"));
                self.touche(ui, "6", Commande::Jeton("6"));
                self.touche(ui, "−", Commande::Jeton("-"));
                ui.end_row();

                self.touche(ui, "1", Commande::Jeton("1"));
                self.touche(ui, "2", Commande::Jeton("2"));
                self.touche(ui, "3", Commande::Jeton("3"));
                self.touche(ui, "+", Commande::Jeton("+"));
                ui.end_row();

                self.touche(ui, "0", Commande::Jeton("0"));
                self.touche(ui, ".", Commande::Jeton("."));
                self.touche(ui, "^", Commande::Jeton("^"));
                self.touche(ui, "=", Commande::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ctx: &egui::Context) {
        if !self.historique_ouvert {
            return;
        }

        // Actions décidées dans la fenêtre, appliquées après (emprunts egui)
        let mut ouvert = true;
        let mut choix: Option<usize> = None;
        let mut vider = false;

        egui::Window::new("Historique")
            .open(&mut ouvert)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let h = self.calc.historique();

                if h.is_empty() {
                    ui.label("Pas encore d’historique.");
                } else {
                    egui::ScrollArea::vertical()
                        .max_height(320.0)
                        .show(ui, |ui| {
                            for (n, e) in h.entrees().enumerate() {
                                let texte = format!(
                                    "{}  {}\n= {}",
                                    e.horodatage.format("%H:%M:%S"),
                                    e.expression_source,
                                    e.resultat
                                );
                                let b = egui::Button::new(egui::RichText::new(texte).monospace());
                                if ui.add(b).clicked() {
                                    choix = Some(n);
                                }
                            }
                        });
                }

                ui.separator();
                if ui.add_enabled(!h.is_empty(), egui::Button::new("Vider")).clicked() {
                    vider = true;
                }
            });

        if vider {
            self.vider_historique();
        }
        if let Some(n) = choix {
            self.rappeler(n);
        }
        if !ouvert {
            self.historique_ouvert = false;
        }
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, cmd: Commande) {
        if ui.add_sized(TOUCHE, egui::Button::new(label)).clicked() {
            self.executer(cmd);
        }
    }
}
