// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Pavé 7×4 identique à la disposition d’origine, protocole de touches
//   uniforme (chaque bouton envoie son libellé à sur_touche)
// - Clavier global : caractères admis, Enter évalue, Backspace efface,
//   Ctrl+C / Ctrl+V passent par le presse-papiers
// - Panneau historique à droite (défilant, le plus récent en bas)
//
// Note :
// - L’affichage n’est PAS un TextEdit : la saisie appartient au noyau,
//   la vue ne fait que router des touches et rendre le texte.

use eframe::egui;

use super::etat::AppCalc;

/// Caractères que le clavier physique peut injecter directement.
const TOUCHES_CLAVIER: &str = "0123456789+-*/().^";

/// Disposition du pavé ("" = case vide). Chaque libellé est aussi la
/// touche envoyée à sur_touche.
const PAVE: [[&str; 4]; 7] = [
    ["sin", "cos", "tan", "log"],
    ["sqrt", "^", "(", ")"],
    ["C", "/", "*", "<-"],
    ["7", "8", "9", "-"],
    ["4", "5", "6", "+"],
    ["1", "2", "3", "="],
    ["0", ".", "", ""],
];

impl AppCalc {
    /// UI principale : à appeler depuis le CentralPanel.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.gerer_clavier(ui);

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice rose");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let libelle = self.theme.bascule().etiquette();
                if ui.button(libelle).clicked() {
                    self.basculer_theme();
                }
            });
        });

        ui.add_space(6.0);
        self.ui_affichage(ui);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    /// Champ d’affichage (lecture seule) + actions presse-papiers.
    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(self.saisie.texte());
                });
            });

        // Équivalent du menu contextuel Copier/Coller
        ui.horizontal(|ui| {
            if ui.small_button("Copier").clicked() {
                self.copier();
            }
            if ui.small_button("Coller").clicked() {
                self.coller();
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        if touche.is_empty() {
                            ui.label("");
                            continue;
                        }
                        let resp = ui.add_sized([64.0, 36.0], egui::Button::new(touche));
                        if resp.clicked() {
                            self.sur_touche(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /// Panneau historique (panneau latéral droit).
    pub(crate) fn ui_historique(&self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.historique.est_vide() {
                    ui.weak("(aucun calcul)");
                    return;
                }
                for entree in self.historique.entrees() {
                    ui.monospace(entree.to_string());
                }
            });
    }

    /// Clavier global : mêmes liaisons que les boutons.
    /// (Pas de TextEdit focalisable, donc pas de double saisie.)
    fn gerer_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(txt) => {
                    for c in txt.chars() {
                        if TOUCHES_CLAVIER.contains(c) {
                            self.sur_touche(&c.to_string());
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.sur_touche("="),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.sur_touche("<-"),
                egui::Event::Copy => {
                    ui.ctx().copy_text(self.saisie.texte().to_string());
                }
                egui::Event::Paste(texte) => {
                    // texte brut : le filtre vit dans la saisie
                    self.coller_texte(&texte);
                }
                _ => {}
            }
        }
    }
}
