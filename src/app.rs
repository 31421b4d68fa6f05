// src/app.rs
//
// Calculatrice rose — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + theme.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App
//
// Important:
// - La gestion clavier (caractères, Enter, Backspace, copier/coller)
//   est faite dans vue.rs ; ici seulement Échap (= bouton "C") et la
//   composition des panneaux.

pub mod etat;
pub mod theme;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.theme.visuals());

        // Raccourci clavier global minimal : ESC = effacer la saisie.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.sur_touche("C");
        }

        egui::SidePanel::right("panneau_historique")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_historique(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
