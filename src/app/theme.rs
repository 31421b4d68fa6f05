// src/app/theme.rs
//
// Thèmes clair/sombre de la calculatrice.
// Les palettes reprennent les tons rose/prune d’origine et sont
// projetées sur egui::Visuals (fond, champs, boutons, textes).

use eframe::egui::{Color32, Visuals};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Clair,
    Sombre,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Clair
    }
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Clair => Theme::Sombre,
            Theme::Sombre => Theme::Clair,
        }
    }

    pub fn etiquette(self) -> &'static str {
        match self {
            Theme::Clair => "Thème clair",
            Theme::Sombre => "Thème sombre",
        }
    }

    /// Palette egui complète pour ce thème.
    pub fn visuals(self) -> Visuals {
        match self {
            Theme::Clair => {
                let mut v = Visuals::light();
                v.panel_fill = Color32::from_rgb(0xf8, 0xc9, 0xe1); // fond
                v.window_fill = Color32::from_rgb(0xff, 0xe3, 0xf0);
                v.extreme_bg_color = Color32::from_rgb(0xff, 0xb6, 0xc1); // champ d’entrée
                v.faint_bg_color = Color32::from_rgb(0xff, 0xf0, 0xfa); // liste historique

                let bouton = Color32::from_rgb(0xf7, 0x85, 0xbe);
                let bouton_actif = Color32::from_rgb(0xff, 0xb6, 0xc1);
                v.widgets.inactive.bg_fill = bouton;
                v.widgets.inactive.weak_bg_fill = bouton;
                v.widgets.hovered.bg_fill = bouton_actif;
                v.widgets.hovered.weak_bg_fill = bouton_actif;
                v.widgets.active.bg_fill = bouton_actif;
                v.widgets.active.weak_bg_fill = bouton_actif;

                v.widgets.inactive.fg_stroke.color = Color32::WHITE;
                v.widgets.hovered.fg_stroke.color = Color32::WHITE;
                v.widgets.active.fg_stroke.color = Color32::WHITE;
                v.widgets.noninteractive.fg_stroke.color = Color32::from_rgb(0xa1, 0x4d, 0x7f);

                v
            }
            Theme::Sombre => {
                let mut v = Visuals::dark();
                v.panel_fill = Color32::from_rgb(0x7a, 0x31, 0x61);
                v.window_fill = Color32::from_rgb(0x4a, 0x20, 0x40);
                v.extreme_bg_color = Color32::from_rgb(0xa1, 0x4d, 0x7f);
                v.faint_bg_color = Color32::from_rgb(0xa1, 0x4d, 0x7f);

                let bouton = Color32::from_rgb(0xc8, 0x5a, 0x9e);
                let bouton_actif = Color32::from_rgb(0xa1, 0x4d, 0x7f);
                v.widgets.inactive.bg_fill = bouton;
                v.widgets.inactive.weak_bg_fill = bouton;
                v.widgets.hovered.bg_fill = bouton_actif;
                v.widgets.hovered.weak_bg_fill = bouton_actif;
                v.widgets.active.bg_fill = bouton_actif;
                v.widgets.active.weak_bg_fill = bouton_actif;

                v.widgets.inactive.fg_stroke.color = Color32::WHITE;
                v.widgets.hovered.fg_stroke.color = Color32::WHITE;
                v.widgets.active.fg_stroke.color = Color32::WHITE;
                v.widgets.noninteractive.fg_stroke.color = Color32::from_rgb(0xff, 0xe3, 0xf0);

                v
            }
        }
    }
}
