// src/main.rs
//
// Calculatrice rose — point d’entrée natif
// ----------------------------------------
// - eframe::run_native + NativeOptions
// - journalisation tracing (filtre via RUST_LOG)
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice rose";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 460.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
