//! Applicazione TUI principale
//!
//! Questo modulo avvia cursive, applica il tema configurato e monta la
//! scheda di selezione pagine come schermata principale.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::logger;
use crate::ui::components::selection::new_shared_selection;
use crate::ui::pages_view::{self, DoneCallback};
use crate::ui::theme;

// Dimensioni standard della scheda
pub const WINDOW_WIDTH: usize = 44;
pub const PANEL_WIDTH: usize = 38;
pub const LABEL_WIDTH: usize = 32;
/// Righe di pagine visibili prima che la lista scorra
pub const PAGES_VIEW_HEIGHT: usize = 4;

/// Avvia l'applicazione TUI
pub fn run_app(config: Config) -> Result<()> {
    // Crea l'oggetto Cursive per la TUI
    let mut siv = cursive::default();

    // Imposta il tema
    siv.set_theme(theme::get_theme(&config.ui_theme));

    // La selezione parte vuota sulla lista di pagine configurata
    let selection = new_shared_selection(config.pages.clone());

    // Callback di conferma di default: riporta la selezione sul log di
    // diagnostica. Un embedding reale la sostituirebbe con la propria
    // logica a valle.
    let on_done: DoneCallback = Arc::new(|labels: &[String]| {
        info!("Pagine selezionate: [{}]", labels.join(", "));
        let _ = logger::log_to_file(&format!("Selezione confermata: [{}]", labels.join(", ")));
    });

    let config = Arc::new(Mutex::new(config));
    pages_view::create_pages_view(&mut siv, config, selection, on_done)?;

    // Esegui il loop principale
    siv.run();

    Ok(())
}
