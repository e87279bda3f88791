//! Visualizzazione dei log nell'interfaccia utente
//!
//! Questo modulo mostra in un popup la coda del file di log corrente, ad
//! esempio dopo una conferma della selezione.

use cursive::Cursive;
use cursive::traits::*;
use cursive::view::Scrollable;
use cursive::views::{Dialog, TextView};

use crate::logger;

/// Quante righe di log mostrare nel popup
const RECENT_LOG_LINES: usize = 30;

/// Mostra un popup con le righe di log più recenti
pub fn show_recent_logs_popup(siv: &mut Cursive) {
    let content = match logger::get_recent_logs(RECENT_LOG_LINES) {
        Ok(lines) if lines.is_empty() => "Nessun log disponibile".to_string(),
        Ok(lines) => lines.join("\n"),
        Err(e) => format!("Errore nella lettura dei log: {}", e),
    };

    siv.add_layer(
        Dialog::around(TextView::new(content).scrollable())
            .title("Log recenti")
            .button("OK", |s| {
                s.pop_layer();
            })
            .fixed_width(70)
            .fixed_height(15),
    );
}
