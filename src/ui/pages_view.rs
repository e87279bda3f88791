//! Pannello di selezione delle pagine
//!
//! Questo modulo costruisce la scheda principale del widget: la riga
//! "All pages", la lista scorrevole delle pagine e il bottone di conferma,
//! separati da divisori. Ogni toggle è legato allo stato di selezione
//! condiviso; dopo ogni mutazione tutte le spunte vengono riallineate al
//! modello.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use log::info;

use cursive::Cursive;
use cursive::traits::*;
use cursive::view::Scrollable;
use cursive::views::{Dialog, DummyView, LinearLayout, TextView};

use crate::config::Config;
use crate::ui::app::{LABEL_WIDTH, PAGES_VIEW_HEIGHT, PANEL_WIDTH, WINDOW_WIDTH};
use crate::ui::components::button::ActionButton;
use crate::ui::components::selection::SharedSelection;
use crate::ui::components::toggle::{FlashStyle, ToggleView};
use crate::ui::log_view;

/// Callback di conferma fornita dall'embedder: riceve le etichette
/// selezionate nell'ordine originale della lista
pub type DoneCallback = Arc<dyn Fn(&[String]) + Send + Sync>;

/// Nome della vista del toggle aggregato
const ALL_TOGGLE_NAME: &str = "all_pages_toggle";

fn page_toggle_name(idx: usize) -> String {
    format!("page_toggle_{}", idx)
}

/// Crea la scheda di selezione pagine e la aggiunge alla UI
pub fn create_pages_view(
    siv: &mut Cursive,
    config: Arc<Mutex<Config>>,
    selection: SharedSelection,
    on_done: DoneCallback,
) -> Result<()> {
    let flash = {
        let config_guard = config
            .lock()
            .map_err(|_| anyhow!("Failed to lock config mutex"))?;
        if config_guard.click_flash {
            FlashStyle::with_duration(Duration::from_millis(config_guard.flash_duration_ms))
        } else {
            FlashStyle::disabled()
        }
    };

    // Stato iniziale letto dal modello di selezione
    let (pages, initial_checked, initial_all) = {
        let sel = selection
            .lock()
            .map_err(|_| anyhow!("Failed to lock selection mutex"))?;
        let pages = sel.pages().to_vec();
        let checked: Vec<bool> = (0..pages.len()).map(|idx| sel.is_selected(idx)).collect();
        let all = sel.all_selected();
        (pages, checked, all)
    };

    // Riga aggregata "All pages": il toggle svuota o riempie la selezione
    // in un colpo solo
    let all_toggle = {
        let selection = Arc::clone(&selection);
        ToggleView::new(ALL_TOGGLE_NAME, move |s| {
            if let Ok(mut sel) = selection.lock() {
                sel.toggle_all();
                info!("Toggle aggregato: {} pagine selezionate", sel.count());
            }
            refresh_toggles(s, &selection);
        })
        .checked(initial_all)
        .flash(flash.clone())
        .with_name(ALL_TOGGLE_NAME)
    };

    // Una riga per pagina, in ordine fisso
    let mut page_rows = LinearLayout::vertical();
    for (idx, label) in pages.iter().enumerate() {
        let toggle = {
            let selection = Arc::clone(&selection);
            ToggleView::new(page_toggle_name(idx), move |s| {
                if let Ok(mut sel) = selection.lock() {
                    sel.toggle(idx);
                }
                refresh_toggles(s, &selection);
            })
            .checked(initial_checked[idx])
            .flash(flash.clone())
            .with_name(page_toggle_name(idx))
        };
        page_rows.add_child(toggle_row(label, toggle));
    }

    // Bottone di conferma: consegna le etichette selezionate alla callback
    // esterna, in ordine di lista
    let done_button = {
        let selection = Arc::clone(&selection);
        let on_done = Arc::clone(&on_done);
        ActionButton::new("Done", move |_s| {
            let labels = match selection.lock() {
                Ok(sel) => sel.selected_labels(),
                Err(_) => return,
            };
            info!("Conferma selezione: {} pagine", labels.len());
            on_done(&labels);
        })
    };

    // La lista delle pagine scorre dentro una regione ad altezza fissa
    let layout = LinearLayout::vertical()
        .child(toggle_row("All pages", all_toggle))
        .child(divider())
        .child(page_rows.scrollable().fixed_height(PAGES_VIEW_HEIGHT))
        .child(divider())
        .child(
            LinearLayout::horizontal()
                .child(DummyView.fixed_width(PANEL_WIDTH.saturating_sub(8) / 2))
                .child(done_button),
        );

    siv.add_layer(
        Dialog::around(layout)
            .title("Selezione pagine")
            .button("Log", |s| {
                log_view::show_recent_logs_popup(s);
            })
            .button("Quit", |s| {
                s.add_layer(
                    Dialog::around(TextView::new("Sei sicuro di voler uscire?"))
                        .title("Conferma uscita")
                        .button("No", |s| {
                            s.pop_layer();
                        })
                        .button("Sì", |s| s.quit()),
                );
            })
            .fixed_width(WINDOW_WIDTH),
    );

    Ok(())
}

/// Riga etichetta + controllo, con il controllo allineato a destra
fn toggle_row<V>(label: &str, control: V) -> LinearLayout
where
    V: cursive::view::IntoBoxedView + 'static,
{
    LinearLayout::horizontal()
        .child(TextView::new(label).fixed_width(LABEL_WIDTH))
        .child(control)
}

/// Divisore orizzontale tra le sezioni della scheda
fn divider() -> TextView {
    TextView::new("─".repeat(PANEL_WIDTH))
}

/// Riallinea tutte le spunte allo stato del modello: l'unico scrittore è il
/// coordinatore, le viste sono solo lettori
fn refresh_toggles(s: &mut Cursive, selection: &SharedSelection) {
    let (page_states, all) = match selection.lock() {
        Ok(sel) => {
            let states: Vec<bool> = (0..sel.pages().len())
                .map(|idx| sel.is_selected(idx))
                .collect();
            (states, sel.all_selected())
        }
        Err(_) => return,
    };

    for (idx, checked) in page_states.into_iter().enumerate() {
        s.call_on_name(&page_toggle_name(idx), |view: &mut ToggleView| {
            view.set_checked(checked);
        });
    }
    s.call_on_name(ALL_TOGGLE_NAME, |view: &mut ToggleView| {
        view.set_checked(all);
    });
}
