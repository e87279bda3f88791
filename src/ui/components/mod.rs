// File: src/ui/components/mod.rs

//! Componenti riutilizzabili per l'interfaccia utente
//!
//! Questo modulo fornisce i controlli di base del widget: il modello di
//! selezione, la macchina a stati visiva e le viste toggle/bottone.

pub mod button;
pub mod interaction;
pub mod selection;
pub mod toggle;
