//! Modulo per l'interfaccia utente (TUI)
//!
//! Questo modulo gestisce l'interfaccia utente testuale (TUI) del widget.

pub mod app;
pub mod components;
pub mod log_view;
pub mod pages_view;
pub mod theme;
