//! Gestione dei temi per l'interfaccia utente (TUI)
//!
//! Questo modulo fornisce la personalizzazione dell'aspetto del widget.
//! Il tema di default riprende i colori della scheda originale: accento
//! blu per le spunte, evidenziazione più scura quando un controllo è
//! premuto.

use cursive::theme::{BaseColor, BorderStyle, Color, Palette, PaletteColor, Theme};

/// Accento blu della spunta selezionata
const ACCENT_BLUE: Color = Color::Rgb(0x24, 0x69, 0xf6);
/// Blu più chiaro usato per lo stato hover
const HOVER_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
/// Blu scuro usato per lo stato premuto
const PRESSED_BLUE: Color = Color::Rgb(0x1d, 0x4e, 0xd8);

/// Tema di default: sfondo del terminale, accenti blu
pub fn default_theme() -> Theme {
    let mut theme = Theme::default();

    let mut palette = Palette::default();
    palette[PaletteColor::Background] = Color::TerminalDefault;
    palette[PaletteColor::View] = Color::TerminalDefault;
    palette[PaletteColor::Primary] = Color::Dark(BaseColor::White);
    palette[PaletteColor::TitlePrimary] = ACCENT_BLUE;
    palette[PaletteColor::Secondary] = Color::Dark(BaseColor::Blue);
    palette[PaletteColor::Highlight] = PRESSED_BLUE;
    palette[PaletteColor::HighlightInactive] = HOVER_BLUE;

    theme.borders = BorderStyle::Simple;
    theme.palette = palette;

    theme
}

/// Tema dark mode
pub fn dark_theme() -> Theme {
    let mut theme = Theme::default();

    let mut palette = Palette::default();
    palette[PaletteColor::Background] = Color::Dark(BaseColor::Black);
    palette[PaletteColor::View] = Color::Dark(BaseColor::Black);
    palette[PaletteColor::Primary] = Color::Light(BaseColor::White);
    palette[PaletteColor::TitlePrimary] = HOVER_BLUE;
    palette[PaletteColor::Secondary] = Color::Light(BaseColor::Blue);
    palette[PaletteColor::Highlight] = ACCENT_BLUE;
    palette[PaletteColor::HighlightInactive] = HOVER_BLUE;

    theme.borders = BorderStyle::Simple;
    theme.palette = palette;

    theme
}

/// Tema high contrast
pub fn high_contrast_theme() -> Theme {
    let mut theme = Theme::default();

    let mut palette = Palette::default();
    palette[PaletteColor::Background] = Color::Dark(BaseColor::Black);
    palette[PaletteColor::View] = Color::Dark(BaseColor::Black);
    palette[PaletteColor::Primary] = Color::Light(BaseColor::White);
    palette[PaletteColor::TitlePrimary] = Color::Light(BaseColor::Yellow);
    palette[PaletteColor::Secondary] = Color::Light(BaseColor::White);
    palette[PaletteColor::Highlight] = Color::Light(BaseColor::Yellow);
    palette[PaletteColor::HighlightInactive] = Color::Light(BaseColor::White);

    theme.borders = BorderStyle::Outset;
    theme.palette = palette;

    theme
}

/// Ottiene un tema in base al nome
pub fn get_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "dark" => dark_theme(),
        "high_contrast" => high_contrast_theme(),
        _ => default_theme(),
    }
}

/// Ottiene la lista dei temi disponibili
pub fn get_available_themes() -> Vec<String> {
    vec![
        "default".to_string(),
        "dark".to_string(),
        "high_contrast".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // La lista pubblicata deve coprire tutti i temi risolvibili, è quella
    // usata per validare l'opzione --theme
    #[test]
    fn every_listed_theme_is_resolvable() {
        let themes = get_available_themes();
        assert!(themes.contains(&"default".to_string()));
        assert!(themes.contains(&"dark".to_string()));
        assert!(themes.contains(&"high_contrast".to_string()));
        for name in &themes {
            let _ = get_theme(name);
        }
    }
}
