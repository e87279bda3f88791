//! Gestione della configurazione per Selene
//!
//! Questo modulo gestisce il caricamento e il salvataggio della
//! configurazione dell'applicazione in formato TOML. La lista delle pagine
//! è l'input dell'embedder: il widget non la modifica mai a runtime.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Struttura principale di configurazione per Selene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Etichette delle pagine selezionabili, in ordine fisso.
    /// Le etichette si assumono uniche: un duplicato renderebbe ambigua
    /// l'appartenenza alla selezione e non viene verificato a runtime.
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,

    /// Tema dell'interfaccia utente
    #[serde(default = "default_ui_theme")]
    pub ui_theme: String,

    /// Abilita il flash transitorio sul click dei toggle
    #[serde(default = "default_click_flash")]
    pub click_flash: bool,

    /// Durata del flash in millisecondi
    #[serde(default = "default_flash_duration_ms")]
    pub flash_duration_ms: u64,

    /// Directory per i file di log
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Percorso del file di configurazione caricato
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

fn default_pages() -> Vec<String> {
    (1..=6).map(|i| format!("Page {}", i)).collect()
}

fn default_ui_theme() -> String {
    "default".to_string()
}

fn default_click_flash() -> bool {
    true
}

fn default_flash_duration_ms() -> u64 {
    150
}

fn default_log_dir() -> String {
    dirs::data_local_dir()
        .map(|d| d.join("selene").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pages: default_pages(),
            ui_theme: default_ui_theme(),
            click_flash: default_click_flash(),
            flash_duration_ms: default_flash_duration_ms(),
            log_dir: default_log_dir(),
            config_file_path: None,
        }
    }
}

impl Config {
    /// Carica la configurazione da un file
    pub fn load(path: Option<&str>) -> Result<Self> {
        // Se è specificato un path esplicito, prova a caricare da lì
        if let Some(explicit_path) = path {
            info!(
                "Tentativo di caricamento configurazione da: {}",
                explicit_path
            );
            match Config::from_file(Path::new(explicit_path)) {
                Ok(config) => {
                    info!(
                        "Configurazione caricata con successo da: {}",
                        explicit_path
                    );
                    return Ok(config);
                }
                Err(e) => {
                    warn!(
                        "Impossibile caricare la configurazione da {}: {}",
                        explicit_path, e
                    );
                }
            }
        }

        // Prova il percorso standard per-utente
        let default_path = get_default_config_path();
        if default_path.exists() {
            info!("Caricamento configurazione da: {:?}", default_path);
            return Config::from_file(&default_path);
        }

        // Nessuna configurazione trovata: crea e salva quella di default
        info!("Creazione di una configurazione di default");
        let mut default_config = Config::default();
        default_config.save(&default_path)?;
        info!("Configurazione di default salvata in: {:?}", default_path);
        default_config.config_file_path = Some(default_path);

        Ok(default_config)
    }

    /// Carica la configurazione da un percorso specifico
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Impossibile leggere il file di configurazione {:?}", path))?;
        let mut config: Config = toml::from_str(&text)
            .with_context(|| format!("File di configurazione non valido: {:?}", path))?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Salva la configurazione su file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .context("Impossibile creare la directory per la configurazione")?;
            }
        }

        let text = toml::to_string_pretty(self)
            .context("Impossibile serializzare la configurazione")?;
        fs::write(path, text)
            .with_context(|| format!("Impossibile scrivere la configurazione in {:?}", path))?;

        Ok(())
    }
}

/// Percorso standard per-utente del file di configurazione
pub fn get_default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("selene"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("selene.toml")
}

/// Crea un file di configurazione di esempio
pub fn create_example_config(path: &Path) -> Result<()> {
    Config::default().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_has_six_pages() {
        let config = Config::default();
        assert_eq!(config.pages.len(), 6);
        assert_eq!(config.pages[0], "Page 1");
        assert_eq!(config.pages[5], "Page 6");
        assert!(config.click_flash);
        assert_eq!(config.flash_duration_ms, 150);
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("selene.toml");

        let mut config = Config::default();
        config.ui_theme = "dark".to_string();
        config.pages = vec!["Intro".to_string(), "Summary".to_string()];
        config.save(&path).expect("save config");

        let reloaded = Config::from_file(&path).expect("reload config");
        assert_eq!(reloaded.ui_theme, "dark");
        assert_eq!(reloaded.pages, config.pages);
        assert_eq!(reloaded.config_file_path, Some(path));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("ui_theme = \"dark\"").expect("parse");
        assert_eq!(config.ui_theme, "dark");
        assert_eq!(config.pages.len(), 6);
        assert_eq!(config.flash_duration_ms, 150);
    }

    #[test]
    fn example_config_is_loadable() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("example.toml");
        create_example_config(&path).expect("create example");
        let config = Config::from_file(&path).expect("load example");
        assert_eq!(config.pages.len(), 6);
    }
}
