use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use env_logger::Builder;
use log::{LevelFilter, info, warn};

mod config;
mod logger;
mod ui;

use crate::config::{Config, create_example_config};
use crate::ui::app::run_app;
use crate::ui::theme;

fn main() -> Result<()> {
    // Parsing degli argomenti da linea di comando
    let matches = Command::new("Selene")
        .version("0.1.0")
        .author("Selene Team")
        .about("Widget TUI per la selezione di pagine da una lista fissa")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Specifica un file di configurazione personalizzato"),
        )
        .arg(
            Arg::new("create-example")
                .long("create-example")
                .value_name("FILE")
                .help("Crea un file di configurazione di esempio"),
        )
        .arg(
            Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("NAME")
                .help("Sovrascrive il tema dell'interfaccia utente"),
        )
        .arg(
            Arg::new("pages")
                .short('p')
                .long("pages")
                .value_name("LABELS")
                .help("Etichette delle pagine separate da virgola (sovrascrive la configurazione)"),
        )
        .get_matches();

    // Gestione dell'opzione per creare un file di configurazione di esempio
    if let Some(example_path) = matches.get_one::<String>("create-example") {
        match create_example_config(Path::new(example_path)) {
            Ok(_) => {
                println!(
                    "File di configurazione di esempio creato con successo in: {}",
                    example_path
                );
                process::exit(0);
            }
            Err(e) => {
                eprintln!(
                    "Errore durante la creazione del file di configurazione di esempio: {}",
                    e
                );
                process::exit(1);
            }
        }
    }

    // Caricamento della configurazione
    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());
    let mut config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Errore durante il caricamento della configurazione: {}", e);
            eprintln!(
                "Prova ad eseguire il programma con l'opzione --create-example per creare una configurazione di esempio"
            );
            process::exit(1);
        }
    };

    // Configurazione del logger: su file, per non sporcare la TUI. Se il
    // file non è utilizzabile si ripiega sulla console.
    if let Err(e) = logger::init_file_logger(&config.log_dir) {
        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Info).init();
        warn!(
            "Logger su file non disponibile ({}), log sulla console",
            e
        );
    }

    // Override da linea di comando
    if let Some(theme_name) = matches.get_one::<String>("theme") {
        let available = theme::get_available_themes();
        if available.contains(theme_name) {
            config.ui_theme = theme_name.clone();
        } else {
            warn!(
                "Tema sconosciuto: {} (disponibili: {})",
                theme_name,
                available.join(", ")
            );
        }
    }
    if let Some(pages) = matches.get_one::<String>("pages") {
        config.pages = pages
            .split(',')
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
    }

    info!("Configurazione caricata, {} pagine", config.pages.len());

    // Avvio dell'applicazione
    run_app(config).context("Errore durante l'esecuzione dell'applicazione")?;

    Ok(())
}
