//! Modulo per la gestione centralizzata dei log su file
//!
//! Questo modulo scrive i log su file invece che su console: con la TUI
//! attiva, stampare su stdout corromperebbe lo schermo.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use lazy_static::lazy_static;

// Singleton per il file di log e il suo percorso
lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
    static ref LOG_FILE_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Inizializza il sistema di logging su file (solo su file, non su console)
pub fn init_file_logger(log_dir: &str) -> Result<()> {
    // Crea la directory dei log se non esiste
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    // Crea il nome del file di log con timestamp
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file_path = Path::new(log_dir).join(format!("selene_{}.log", timestamp));

    // Apri il file in modalità append
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .context("Failed to open log file")?;

    // Salva file e percorso nei singleton
    if let Ok(mut log_file_guard) = LOG_FILE.lock() {
        *log_file_guard = Some(file);
    }
    if let Ok(mut path_guard) = LOG_FILE_PATH.lock() {
        *path_guard = Some(log_file_path.clone());
    }

    // Configura il logger per scrivere SOLO sul file, non su stdout
    log::set_boxed_logger(Box::new(FileLogger))
        .map(|()| log::set_max_level(log::LevelFilter::Info))
        .context("Failed to set logger")?;

    log::info!("Logger initialized, writing to: {:?}", log_file_path);
    Ok(())
}

/// Scrive un messaggio di log manualmente
pub fn log_to_file(message: &str) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let formatted = format!("[{}] {}\n", timestamp, message);

    if let Ok(log_file_guard) = LOG_FILE.lock() {
        if let Some(mut file) = log_file_guard.as_ref() {
            file.write_all(formatted.as_bytes())
                .context("Failed to write to log file")?;
            file.flush().context("Failed to flush log file")?;
        }
    }

    Ok(())
}

/// Restituisce le ultime `lines` righe del file di log corrente
pub fn get_recent_logs(lines: usize) -> Result<Vec<String>> {
    let path = {
        match LOG_FILE_PATH.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(path) => path.clone(),
                None => return Ok(Vec::new()),
            },
            Err(_) => return Ok(Vec::new()),
        }
    };

    let content = fs::read_to_string(&path).context("Failed to read log file")?;
    let all_lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
    let start = all_lines.len().saturating_sub(lines);
    Ok(all_lines[start..].to_vec())
}

/// Implementazione di un logger personalizzato che scrive solo su file
struct FileLogger;

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let formatted = format!(
                "[{}] {} {}: {}\n",
                timestamp,
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            );

            if let Ok(log_file_guard) = LOG_FILE.lock() {
                if let Some(mut file) = log_file_guard.as_ref() {
                    let _ = file.write_all(formatted.as_bytes());
                    let _ = file.flush();
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(log_file_guard) = LOG_FILE.lock() {
            if let Some(mut file) = log_file_guard.as_ref() {
                let _ = file.flush();
            }
        }
    }
}
