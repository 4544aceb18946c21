//! Carga de configuración desde variables de entorno (`.env` incluido).
//!
//! Variables reconocidas: `A2AM_NUMBER_OF_CPU_CORES`, `A2AM_BATCH_SIZE`,
//! `A2AM_AAM_TIMEOUT_MS`, `A2AM_SHOW_PROGRESS`, `A2AM_LOG_LEVEL`. Un valor
//! que no se puede interpretar deja el valor por defecto.
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A2amConfig {
    /// Trabajadores del pool de EPAM Indigo.
    pub number_of_cpu_cores: usize,
    /// Tamaño de bloque de RXNMapper.
    pub batch_size: usize,
    /// `aam-timeout` de EPAM Indigo.
    pub aam_timeout_ms: u64,
    pub show_progress: bool,
    pub log_level: String,
}

impl Default for A2amConfig {
    fn default() -> Self {
        Self { number_of_cpu_cores: 1,
               batch_size: 10,
               aam_timeout_ms: 10_000,
               show_progress: true,
               log_level: "warn".to_string() }
    }
}

impl A2amConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que [`A2amConfig::from_env`] pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let number_of_cpu_cores = lookup("A2AM_NUMBER_OF_CPU_CORES").and_then(|v| v.trim().parse::<usize>().ok())
                                                                    .filter(|n| *n > 0)
                                                                    .unwrap_or(defaults.number_of_cpu_cores);
        let batch_size = lookup("A2AM_BATCH_SIZE").and_then(|v| v.trim().parse::<usize>().ok())
                                                  .filter(|n| *n > 0)
                                                  .unwrap_or(defaults.batch_size);
        let aam_timeout_ms = lookup("A2AM_AAM_TIMEOUT_MS").and_then(|v| v.trim().parse::<u64>().ok())
                                                          .filter(|n| *n > 0)
                                                          .unwrap_or(defaults.aam_timeout_ms);
        let show_progress = lookup("A2AM_SHOW_PROGRESS").and_then(|v| parse_flag(&v))
                                                        .unwrap_or(defaults.show_progress);
        let log_level = lookup("A2AM_LOG_LEVEL").map(|v| v.trim().to_lowercase())
                                                .filter(|v| !v.is_empty())
                                                .unwrap_or(defaults.log_level);
        Self { number_of_cpu_cores, batch_size, aam_timeout_ms, show_progress, log_level }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
