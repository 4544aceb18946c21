use std::str::FromStr;

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Nivel pedido o `Warn` si el texto no es un nivel válido.
pub fn level_filter(level: &str) -> LevelFilter { LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn) }

/// Instala el logger en stderr. Una segunda llamada no hace nada.
pub fn init_logging(level: &str) {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    let _ = TermLogger::init(level_filter(level), config, TerminalMode::Stderr, ColorChoice::Auto);
}
