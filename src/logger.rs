//! # Logging
//! src/logger.rs
//!
//! Logger de terminal sobre `simplelog`. Todo va a stderr para no mezclarse
//! con la salida del proceso.

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn prepare_logger_config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_time_format_custom(simplelog::format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ))
        .set_time_offset_to_local()
        .unwrap_or_else(|builder| builder)
        .build()
}

/// Inicializa el logger global con el nivel pedido
///
/// Falla si ya había un logger instalado.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    TermLogger::init(
        level,
        prepare_logger_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_only_once() {
        // El primer init puede fallar si otro test ya instaló el logger
        let _ = init_logger(LevelFilter::Warn);
        assert!(init_logger(LevelFilter::Warn).is_err());
    }
}
