//! # Errores del Servidor
//!
//! Errores fatales de arranque. Los errores de parsing viven en
//! [`crate::http::ParseError`] y nunca salen del loop de la conexión.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo abrir el puerto
    #[error("failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Configuración inválida
    #[error("invalid configuration: {0}")]
    Config(String),

    /// El logger global ya estaba inicializado
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
