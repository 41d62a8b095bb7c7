//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI o variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./minihttp --directory /srv/files \
//!   --port 4221 \
//!   --max-connections 128
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 FILES_DIR=/srv/files ./minihttp
//! ```

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "minihttp")]
#[command(about = "Servidor HTTP/1.1 mínimo: echo, user-agent y archivos estáticos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Directorio desde el que /files/<name> sirve archivos
    #[arg(short, long, default_value_os_t = std::env::temp_dir(), env = "FILES_DIR")]
    pub directory: PathBuf,

    /// Máximo de conexiones atendidas a la vez (0 = un thread por conexión, sin límite)
    #[arg(long = "max-connections", default_value = "0", env = "MAX_CONNECTIONS")]
    pub max_connections: usize,

    /// Tamaño del buffer de lectura por request, en bytes
    #[arg(long = "buffer-size", default_value = "1024", env = "BUFFER_SIZE")]
    pub buffer_size: usize,

    /// Errores de lectura consecutivos tolerados antes de cerrar la conexión
    #[arg(long = "max-read-retries", default_value = "16", env = "MAX_READ_RETRIES")]
    pub max_read_retries: u32,

    /// Nivel de log (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use minihttp::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.buffer_size == 0 {
            return Err("Buffer size must be >= 1".to_string());
        }
        if self.max_read_retries == 0 {
            return Err("Max read retries must be >= 1".to_string());
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn print_summary(&self) {
        log::info!("Address:          {}", self.address());
        log::info!("Files directory:  {}", self.directory.display());
        if self.max_connections > 0 {
            log::info!("Max connections:  {}", self.max_connections);
        } else {
            log::info!("Max connections:  unbounded (thread per connection)");
        }
        log::info!("Buffer size:      {} bytes", self.buffer_size);
        log::info!("Read retries:     {}", self.max_read_retries);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4221,
            directory: std::env::temp_dir(),
            max_connections: 0,
            buffer_size: 1024,
            max_read_retries: 16,
            log_level: LevelFilter::Info,
        }
    }
}
