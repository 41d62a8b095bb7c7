//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! 1. `tcp`: escucha en un puerto y acepta conexiones entrantes
//! 2. `connection`: lee, parsea, despacha y responde en cada conexión

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{Connection, ConnectionLimits};
pub use tcp::Server;
