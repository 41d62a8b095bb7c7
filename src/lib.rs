//! # minihttp
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero sobre `std::net`.
//! Acepta conexiones TCP, parsea un request por lectura y lo despacha a
//! un conjunto fijo de rutas.
//!
//! ## Arquitectura
//!
//! ```text
//! socket → http::Request::parse → router::Router → http::Response::to_bytes → socket
//! ```
//!
//! - `http`: codec del protocolo (sin I/O)
//! - `server`: aceptación de conexiones y loop por conexión
//! - `router`: tabla de rutas inmutable
//! - `handlers`: `/`, `/echo`, `/user-agent`, `/files`
//! - `config`: argumentos CLI y variables de entorno
//! - `logger`: inicialización del logging
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use minihttp::config::Config;
//! use minihttp::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al abrir el puerto");
//! server.run().expect("Error en el servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;

pub use error::ServerError;
