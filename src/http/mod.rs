//! # Módulo HTTP
//!
//! Codec del protocolo: funciones puras que convierten bytes en un
//! [`Request`] y un [`Response`] en bytes. Este módulo no hace I/O.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! [body]
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

/// Única versión soportada
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Terminador de línea
pub const CRLF: &str = "\r\n";

pub use request::{ParseError, Request};
pub use response::{Response, ResponseHead};
pub use status::StatusCode;
