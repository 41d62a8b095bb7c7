//! # Handlers de las Rutas
//!
//! Cada handler recibe el [`Request`](crate::http::Request) parseado y el
//! [`RouteContext`](crate::router::RouteContext) de la ruta que coincidió,
//! y retorna exactamente una Response. Los errores (archivo inexistente,
//! falla de I/O) se convierten en un código de estado; nunca se propagan
//! al loop de la conexión.
//!
//! - **basic**: `/`, `/echo/<text>`, `/user-agent`
//! - **files**: `/files/<name>`

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;
