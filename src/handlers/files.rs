//! # Servir Archivos
//! src/handlers/files.rs
//!
//! `/files/<name>` lee `<directory>/<name>` de forma síncrona. La lectura
//! solo bloquea el thread de la conexión que la pidió.

use crate::http::{Request, Response, StatusCode};
use crate::router::RouteContext;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};

const OCTET_STREAM: &str = "application/octet-stream";

/// Handler para `/files/<name>`
///
/// - 200 con el contenido y `Content-Type: application/octet-stream`
/// - 404 si el archivo no existe o el nombre sale del directorio
/// - 500 ante cualquier otro error de I/O
pub fn files_handler(_req: &Request, ctx: &RouteContext<'_>) -> Response {
    let name = Path::new(ctx.tail);
    if !is_plain_relative(name) {
        log::warn!("rejected file name outside serving directory: {}", ctx.tail);
        return Response::empty(StatusCode::NOT_FOUND);
    }

    let filepath = ctx.files_dir.join(name);
    match fs::read(&filepath) {
        Ok(data) => Response::new(StatusCode::OK, data).with_header("Content-Type", OCTET_STREAM),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("file not found: {}", filepath.display());
            Response::empty(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            log::warn!("failed to read {}: {}", filepath.display(), e);
            Response::empty(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Solo componentes normales: sin `..`, raíz ni prefijos de unidad
fn is_plain_relative(name: &Path) -> bool {
    name.components().next().is_some()
        && name.components().all(|c| matches!(c, Component::Normal(_)))
}
