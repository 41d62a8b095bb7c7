//! # Loop de una Conexión
//! src/server/connection.rs
//!
//! Cada conexión aceptada corre este ciclo de forma secuencial:
//!
//! ```text
//! Reading → Dispatching → Writing → Reading → ... → Closed
//! ```
//!
//! Se asume que un request completo cabe en una sola lectura del buffer.
//! No hay timeouts: un cliente que no manda nada ocupa su thread hasta
//! que cierra el socket.

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use std::io::{self, ErrorKind, Read, Write};

/// Límites de lectura de una conexión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionLimits {
    /// Tamaño del buffer que se reserva en cada lectura
    pub buffer_size: usize,

    /// Errores de lectura seguidos antes de dar la conexión por muerta
    pub max_read_retries: u32,
}

impl From<&Config> for ConnectionLimits {
    fn from(config: &Config) -> Self {
        Self {
            buffer_size: config.buffer_size,
            max_read_retries: config.max_read_retries,
        }
    }
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Una conexión aceptada, dueña de su stream
pub struct Connection<'r, S: Read + Write> {
    peer: String,
    stream: S,
    router: &'r Router,
    limits: ConnectionLimits,
}

impl<'r, S: Read + Write> Connection<'r, S> {
    pub fn new(peer: String, stream: S, router: &'r Router, limits: ConnectionLimits) -> Self {
        Self {
            peer,
            stream,
            router,
            limits,
        }
    }

    /// Atiende requests hasta que el cliente cierra la conexión
    ///
    /// Retorna la cantidad de respuestas escritas.
    pub fn serve(mut self) -> usize {
        let mut responses = 0;
        let mut failed_reads = 0;

        loop {
            let mut buffer = vec![0u8; self.limits.buffer_size];

            let bytes_read = match self.stream.read(&mut buffer) {
                Ok(0) => {
                    log::debug!("[{}] connection was closed", self.peer);
                    break;
                }
                Ok(n) => {
                    failed_reads = 0;
                    n
                }
                Err(e) if is_closed(&e) => {
                    log::debug!("[{}] connection was closed: {}", self.peer, e);
                    break;
                }
                // Una señal cortó el read: se reintenta sin gastar el presupuesto
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    log::debug!("[{}] read interrupted, retrying", self.peer);
                    continue;
                }
                Err(e) => {
                    failed_reads += 1;
                    log::warn!(
                        "[{}] failed reading bytes ({}/{}): {}",
                        self.peer,
                        failed_reads,
                        self.limits.max_read_retries,
                        e
                    );
                    if failed_reads >= self.limits.max_read_retries {
                        log::warn!("[{}] too many read errors, closing", self.peer);
                        break;
                    }
                    continue;
                }
            };

            let response = self.dispatch(&buffer[..bytes_read]);

            if let Err(e) = self.write_response(&response) {
                log::warn!("[{}] failed writing response: {}", self.peer, e);
                break;
            }
            responses += 1;
        }

        responses
    }

    /// Parsea el buffer y obtiene la respuesta
    ///
    /// Un buffer que no se puede parsear se contesta con 400.
    fn dispatch(&self, bytes: &[u8]) -> Response {
        log::debug!("[{}] {} bytes read", self.peer, bytes.len());

        match Request::parse(bytes) {
            Ok(request) if request.is_empty() => {
                log::warn!("[{}] parsing request: missing request line", self.peer);
                Response::new(StatusCode::BAD_REQUEST, "missing request line")
            }
            Ok(request) => {
                log::info!("[{}] {} {}", self.peer, request.method(), request.path());
                log::debug!("[{}] headers: {:?}", self.peer, request.headers());
                self.router.route(&request)
            }
            Err(e) => {
                log::warn!("[{}] parsing request: {}", self.peer, e);
                Response::new(StatusCode::BAD_REQUEST, e.to_string())
            }
        }
    }

    fn write_response(&mut self, response: &Response) -> io::Result<()> {
        log::info!("[{}] responding with {}", self.peer, response.status());
        self.stream.write_all(&response.to_bytes())?;
        self.stream.flush()
    }
}

/// Errores de lectura que significan que el cliente ya no está
fn is_closed(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
            | ErrorKind::NotConnected
            | ErrorKind::UnexpectedEof
    )
}
