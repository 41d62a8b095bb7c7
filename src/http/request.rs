//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! El parsing se hace en dos fases:
//!
//! 1. Buscar el límite `\r\n\r\n` que separa la cabecera del body
//! 2. Parsear la request line y los headers línea por línea
//!
//! Todo lo que sigue al límite es el body, recortado a `Content-Length`
//! si el header está presente.

use super::{CRLF, HTTP_VERSION};
use std::collections::HashMap;
use thiserror::Error;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Request line o header malformado
    #[error("bad request: {0}")]
    BadRequest(String),

    /// La versión no es la única soportada (HTTP/1.1)
    #[error("http version not supported: {0}")]
    UnsupportedVersion(String),
}

/// Representa un request HTTP/1.1 parseado
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP tal como llegó (no se valida contra una lista)
    method: String,

    /// Request target sin decodificar (ej: "/echo/abc")
    path: String,

    /// Versión HTTP (siempre "HTTP/1.1" si el parse fue exitoso)
    version: String,

    /// Headers con nombre en minúsculas
    headers: HashMap<String, String>,

    /// Body del request
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request HTTP/1.1 desde bytes
    ///
    /// Si el buffer no contiene ninguna request line (por ejemplo, está
    /// vacío) el resultado es un `Request` con método vacío: el llamador
    /// debe revisar [`Request::is_empty`] antes de rutear.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use minihttp::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let (head, rest) = split_head(buffer);

        let head = std::str::from_utf8(head)
            .map_err(|_| ParseError::BadRequest("request head is not valid UTF-8".to_string()))?;

        let mut request = Request::default();
        let mut lines = head.split(CRLF).filter(|line| !line.trim().is_empty());

        let Some(request_line) = lines.next() else {
            return Ok(request);
        };
        log::debug!("parsing request line: {}", request_line);
        let (method, path, version) = parse_request_line(request_line)?;
        request.method = method;
        request.path = path;
        request.version = version;

        for line in lines {
            log::debug!("parsing header: {}", line);
            let (name, value) = parse_header(line)?;
            request.headers.insert(name, value);
        }

        let body_len = request
            .header("content-length")
            .and_then(|value| value.parse::<usize>().ok())
            .map_or(rest.len(), |len| len.min(rest.len()));
        request.body = rest[..body_len].to_vec();

        Ok(request)
    }

    /// `true` si no se encontró request line
    pub fn is_empty(&self) -> bool {
        self.method.is_empty()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header sin distinguir mayúsculas
    ///
    /// ```
    /// use minihttp::http::Request;
    ///
    /// let request = Request::parse(b"GET / HTTP/1.1\r\nUSER-AGENT: x\r\n\r\n").unwrap();
    /// assert_eq!(request.header("user-agent"), Some("x"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Separa cabecera y body en el primer `\r\n\r\n`
///
/// Las líneas vacías antes de la request line se ignoran. Sin límite todo
/// el buffer es cabecera; el relleno de ceros de un buffer de tamaño fijo
/// se descarta.
fn split_head(mut buffer: &[u8]) -> (&[u8], &[u8]) {
    while let Some(rest) = buffer.strip_prefix(CRLF.as_bytes()) {
        buffer = rest;
    }

    match buffer
        .windows(HEAD_TERMINATOR.len())
        .position(|window| window == HEAD_TERMINATOR)
    {
        Some(pos) => (&buffer[..pos], &buffer[pos + HEAD_TERMINATOR.len()..]),
        None => {
            let end = buffer
                .iter()
                .rposition(|&b| b != 0)
                .map_or(0, |last| last + 1);
            (&buffer[..end], &buffer[buffer.len()..])
        }
    }
}

/// Formato: `METHOD TARGET HTTP/1.1`
fn parse_request_line(line: &str) -> Result<(String, String, String), ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let &[method, path, version] = parts.as_slice() else {
        return Err(ParseError::BadRequest(format!(
            "request line has {} fields, expected 3",
            parts.len()
        )));
    };

    if version != HTTP_VERSION {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    Ok((method.to_string(), path.to_string(), version.to_string()))
}

/// Formato: `Name: Value`, se corta en el primer ':'
fn parse_header(line: &str) -> Result<(String, String), ParseError> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| ParseError::BadRequest(format!("invalid header format: {}", line)))?;

    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Err(ParseError::BadRequest(format!("empty header name: {}", line)));
    }

    Ok((name, value.trim().to_string()))
}
