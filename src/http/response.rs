//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use minihttp::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::OK, "abc")
//!     .with_header("Content-Type", "application/octet-stream");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::request::ParseError;
use super::{StatusCode, CRLF, HTTP_VERSION};
use std::collections::HashMap;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Representa una respuesta HTTP/1.1 completa
///
/// Invariante: el header `Content-Length` siempre coincide con el largo
/// del body, incluso cuando el body está vacío.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta con `Content-Length` y `Content-Type: text/plain`
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::OK, "hello");
    /// assert_eq!(response.header("content-length"), Some("5"));
    /// assert_eq!(response.header("content-type"), Some("text/plain"));
    /// ```
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let mut headers = HashMap::new();
        headers.insert(CONTENT_LENGTH.to_string(), body.len().to_string());
        headers.insert(CONTENT_TYPE.to_string(), DEFAULT_CONTENT_TYPE.to_string());

        Self {
            status,
            headers,
            body,
        }
    }

    /// Respuesta sin body (`Content-Length: 0`)
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, Vec::new())
    }

    /// Agrega o reemplaza un header
    ///
    /// El reemplazo no distingue mayúsculas en el nombre. `Content-Length`
    /// no se puede sobrescribir: siempre se calcula a partir del body.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Versión mutable de [`Response::with_header`]
    pub fn add_header(&mut self, name: &str, value: &str) {
        if name.eq_ignore_ascii_case(CONTENT_LENGTH) {
            log::debug!("ignoring explicit {} header: {}", CONTENT_LENGTH, value);
            return;
        }
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n` (orden no garantizado)
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario, sin terminador
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(format!("{} {}{}", HTTP_VERSION, self.status, CRLF).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}{}", name, value, CRLF).as_bytes());
        }

        result.extend_from_slice(CRLF.as_bytes());
        result.extend_from_slice(&self.body);

        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Status line y headers leídos de una respuesta serializada
///
/// Lo usa el lado cliente (tests, herramientas) para verificar lo que el
/// servidor escribió en el socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub reason: String,
    /// Headers con nombre en minúsculas
    pub headers: HashMap<String, String>,
    /// Posición donde empieza el body dentro del buffer original
    pub body_offset: usize,
}

impl ResponseHead {
    /// Parsea `HTTP/1.1 <status> <reason>\r\n` más los headers
    ///
    /// ```
    /// use minihttp::http::{Response, ResponseHead, StatusCode};
    ///
    /// let bytes = Response::new(StatusCode::OK, "abc").to_bytes();
    /// let head = ResponseHead::parse(&bytes).unwrap();
    ///
    /// assert_eq!(head.status, StatusCode::OK);
    /// assert_eq!(&bytes[head.body_offset..], b"abc");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let boundary = buffer
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .ok_or_else(|| ParseError::BadRequest("missing end of response head".to_string()))?;

        let head = std::str::from_utf8(&buffer[..boundary])
            .map_err(|_| ParseError::BadRequest("response head is not valid UTF-8".to_string()))?;
        let mut lines = head.split(CRLF);

        let status_line = lines.next().unwrap_or_default();
        let mut parts = status_line.splitn(3, ' ');
        let version = parts.next().unwrap_or_default();
        if version != HTTP_VERSION {
            return Err(ParseError::UnsupportedVersion(version.to_string()));
        }
        let status = parts
            .next()
            .and_then(|code| code.parse::<u16>().ok())
            .map(StatusCode::from)
            .ok_or_else(|| ParseError::BadRequest(format!("invalid status line: {}", status_line)))?;
        let reason = parts.next().unwrap_or_default().to_string();

        let mut headers = HashMap::new();
        for line in lines.filter(|line| !line.is_empty()) {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| ParseError::BadRequest(format!("invalid header format: {}", line)))?;
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }

        Ok(Self {
            status,
            reason,
            headers,
            body_offset: boundary + 4,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    /// Valor de `Content-Length` si está presente y es numérico
    pub fn content_length(&self) -> Option<usize> {
        self.header(CONTENT_LENGTH)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response_injects_defaults() {
        let response = Response::new(StatusCode::OK, "Hello World");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.header("Content-Length"), Some("11"));
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn test_empty_body_has_zero_content_length() {
        let response = Response::empty(StatusCode::NOT_FOUND);

        assert!(response.body().is_empty());
        assert_eq!(response.header("content-length"), Some("0"));
    }

    #[test]
    fn test_content_length_counts_bytes() {
        let response = Response::new(StatusCode::OK, "ñandú");
        assert_eq!(response.header("Content-Length"), Some("7"));
    }

    #[test]
    fn test_header_override_is_case_insensitive() {
        let response = Response::new(StatusCode::OK, vec![0x00, 0xFF])
            .with_header("content-type", "application/octet-stream");

        assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
        assert_eq!(response.headers().len(), 2);
    }

    #[test]
    fn test_content_length_cannot_be_overridden() {
        let response = Response::new(StatusCode::OK, "abc").with_header("Content-Length", "99");
        assert_eq!(response.header("Content-Length"), Some("3"));
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::new(StatusCode::OK, "Test").with_header("X-Custom", "value");

        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.contains("X-Custom: value\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_empty_body_serialization() {
        let text = String::from_utf8(Response::empty(StatusCode::OK).to_bytes()).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 0\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_unknown_status_serializes_with_empty_reason() {
        let text = String::from_utf8(Response::empty(StatusCode::from(299)).to_bytes()).unwrap();
        assert!(text.starts_with("HTTP/1.1 299 \r\n"));
    }

    #[test]
    fn test_head_round_trip() {
        let response = Response::new(StatusCode::NOT_FOUND, "missing")
            .with_header("Content-Type", "application/octet-stream");
        let bytes = response.to_bytes();

        let head = ResponseHead::parse(&bytes).unwrap();

        assert_eq!(head.status, StatusCode::NOT_FOUND);
        assert_eq!(head.reason, "Not Found");
        assert_eq!(head.content_length(), Some(7));
        assert_eq!(head.header("content-type"), Some("application/octet-stream"));
        assert_eq!(&bytes[head.body_offset..], b"missing");
    }

    #[test]
    fn test_head_parse_rejects_truncated_head() {
        let result = ResponseHead::parse(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n");
        assert!(matches!(result, Err(ParseError::BadRequest(_))));
    }

    #[test]
    fn test_head_parse_rejects_other_versions() {
        let result = ResponseHead::parse(b"HTTP/1.0 200 OK\r\n\r\n");
        assert!(matches!(result, Err(ParseError::UnsupportedVersion(_))));
    }
}
