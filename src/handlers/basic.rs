//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - /: Respuesta vacía 200
//! - /echo/<text>: Devuelve `<text>` tal cual
//! - /user-agent: Devuelve el header `User-Agent`

use crate::http::{Request, Response, StatusCode};
use crate::router::RouteContext;

/// Handler para `/`
pub fn root_handler(_req: &Request, _ctx: &RouteContext<'_>) -> Response {
    Response::empty(StatusCode::OK)
}

/// Handler para `/echo/<text>`
///
/// El texto no se decodifica: `/echo/a%20b` responde `a%20b`.
pub fn echo_handler(_req: &Request, ctx: &RouteContext<'_>) -> Response {
    Response::new(StatusCode::OK, ctx.tail)
}

/// Handler para `/user-agent`
///
/// 400 si el cliente no mandó el header.
pub fn user_agent_handler(req: &Request, _ctx: &RouteContext<'_>) -> Response {
    match req.header("user-agent") {
        Some(agent) => Response::new(StatusCode::OK, agent),
        None => Response::new(StatusCode::BAD_REQUEST, "User agent not provided"),
    }
}

/// Respuesta para rutas que no existen
pub fn not_found_handler(req: &Request, _ctx: &RouteContext<'_>) -> Response {
    log::info!("route not found: {}", req.path());
    Response::empty(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn ctx(tail: &str) -> RouteContext<'_> {
        RouteContext {
            tail,
            files_dir: Path::new("/nonexistent"),
        }
    }

    fn request(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    #[test]
    fn test_root_is_empty_ok() {
        let response = root_handler(&request(b"GET / HTTP/1.1\r\n\r\n"), &ctx(""));

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert_eq!(response.header("Content-Length"), Some("0"));
    }

    #[test]
    fn test_echo_returns_tail() {
        let response = echo_handler(&request(b"GET /echo/abc HTTP/1.1\r\n\r\n"), &ctx("abc"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"abc");
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("3"));
    }

    #[test]
    fn test_user_agent_present() {
        let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: test-client\r\n\r\n";
        let response = user_agent_handler(&request(raw), &ctx(""));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"test-client");
    }

    #[test]
    fn test_user_agent_missing() {
        let response = user_agent_handler(&request(b"GET /user-agent HTTP/1.1\r\n\r\n"), &ctx(""));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), b"User agent not provided");
    }

    #[test]
    fn test_not_found_is_empty() {
        let response = not_found_handler(&request(b"GET /nope HTTP/1.1\r\n\r\n"), &ctx(""));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.body().is_empty());
    }
}
