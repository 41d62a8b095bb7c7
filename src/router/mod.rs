//! # Sistema de Routing
//! src/router/mod.rs
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! La tabla de rutas se arma una sola vez al iniciar y después es de solo
//! lectura: el servidor la comparte entre conexiones con un `Arc`, sin
//! locks. Antes de comparar se quita la `/` final del path.

use crate::handlers;
use crate::http::{Request, Response};
use std::path::{Path, PathBuf};

/// Datos que recibe un handler además del request
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    /// Resto del path después del prefijo de la ruta (ej: "abc" en "/echo/abc")
    pub tail: &'a str,

    /// Directorio desde el que se sirven archivos
    pub files_dir: &'a Path,
}

/// Tipo de función handler
pub type Handler = fn(&Request, &RouteContext<'_>) -> Response;

/// Cómo se compara una ruta con el path
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    /// El path completo debe coincidir
    Exact(String),

    /// El path es el prefijo o empieza con `prefijo/`
    Prefix(String),
}

impl Pattern {
    /// Retorna el resto del path si la ruta coincide
    fn matches<'p>(&self, path: &'p str) -> Option<&'p str> {
        match self {
            Pattern::Exact(exact) => (normalize(exact) == path).then_some(""),
            Pattern::Prefix(prefix) => {
                let rest = path.strip_prefix(prefix.as_str())?;
                if rest.is_empty() {
                    Some(rest)
                } else {
                    rest.strip_prefix('/')
                }
            }
        }
    }
}

/// Quita una `/` final: "/" → "", "/echo/abc/" → "/echo/abc"
fn normalize(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Router que mapea paths a handlers
pub struct Router {
    routes: Vec<(Pattern, Handler)>,
    fallback: Handler,
    files_dir: PathBuf,
}

impl Router {
    /// Crea un router vacío; lo que no coincida responde 404
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            routes: Vec::new(),
            fallback: handlers::not_found_handler,
            files_dir: files_dir.into(),
        }
    }

    /// Router con las rutas del servidor
    ///
    /// - `GET /` → 200 vacío
    /// - `GET /echo/<text>` → 200 con `<text>`
    /// - `GET /user-agent` → 200 con el header, o 400
    /// - `GET /files/<name>` → 200 / 404 / 500
    pub fn with_default_routes(files_dir: impl Into<PathBuf>) -> Self {
        let mut router = Self::new(files_dir);
        router.register_exact("/", handlers::root_handler);
        router.register_prefix("/echo", handlers::echo_handler);
        router.register_exact("/user-agent", handlers::user_agent_handler);
        router.register_prefix("/files", handlers::files_handler);
        router
    }

    /// Registra una ruta que debe coincidir completa
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::router::{Router, RouteContext};
    /// use minihttp::http::{Request, Response, StatusCode};
    ///
    /// fn hello_handler(_req: &Request, _ctx: &RouteContext<'_>) -> Response {
    ///     Response::new(StatusCode::OK, "hello")
    /// }
    ///
    /// let mut router = Router::new("/tmp");
    /// router.register_exact("/hello", hello_handler);
    /// ```
    pub fn register_exact(&mut self, path: &str, handler: Handler) {
        self.routes.push((Pattern::Exact(path.to_string()), handler));
    }

    /// Registra una ruta por prefijo de segmentos
    ///
    /// `/echo` coincide con `/echo` y `/echo/...`, pero no con `/echoes`.
    pub fn register_prefix(&mut self, prefix: &str, handler: Handler) {
        self.routes
            .push((Pattern::Prefix(normalize(prefix).to_string()), handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Siempre retorna una respuesta: si ninguna ruta coincide se usa el
    /// handler 404.
    pub fn route(&self, request: &Request) -> Response {
        let path = normalize(request.path());

        for (pattern, handler) in &self.routes {
            if let Some(tail) = pattern.matches(path) {
                return handler(request, &self.context(tail));
            }
        }

        (self.fallback)(request, &self.context(""))
    }

    fn context<'a>(&'a self, tail: &'a str) -> RouteContext<'a> {
        RouteContext {
            tail,
            files_dir: &self.files_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    fn get(path: &str) -> Request {
        Request::parse(format!("GET {} HTTP/1.1\r\n\r\n", path).as_bytes()).unwrap()
    }

    fn tail_handler(_req: &Request, ctx: &RouteContext<'_>) -> Response {
        Response::new(StatusCode::OK, ctx.tail)
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new("/tmp");
        assert_eq!(router.routes.len(), 0);
        assert_eq!(router.files_dir, Path::new("/tmp"));
    }

    #[test]
    fn test_empty_router_is_404() {
        let router = Router::new("/tmp");
        assert_eq!(router.route(&get("/anything")).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_exact_matches_with_trailing_slash() {
        let mut router = Router::new("/tmp");
        router.register_exact("/test", tail_handler);

        assert_eq!(router.route(&get("/test")).status(), StatusCode::OK);
        assert_eq!(router.route(&get("/test/")).status(), StatusCode::OK);
        assert_eq!(router.route(&get("/test/more")).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_prefix_tail() {
        let mut router = Router::new("/tmp");
        router.register_prefix("/echo", tail_handler);

        assert_eq!(router.route(&get("/echo/abc")).body(), b"abc");
        assert_eq!(router.route(&get("/echo/abc/")).body(), b"abc");
        assert_eq!(router.route(&get("/echo/a/b")).body(), b"a/b");
        assert_eq!(router.route(&get("/echo")).body(), b"");
        assert_eq!(router.route(&get("/echoes")).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_first_registered_route_wins() {
        fn other(_req: &Request, _ctx: &RouteContext<'_>) -> Response {
            Response::new(StatusCode::OK, "other")
        }

        let mut router = Router::new("/tmp");
        router.register_prefix("/a", tail_handler);
        router.register_exact("/a/b", other);

        assert_eq!(router.route(&get("/a/b")).body(), b"b");
    }

    #[test]
    fn test_default_routes() {
        let router = Router::with_default_routes(std::env::temp_dir());

        let root = router.route(&get("/"));
        assert_eq!(root.status(), StatusCode::OK);
        assert!(root.body().is_empty());

        let echo = router.route(&get("/echo/hello"));
        assert_eq!(echo.body(), b"hello");
        assert_eq!(echo.header("Content-Length"), Some("5"));

        let agent = router.route(&get("/user-agent"));
        assert_eq!(agent.status(), StatusCode::BAD_REQUEST);

        let unknown = router.route(&get("/unknown"));
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
        assert!(unknown.body().is_empty());
    }

    #[test]
    fn test_default_routes_user_agent() {
        let router = Router::with_default_routes(std::env::temp_dir());
        let request =
            Request::parse(b"GET /user-agent HTTP/1.1\r\nUSER-AGENT: x\r\n\r\n").unwrap();

        assert_eq!(router.route(&request).body(), b"x");
    }
}
