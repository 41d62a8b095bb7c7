//! # Códigos de Estado HTTP
//!
//! El código de estado es un entero; solo algunos tienen reason phrase
//! conocida. La tabla es extensible: agregar una constante y su texto en
//! `reason_phrase` basta.
//!
//! - **2xx**: Éxito (200 OK)
//! - **4xx**: Error del cliente (400, 404)
//! - **5xx**: Error del servidor (500, 503)

/// Código de estado HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 200 OK - La petición fue exitosa
    pub const OK: StatusCode = StatusCode(200);

    /// 400 Bad Request - Request malformado
    pub const BAD_REQUEST: StatusCode = StatusCode(400);

    /// 404 Not Found - Ruta o archivo no encontrado
    pub const NOT_FOUND: StatusCode = StatusCode(404);

    /// 500 Internal Server Error - Error de I/O al servir el recurso
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// 503 Service Unavailable - No quedan workers libres para la conexión
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode(503);

    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::StatusCode;
    /// assert_eq!(StatusCode::OK.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Retorna el texto de razón asociado al código
    ///
    /// Los códigos fuera de la tabla retornan un string vacío: serializar
    /// una respuesta nunca falla.
    ///
    /// # Ejemplo
    /// ```
    /// use minihttp::http::StatusCode;
    /// assert_eq!(StatusCode::NOT_FOUND.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::from(299).reason_phrase(), "");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            500 => "Internal Server Error",
            503 => "Service Unavailable",
            _ => "",
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}
