// ============================================================================
// ERRORES - Taxonomía de errores de la capa de red/sesión
// ============================================================================

use thiserror::Error;

/// Error de una petición a la API o del almacenamiento local
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fallo de transporte (sin respuesta del servidor)
    #[error("Error de red: {0}")]
    Network(String),

    /// Respuesta HTTP no exitosa (distinta de 401)
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// El cuerpo no es el JSON esperado
    #[error("Error procesando la respuesta: {0}")]
    Parse(String),

    /// El backend respondió `success: false`
    #[error("{0}")]
    Backend(String),

    #[error("Error de almacenamiento: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
