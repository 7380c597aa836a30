// ============================================================================
// SESSION SERVICE - Token + usuario en almacenamiento persistente
// ============================================================================

use std::rc::Rc;
use crate::error::ApiError;
use crate::models::{Session, User};
use crate::services::http::Headers;
use crate::utils::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Lectura/escritura de la sesión. Token y usuario se guardan y borran juntos,
/// pero no de forma transaccional: las lecturas validan ambos.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn get_token(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("⚠️ [SESSION] {}", e);
                None
            }
        }
    }

    /// Usuario cacheado; `None` si falta o no es JSON válido
    pub fn get_user(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("⚠️ [SESSION] {}", e);
                return None;
            }
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Usuario inválido en storage: {}", e);
                None
            }
        }
    }

    /// Sesión completa, solo si token y usuario están presentes y son válidos
    pub fn get_session(&self) -> Option<Session> {
        Some(Session {
            token: self.get_token()?,
            user: self.get_user()?,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.get_session()
            .map(|s| s.user.is_admin())
            .unwrap_or(false)
    }

    /// Cabeceras por defecto. Sin token no se envía `Authorization`.
    pub fn auth_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = self.get_token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    pub fn save(&self, session: &Session) -> Result<(), ApiError> {
        let user_json = serde_json::to_string(&session.user)?;
        self.storage.set_item(TOKEN_KEY, &session.token)?;
        self.storage.set_item(USER_KEY, &user_json)?;
        log::info!("💾 [SESSION] Sesión guardada para {}", session.user.nombre);
        Ok(())
    }

    /// Borra ambas claves aunque falle alguna
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                log::error!("❌ [SESSION] No se pudo borrar '{}': {}", key, e);
            }
        }
        log::info!("🗑️ [SESSION] Sesión eliminada");
    }
}
