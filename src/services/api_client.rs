// ============================================================================
// API CLIENT - Peticiones autenticadas a la API de Voz Animal
// ============================================================================
// Une transporte + sesión: agrega cabeceras de auth, detecta la expiración
// (401) y desenvuelve el envoltorio `{ success, data, message }`.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{Animal, ApiEnvelope, NuevaSolicitud, Profile, Solicitud};
use crate::services::http::{Headers, HttpMethod, HttpRequest, HttpTransport};
use crate::services::session_service::SessionStore;
use crate::utils::Navigator;

const STATUS_UNAUTHORIZED: u16 = 401;

/// Opciones de una petición; las cabeceras propias pisan a las de auth
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        Ok(Self {
            method: HttpMethod::Post,
            headers: Headers::new(),
            body: Some(serde_json::to_string(payload)?),
        })
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    login_page: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
    session_expired: Rc<Cell<bool>>,
}

impl ApiClient {
    pub fn new(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: config.api_url.clone(),
            login_page: config.login_page.clone(),
            transport,
            session,
            navigator,
            session_expired: Rc::new(Cell::new(false)),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Petición genérica. `Ok(None)` significa sesión expirada (401): la sesión
    /// ya fue borrada y se navegó al login.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ApiError> {
        let mut headers = self.session.auth_headers();
        headers.extend(options.headers);

        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: options.body,
        };

        log::debug!("🌐 [API] {} {}", request.method.as_str(), endpoint);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] Error en API request {}: {}", endpoint, e);
            e
        })?;

        if response.status == STATUS_UNAUTHORIZED {
            self.handle_session_expired();
            return Ok(None);
        }

        if !response.ok() {
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&response.body)
                .ok()
                .and_then(|env| env.message);
            log::error!("❌ [API] HTTP {} en {}: {:?}", response.status, endpoint, message);
            return Err(match message {
                Some(message) => ApiError::Backend(message),
                None => ApiError::Http {
                    status: response.status,
                    message: "Sin detalle".to_string(),
                },
            });
        }

        let data = serde_json::from_str::<T>(&response.body).map_err(|e| {
            log::error!("❌ [API] Respuesta inválida de {}: {}", endpoint, e);
            ApiError::from(e)
        })?;
        Ok(Some(data))
    }

    /// Petición con envoltorio; `success: false` se convierte en error
    async fn request_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
        fallback_error: &str,
    ) -> Result<Option<Option<T>>, ApiError> {
        let Some(envelope) = self.request::<ApiEnvelope<T>>(endpoint, options).await? else {
            return Ok(None);
        };
        if !envelope.success {
            return Err(ApiError::Backend(
                envelope.message.unwrap_or_else(|| fallback_error.to_string()),
            ));
        }
        Ok(Some(envelope.data))
    }

    /// 401: borrar sesión y navegar al login una sola vez por página
    fn handle_session_expired(&self) {
        if self.session_expired.replace(true) {
            log::debug!("🔒 [API] Sesión ya marcada como expirada");
            return;
        }
        log::warn!("🔒 [API] Token expirado, redirigiendo al login");
        self.session.clear();
        self.navigator.redirect(&self.login_page);
    }

    pub fn is_session_expired(&self) -> bool {
        self.session_expired.get()
    }

    pub async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        Ok(self
            .request_envelope::<Profile>("/auth/profile", RequestOptions::get(), "Error al cargar estadísticas")
            .await?
            .map(Option::unwrap_or_default))
    }

    pub async fn list_animales_disponibles(&self) -> Result<Option<Vec<Animal>>, ApiError> {
        Ok(self
            .request_envelope::<Vec<Animal>>(
                "/animales?estado=disponible",
                RequestOptions::get(),
                "Error al cargar animales",
            )
            .await?
            .map(Option::unwrap_or_default))
    }

    pub async fn get_animal(&self, id: i64) -> Result<Option<Animal>, ApiError> {
        let endpoint = format!("/animales/{}", id);
        match self
            .request_envelope::<Animal>(&endpoint, RequestOptions::get(), "Error al cargar animal")
            .await?
        {
            None => Ok(None),
            Some(Some(animal)) => Ok(Some(animal)),
            Some(None) => Err(ApiError::Parse(format!("Animal {} sin datos", id))),
        }
    }

    pub async fn list_solicitudes(&self) -> Result<Option<Vec<Solicitud>>, ApiError> {
        Ok(self
            .request_envelope::<Vec<Solicitud>>("/solicitudes", RequestOptions::get(), "Error al cargar solicitudes")
            .await?
            .map(Option::unwrap_or_default))
    }

    /// Crea la solicitud; devuelve el registro creado tal como venga del backend
    pub async fn crear_solicitud(
        &self,
        solicitud: &NuevaSolicitud,
    ) -> Result<Option<serde_json::Value>, ApiError> {
        let options = RequestOptions::post_json(solicitud)?;
        Ok(self
            .request_envelope::<serde_json::Value>("/solicitudes", options, "Error al enviar solicitud")
            .await?
            .map(|data| data.unwrap_or(serde_json::Value::Null)))
    }
}
