use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub app_name: String,
    pub version: String,
    pub login_page: String,
    /// Espera entre una solicitud aceptada y el refresco de stats/solicitudes
    pub submit_refresh_delay_ms: u32,
    pub alert_hide_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://voz-animal-backend-production.up.railway.app/api".to_string(),
            app_name: "Voz Animal".to_string(),
            version: "1.0.0".to_string(),
            login_page: "login.html".to_string(),
            submit_refresh_delay_ms: 2000,
            alert_hide_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            app_name: option_env!("APP_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.app_name),
            version: option_env!("APP_VERSION")
                .map(str::to_string)
                .unwrap_or(defaults.version),
            login_page: option_env!("LOGIN_PAGE")
                .map(str::to_string)
                .unwrap_or(defaults.login_page),
            submit_refresh_delay_ms: option_env!("SUBMIT_REFRESH_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.submit_refresh_delay_ms),
            alert_hide_ms: option_env!("ALERT_HIDE_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.alert_hide_ms),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valores_por_defecto() {
        let config = AppConfig::default();
        assert_eq!(config.login_page, "login.html");
        assert_eq!(config.submit_refresh_delay_ms, 2000);
        assert_eq!(config.alert_hide_ms, 5000);
    }
}
