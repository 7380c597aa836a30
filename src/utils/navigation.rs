// ============================================================================
// NAVIGATION - Redirecciones y diálogos bloqueantes del navegador
// ============================================================================

/// Navegación de página y diálogos nativos (`alert`/`confirm`)
pub trait Navigator {
    fn redirect(&self, url: &str);
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        log::info!("➡️ [NAV] Redirigiendo a {}", url);
        let result = web_sys::window()
            .map(|w| w.location().set_href(url));
        if !matches!(result, Some(Ok(()))) {
            log::error!("❌ [NAV] No se pudo redirigir a {}", url);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}
