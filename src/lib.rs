// ============================================================================
// VOZ ANIMAL - DASHBOARD DE USUARIO (RUST + WASM, MVVM)
// ============================================================================
// - Views: plantillas HTML + DashboardView sobre el DOM (sin lógica)
// - ViewModels: flujo del dashboard + filtro
// - Services: transporte HTTP, sesión, cliente de la API
// - State: estado compartido con Rc<RefCell>
// - Models: estructuras del backend
// ============================================================================

mod config;
mod error;
mod models;
mod services;
mod state;
mod viewmodels;
mod views;
mod dom;
mod utils;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global: mantiene vivos viewmodel y listeners
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 {} v{} - Rust + MVVM", CONFIG.app_name, CONFIG.version);

    let app = App::new();
    app.start()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

fn browser_session() -> services::SessionStore {
    services::SessionStore::new(std::rc::Rc::new(utils::LocalStorage))
}

/// Predicados de sesión para las demás páginas (login, admin)
#[wasm_bindgen]
pub fn is_authenticated() -> bool {
    browser_session().is_authenticated()
}

#[wasm_bindgen]
pub fn is_admin() -> bool {
    browser_session().is_admin()
}

/// Guarda la sesión tras el login (`user_json` es el usuario del backend)
#[wasm_bindgen]
pub fn save_session(token: &str, user_json: &str) -> Result<(), JsValue> {
    let user: models::User =
        serde_json::from_str(user_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let session = models::Session {
        token: token.to_string(),
        user,
    };
    browser_session()
        .save(&session)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
