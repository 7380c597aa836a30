// ============================================================================
// DASHBOARD VIEWMODEL - Lógica del dashboard de usuario
// ============================================================================
// Fases: Unauthenticated | Loading → Ready → (acción) Mutating → Ready
// Cada región de la página se renderiza por separado: el fallo de una carga
// nunca bloquea a las demás.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::solicitud::has_pending_for;
use crate::models::{AdoptionForm, NuevaSolicitud};
use crate::services::ApiClient;
use crate::state::{DashboardPhase, DashboardState};
use crate::utils::{Navigator, Timer};
use crate::viewmodels::filter::AnimalFilter;
use crate::views::{AdoptionFormMode, AlertKind, DashboardView, ListState};

const SUBMIT_SUCCESS_MESSAGE: &str =
    "¡Solicitud enviada exitosamente! Te notificaremos cuando sea revisada.";
const DETAIL_ERROR_MESSAGE: &str =
    "Error al cargar los detalles del animal. Por favor, intenta de nuevo.";
const LOGOUT_CONFIRM_MESSAGE: &str = "¿Estás seguro de que deseas cerrar sesión?";

pub struct DashboardViewModel {
    state: DashboardState,
    api: ApiClient,
    view: Rc<dyn DashboardView>,
    navigator: Rc<dyn Navigator>,
    timer: Rc<dyn Timer>,
    login_page: String,
    submit_refresh_delay_ms: u32,
}

impl DashboardViewModel {
    pub fn new(
        config: &AppConfig,
        api: ApiClient,
        view: Rc<dyn DashboardView>,
        navigator: Rc<dyn Navigator>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        Self {
            state: DashboardState::new(),
            api,
            view,
            navigator,
            timer,
            login_page: config.login_page.clone(),
            submit_refresh_delay_ms: config.submit_refresh_delay_ms,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Guard de entrada + carga inicial
    pub async fn start(&self) {
        if self.enter() {
            self.load().await;
        }
    }

    /// Sin token, sin usuario o usuario inválido → login. No se construye
    /// ningún estado del dashboard.
    pub fn enter(&self) -> bool {
        log::info!("🐾 [DASHBOARD] Dashboard cargando...");
        match self.api.session().get_session() {
            Some(session) => {
                log::info!("✅ [DASHBOARD] Usuario autenticado: {}", session.user.nombre);
                self.view.render_user(&session.user);
                self.state.set_user(Some(session.user));
                true
            }
            None => {
                log::info!("🔒 [DASHBOARD] No hay autenticación, redirigiendo...");
                self.state.set_phase(DashboardPhase::Unauthenticated);
                self.navigator.redirect(&self.login_page);
                false
            }
        }
    }

    /// Carga concurrente de stats, animales y solicitudes. Cada una tiene su
    /// propio render de error; `Ready` cuando las tres terminan.
    pub async fn load(&self) {
        self.state.set_phase(DashboardPhase::Loading);
        futures::join!(self.load_stats(), self.load_animales(), self.load_solicitudes());
        self.settle(DashboardPhase::Loading);
        log::info!("✅ [DASHBOARD] Carga inicial terminada");
    }

    /// Cierra la fase `from`. Si mientras tanto empezó otra (p. ej. un envío
    /// durante la carga inicial), esa fase se respeta.
    fn settle(&self, from: DashboardPhase) {
        if self.api.is_session_expired() {
            self.state.set_phase(DashboardPhase::Unauthenticated);
        } else if self.state.phase() == from {
            self.state.set_phase(DashboardPhase::Ready);
        }
    }

    async fn load_stats(&self) {
        match self.api.get_profile().await {
            Ok(Some(profile)) => {
                if let Some(stats) = profile.stats {
                    self.view.render_stats(&stats);
                }
            }
            Ok(None) => {}
            // Sin región de error propia: los contadores quedan como estaban
            Err(e) => log::error!("❌ [DASHBOARD] Error al cargar estadísticas: {}", e),
        }
    }

    async fn load_animales(&self) {
        match self.api.list_animales_disponibles().await {
            Ok(Some(animales)) => {
                log::info!("🐾 [DASHBOARD] Total de animales: {}", animales.len());
                self.state.set_animales(animales);
                self.view.render_animales(&ListState::Loaded(self.state.visible_animales()));
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error al cargar animales: {}", e);
                self.view.render_animales(&ListState::Failed);
            }
        }
    }

    async fn load_solicitudes(&self) {
        match self.api.list_solicitudes().await {
            Ok(Some(solicitudes)) => {
                self.view.render_solicitudes(&ListState::Loaded(solicitudes));
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error al cargar solicitudes: {}", e);
                self.view.render_solicitudes(&ListState::Failed);
            }
        }
    }

    /// Filtro local, sin red
    pub fn filter(&self, value: &str) {
        let filtro = AnimalFilter::parse(value);
        log::debug!("🔎 [DASHBOARD] Filtrando por: {:?}", filtro);
        self.state.set_filtro(filtro);
        let visibles = self.state.visible_animales();
        log::debug!("🔎 [DASHBOARD] Animales filtrados: {}", visibles.len());
        self.view.render_animales(&ListState::Loaded(visibles));
    }

    /// Abre el modal de un animal y decide si mostrar el formulario
    pub async fn open_animal(&self, id: i64) {
        log::info!("👀 [DASHBOARD] Viendo animal ID: {}", id);
        let animal = match self.api.get_animal(id).await {
            Ok(Some(animal)) => animal,
            Ok(None) => return,
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error al cargar detalle del animal {}: {}", id, e);
                self.navigator.alert(DETAIL_ERROR_MESSAGE);
                return;
            }
        };

        self.state.set_current_animal_id(Some(id));
        self.view.render_animal_detail(&animal);

        match self.api.list_solicitudes().await {
            Ok(Some(solicitudes)) if has_pending_for(&solicitudes, id) => {
                self.view.set_adoption_form(AdoptionFormMode::AlreadyRequested);
            }
            Ok(Some(_)) => self.view.set_adoption_form(AdoptionFormMode::Available),
            Ok(None) => return,
            Err(e) => {
                log::warn!("⚠️ [DASHBOARD] Error al verificar solicitudes: {}", e);
                self.view.set_adoption_form(AdoptionFormMode::Available);
            }
        }

        self.view.open_modal();
    }

    pub fn close_modal(&self) {
        self.view.close_modal();
        self.state.set_current_animal_id(None);
    }

    /// Envía la solicitud tal cual (sin validación local). Tras el éxito se
    /// espera, se refrescan stats y solicitudes y se cierra el modal.
    pub async fn submit(&self, form: AdoptionForm) {
        if self.state.phase() == DashboardPhase::Mutating {
            log::warn!("⚠️ [DASHBOARD] Ya hay una solicitud en curso");
            return;
        }
        self.state.set_phase(DashboardPhase::Mutating);
        self.view.set_submit_busy(true);

        let body = NuevaSolicitud::new(self.state.current_animal_id(), form);
        log::info!("📨 [DASHBOARD] Enviando solicitud de adopción para {:?}", body.id_animal);

        match self.api.crear_solicitud(&body).await {
            Ok(Some(_)) => {
                self.view.show_alert(AlertKind::Success, SUBMIT_SUCCESS_MESSAGE);
                self.timer.sleep(self.submit_refresh_delay_ms).await;
                futures::join!(self.load_stats(), self.load_solicitudes());
                self.close_modal();
                self.settle(DashboardPhase::Mutating);
            }
            Ok(None) => self.state.set_phase(DashboardPhase::Unauthenticated),
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error al enviar solicitud: {}", e);
                self.view.show_alert(AlertKind::Error, &e.to_string());
                self.view.set_submit_busy(false);
                self.settle(DashboardPhase::Mutating);
            }
        }
    }

    /// Cierra sesión tras confirmación del usuario
    pub fn logout(&self) {
        if !self.navigator.confirm(LOGOUT_CONFIRM_MESSAGE) {
            return;
        }
        match self.state.user() {
            Some(user) => log::info!("👋 [DASHBOARD] Cerrando sesión de {}...", user.nombre),
            None => log::info!("👋 [DASHBOARD] Cerrando sesión..."),
        }
        self.api.session().clear();
        self.state.set_user(None);
        self.state.set_phase(DashboardPhase::Unauthenticated);
        self.navigator.redirect(&self.login_page);
    }
}
