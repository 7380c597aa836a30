// ============================================================================
// DASHBOARD VIEW - Contrato entre el ViewModel y el DOM
// ============================================================================
// Cada método actualiza una única región de la página.
// ============================================================================

use crate::models::{Animal, Solicitud, User, UserStats};
use crate::views::list_state::ListState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
            AlertKind::Info => "alert alert-info",
        }
    }
}

/// Qué muestra la parte inferior del modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdoptionFormMode {
    /// Formulario visible y vacío
    Available,
    /// Ya hay una solicitud pendiente: formulario oculto + aviso
    AlreadyRequested,
}

pub const EXISTING_REQUEST_MESSAGE: &str =
    "✓ Ya tienes una solicitud pendiente para este animal. Te notificaremos cuando sea revisada.";

pub trait DashboardView {
    fn render_user(&self, user: &User);
    fn render_stats(&self, stats: &UserStats);
    fn render_animales(&self, animales: &ListState<Animal>);
    fn render_solicitudes(&self, solicitudes: &ListState<Solicitud>);
    fn render_animal_detail(&self, animal: &Animal);
    fn set_adoption_form(&self, mode: AdoptionFormMode);
    fn open_modal(&self);
    /// Oculta el modal y el aviso del formulario
    fn close_modal(&self);
    /// Aviso inline dentro del modal
    fn show_alert(&self, kind: AlertKind, message: &str);
    fn set_submit_busy(&self, busy: bool);
}
