// ============================================================================
// VIEWS - Plantillas HTML + implementación DOM de la vista del dashboard
// ============================================================================

pub mod list_state;
pub mod animal_card;
pub mod animal_detail;
pub mod solicitudes_table;
pub mod dashboard_view;
pub mod dom_view;

pub use list_state::ListState;
pub use dashboard_view::{AdoptionFormMode, AlertKind, DashboardView};
pub use dom_view::DomDashboardView;
