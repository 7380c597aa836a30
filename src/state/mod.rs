// ============================================================================
// STATE MODULE - Estado de página con Rc<RefCell>
// ============================================================================

pub mod dashboard_state;

pub use dashboard_state::*;
