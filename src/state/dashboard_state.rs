// ============================================================================
// DASHBOARD STATE - Estado de la página (una instancia por carga)
// ============================================================================
// Los campos se reemplazan completos, nunca se parchean. Ningún borrow se
// mantiene a través de un `.await`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Animal, User};
use crate::viewmodels::filter::AnimalFilter;

/// Fase del ciclo de vida del dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardPhase {
    /// Sin sesión válida: se redirigió al login
    Unauthenticated,
    #[default]
    Loading,
    Ready,
    /// Enviando una solicitud de adopción
    Mutating,
}

#[derive(Clone, Default)]
pub struct DashboardState {
    pub phase: Rc<RefCell<DashboardPhase>>,
    pub user: Rc<RefCell<Option<User>>>,
    /// Lista completa de animales disponibles (sin filtrar)
    pub animales: Rc<RefCell<Vec<Animal>>>,
    pub filtro: Rc<RefCell<AnimalFilter>>,
    /// Animal abierto en el modal
    pub current_animal_id: Rc<RefCell<Option<i64>>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DashboardPhase {
        *self.phase.borrow()
    }

    pub fn set_phase(&self, phase: DashboardPhase) {
        log::debug!("🔁 [STATE] Fase: {:?} → {:?}", self.phase(), phase);
        *self.phase.borrow_mut() = phase;
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    pub fn set_animales(&self, animales: Vec<Animal>) {
        *self.animales.borrow_mut() = animales;
    }

    pub fn filtro(&self) -> AnimalFilter {
        self.filtro.borrow().clone()
    }

    pub fn set_filtro(&self, filtro: AnimalFilter) {
        *self.filtro.borrow_mut() = filtro;
    }

    /// Animales visibles según el filtro activo
    pub fn visible_animales(&self) -> Vec<Animal> {
        let filtro = self.filtro();
        filtro.apply(&self.animales.borrow())
    }

    pub fn current_animal_id(&self) -> Option<i64> {
        *self.current_animal_id.borrow()
    }

    pub fn set_current_animal_id(&self, id: Option<i64>) {
        *self.current_animal_id.borrow_mut() = id;
    }
}
