// ============================================================================
// DOM VIEW - Implementación de DashboardView sobre los elementos de la página
// ============================================================================

use std::cell::RefCell;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement};
use crate::dom::{get_element_by_id, get_typed_element, set_class_name, set_display, set_inner_html, set_text_by_id, add_class, remove_class};
use crate::models::api::format_number;
use crate::models::{Animal, Solicitud, User, UserStats};
use crate::views::animal_card::animales_renderer;
use crate::views::animal_detail::{detail_subtitle, render_descriptions, render_detail_grid};
use crate::views::dashboard_view::{AdoptionFormMode, AlertKind, DashboardView, EXISTING_REQUEST_MESSAGE};
use crate::views::list_state::{ListRenderer, ListState};
use crate::views::solicitudes_table::solicitudes_renderer;

/// Ids de los elementos de la página
pub mod ids {
    pub const USER_NAME: &str = "userName";
    pub const USER_EMAIL: &str = "userEmail";
    pub const WELCOME_MESSAGE: &str = "welcomeMessage";
    pub const USER_AVATAR: &str = "userAvatar";
    pub const STAT_SOLICITUDES: &str = "statSolicitudes";
    pub const STAT_APROBADAS: &str = "statAprobadas";
    pub const STAT_ADOPCIONES: &str = "statAdopciones";
    pub const STAT_DONACIONES: &str = "statDonaciones";
    pub const ANIMALES_CONTAINER: &str = "animalesContainer";
    pub const SOLICITUDES_CONTAINER: &str = "solicitudesContainer";
    pub const MODAL: &str = "modalAnimal";
    pub const MODAL_ICON: &str = "modalAnimalIcon";
    pub const MODAL_NAME: &str = "modalAnimalName";
    pub const MODAL_SUBTITLE: &str = "modalAnimalSubtitle";
    pub const MODAL_DETAIL_GRID: &str = "modalDetailGrid";
    pub const MODAL_DESCRIPTION: &str = "modalDescription";
    pub const FORM_ALERT: &str = "formAlert";
    pub const MODAL_ADOPT_FORM: &str = "modalAdoptForm";
    pub const FORM_ADOPCION: &str = "formAdopcion";
    pub const BTN_SUBMIT: &str = "btnSubmitAdopcion";
    pub const MOTIVO: &str = "motivoAdopcion";
    pub const EXPERIENCIA: &str = "experiencia";
    pub const INFO_ADICIONAL: &str = "infoAdicional";
}

const SUBMIT_LABEL: &str = "Enviar Solicitud de Adopción";
const SUBMIT_BUSY_LABEL: &str = "Enviando solicitud...";
const MODAL_SHOW_CLASS: &str = "show";

pub struct DomDashboardView {
    alert_hide_ms: u32,
    // Al mostrar otro aviso se cancela el auto-ocultado anterior
    alert_timeout: RefCell<Option<Timeout>>,
}

impl DomDashboardView {
    pub fn new(alert_hide_ms: u32) -> Self {
        Self {
            alert_hide_ms,
            alert_timeout: RefCell::new(None),
        }
    }

    fn render_list<T>(&self, container_id: &str, renderer: &ListRenderer<T>, state: &ListState<T>) {
        let Some(container) = get_element_by_id(container_id) else {
            log::warn!("⚠️ [VIEW] Contenedor #{} no encontrado", container_id);
            return;
        };
        let rendered = renderer.render(state);
        set_class_name(&container, rendered.class_name);
        set_inner_html(&container, &rendered.html);
    }

    fn form_alert(&self) -> Option<Element> {
        get_element_by_id(ids::FORM_ALERT)
    }

    fn cancel_alert_timeout(&self) {
        self.alert_timeout.borrow_mut().take();
    }

    fn set_display_by_id(id: &str, display: &str) {
        if let Some(element) = get_element_by_id(id) {
            if let Err(e) = set_display(&element, display) {
                log::warn!("⚠️ [VIEW] No se pudo cambiar display de #{}: {:?}", id, e);
            }
        }
    }
}

impl DashboardView for DomDashboardView {
    fn render_user(&self, user: &User) {
        set_text_by_id(ids::USER_NAME, &user.nombre);
        set_text_by_id(ids::USER_EMAIL, &user.email);
        set_text_by_id(ids::WELCOME_MESSAGE, &user.welcome_message());
        set_text_by_id(ids::USER_AVATAR, &user.avatar_initial());
    }

    fn render_stats(&self, stats: &UserStats) {
        set_text_by_id(ids::STAT_SOLICITUDES, &stats.total_solicitudes.to_string());
        set_text_by_id(ids::STAT_APROBADAS, &stats.solicitudes_aprobadas.to_string());
        set_text_by_id(ids::STAT_ADOPCIONES, &stats.total_adopciones.to_string());
        set_text_by_id(ids::STAT_DONACIONES, &format!("${}", format_number(stats.total_donado)));
    }

    fn render_animales(&self, animales: &ListState<Animal>) {
        self.render_list(ids::ANIMALES_CONTAINER, &animales_renderer(), animales);
    }

    fn render_solicitudes(&self, solicitudes: &ListState<Solicitud>) {
        self.render_list(ids::SOLICITUDES_CONTAINER, &solicitudes_renderer(), solicitudes);
    }

    fn render_animal_detail(&self, animal: &Animal) {
        set_text_by_id(ids::MODAL_ICON, animal.icon());
        set_text_by_id(ids::MODAL_NAME, &animal.nombre);
        set_text_by_id(ids::MODAL_SUBTITLE, &detail_subtitle(animal));
        if let Some(grid) = get_element_by_id(ids::MODAL_DETAIL_GRID) {
            set_inner_html(&grid, &render_detail_grid(animal));
        }
        if let Some(description) = get_element_by_id(ids::MODAL_DESCRIPTION) {
            set_inner_html(&description, &render_descriptions(animal));
        }
    }

    fn set_adoption_form(&self, mode: AdoptionFormMode) {
        self.cancel_alert_timeout();
        match mode {
            AdoptionFormMode::AlreadyRequested => {
                if let Some(alert) = self.form_alert() {
                    set_class_name(&alert, AlertKind::Info.css_class());
                    alert.set_text_content(Some(EXISTING_REQUEST_MESSAGE));
                    let _ = set_display(&alert, "block");
                }
                Self::set_display_by_id(ids::MODAL_ADOPT_FORM, "none");
            }
            AdoptionFormMode::Available => {
                Self::set_display_by_id(ids::FORM_ALERT, "none");
                Self::set_display_by_id(ids::MODAL_ADOPT_FORM, "block");
                if let Some(form) = get_typed_element::<HtmlFormElement>(ids::FORM_ADOPCION) {
                    form.reset();
                }
                // Tras un envío exitoso el botón quedó deshabilitado
                self.set_submit_busy(false);
            }
        }
    }

    fn open_modal(&self) {
        if let Some(modal) = get_element_by_id(ids::MODAL) {
            let _ = add_class(&modal, MODAL_SHOW_CLASS);
        }
    }

    fn close_modal(&self) {
        if let Some(modal) = get_element_by_id(ids::MODAL) {
            let _ = remove_class(&modal, MODAL_SHOW_CLASS);
        }
        self.cancel_alert_timeout();
        Self::set_display_by_id(ids::FORM_ALERT, "none");
    }

    fn show_alert(&self, kind: AlertKind, message: &str) {
        let Some(alert) = self.form_alert() else {
            return;
        };
        set_class_name(&alert, kind.css_class());
        alert.set_text_content(Some(message));
        let _ = set_display(&alert, "block");

        let timeout = Timeout::new(self.alert_hide_ms, move || {
            let _ = set_display(&alert, "none");
        });
        *self.alert_timeout.borrow_mut() = Some(timeout);
    }

    fn set_submit_busy(&self, busy: bool) {
        if let Some(button) = get_typed_element::<HtmlButtonElement>(ids::BTN_SUBMIT) {
            button.set_disabled(busy);
            button.set_text_content(Some(if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL }));
        }
    }
}
