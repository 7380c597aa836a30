// ============================================================================
// APP - Ensambla servicios, vista y viewmodel y conecta los eventos del DOM
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement};
use crate::config::CONFIG;
use crate::dom::{
    add_class, closest_attribute, event_target_element, get_element_by_id, on_click, on_submit,
    query_selector_all, remove_class,
};
use crate::models::AdoptionForm;
use crate::services::{ApiClient, GlooTransport, SessionStore};
use crate::utils::{BrowserNavigator, BrowserTimer, LocalStorage};
use crate::viewmodels::DashboardViewModel;
use crate::views::animal_card::ANIMAL_ID_ATTR;
use crate::views::dom_view::ids;
use crate::views::DomDashboardView;

const FILTER_BUTTON_SELECTOR: &str = ".btn-filter[data-filtro]";
const FILTER_ATTR: &str = "data-filtro";
const ACTIVE_CLASS: &str = "active";
const CLOSE_MODAL_SELECTOR: &str = "[data-action=\"close-modal\"]";
const LOGOUT_SELECTOR: &str = "[data-action=\"logout\"]";

/// Aplicación principal
pub struct App {
    viewmodel: Rc<DashboardViewModel>,
}

impl App {
    pub fn new() -> Self {
        let navigator = Rc::new(BrowserNavigator);
        let session = SessionStore::new(Rc::new(LocalStorage));
        let api = ApiClient::new(&CONFIG, Rc::new(GlooTransport), session, navigator.clone());
        let view = Rc::new(DomDashboardView::new(CONFIG.alert_hide_ms));
        let viewmodel = DashboardViewModel::new(&CONFIG, api, view, navigator, Rc::new(BrowserTimer));

        Self {
            viewmodel: Rc::new(viewmodel),
        }
    }

    /// Registra los listeners y lanza el guard + la carga inicial
    pub fn start(&self) -> Result<(), JsValue> {
        self.bind_events()?;

        let vm = self.viewmodel.clone();
        spawn_local(async move {
            vm.start().await;
        });
        Ok(())
    }

    fn bind_events(&self) -> Result<(), JsValue> {
        self.bind_filters()?;
        self.bind_animal_cards()?;

        for button in query_selector_all(CLOSE_MODAL_SELECTOR)? {
            let vm = self.viewmodel.clone();
            on_click(&button, move |_e: Event| vm.close_modal())?;
        }

        for button in query_selector_all(LOGOUT_SELECTOR)? {
            let vm = self.viewmodel.clone();
            on_click(&button, move |e: Event| {
                e.prevent_default();
                vm.logout();
            })?;
        }

        if let Some(form) = get_element_by_id(ids::FORM_ADOPCION) {
            let vm = self.viewmodel.clone();
            on_submit(&form, move |_e: Event| {
                let vm = vm.clone();
                let datos = read_adoption_form();
                spawn_local(async move {
                    vm.submit(datos).await;
                });
            })?;
        } else {
            log::warn!("⚠️ [APP] No se encontró #{}", ids::FORM_ADOPCION);
        }

        Ok(())
    }

    /// Botones de filtro: marca el activo y filtra la lista en memoria
    fn bind_filters(&self) -> Result<(), JsValue> {
        let buttons = Rc::new(query_selector_all(FILTER_BUTTON_SELECTOR)?);
        for button in buttons.iter() {
            let vm = self.viewmodel.clone();
            let buttons = buttons.clone();
            on_click(button, move |e: Event| {
                let Some(target) = event_target_element(&e) else { return };
                let Some(filtro) = closest_attribute(&target, FILTER_ATTR) else { return };

                for b in buttons.iter() {
                    let _ = remove_class(b, ACTIVE_CLASS);
                }
                if let Ok(Some(clicked)) = target.closest(FILTER_BUTTON_SELECTOR) {
                    let _ = add_class(&clicked, ACTIVE_CLASS);
                }
                vm.filter(&filtro);
            })?;
        }
        Ok(())
    }

    /// Delegación sobre el contenedor: las tarjetas se re-renderizan a menudo
    fn bind_animal_cards(&self) -> Result<(), JsValue> {
        let Some(container) = get_element_by_id(ids::ANIMALES_CONTAINER) else {
            log::warn!("⚠️ [APP] No se encontró #{}", ids::ANIMALES_CONTAINER);
            return Ok(());
        };
        let vm = self.viewmodel.clone();
        on_click(&container, move |e: Event| {
            let id = event_target_element(&e)
                .and_then(|target| closest_attribute(&target, ANIMAL_ID_ATTR))
                .and_then(|raw| raw.parse::<i64>().ok());
            if let Some(id) = id {
                let vm = vm.clone();
                spawn_local(async move {
                    vm.open_animal(id).await;
                });
            }
        })
    }
}

fn read_adoption_form() -> AdoptionForm {
    AdoptionForm {
        motivo_adopcion: field_value(ids::MOTIVO),
        experiencia_mascotas: field_value(ids::EXPERIENCIA),
        info_adicional: field_value(ids::INFO_ADICIONAL),
    }
}

/// Valor de un textarea o input; vacío si no existe
fn field_value(id: &str) -> String {
    let Some(element) = get_element_by_id(id) else {
        return String::new();
    };
    match element.dyn_into::<HtmlTextAreaElement>() {
        Ok(textarea) => textarea.value(),
        Err(element) => element
            .dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_else(|_: Element| String::new()),
    }
}
