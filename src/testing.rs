// Dobles de prueba en memoria para storage, HTTP, navegación, timers y vista

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{Animal, Solicitud, User, UserStats};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::{KeyValueStore, Navigator, Timer};
use crate::views::{AdoptionFormMode, AlertKind, DashboardView, ListState};

pub const TEST_API_URL: &str = "http://api.test/api";

pub fn test_config() -> AppConfig {
    AppConfig {
        api_url: TEST_API_URL.to_string(),
        ..AppConfig::default()
    }
}

pub fn ok_json(body: &str) -> HttpResponse {
    HttpResponse { status: 200, body: body.to_string() }
}

pub fn animal(id: i64, nombre: &str, tipo: &str, tamanio: &str) -> Animal {
    Animal {
        id,
        nombre: nombre.to_string(),
        tipo: tipo.to_string(),
        raza: None,
        sexo: "hembra".to_string(),
        tamanio: tamanio.to_string(),
        edad_anos: None,
        edad_meses: None,
        peso: None,
        color: None,
        descripcion: None,
        caracteristicas: None,
        estado_salud: None,
        estado: Some("disponible".to_string()),
    }
}

pub fn solicitud(id_animal: i64, estado: &str) -> Solicitud {
    Solicitud {
        id_solicitud: None,
        id_animal,
        motivo_adopcion: None,
        experiencia_mascotas: None,
        info_adicional: None,
        estado: estado.to_string(),
        fecha_solicitud: None,
        nombre_animal: None,
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ApiError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ApiError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

enum Reply {
    Ready(HttpResponse),
    /// Queda pendiente hasta que el test envíe la respuesta
    Later(oneshot::Receiver<HttpResponse>),
}

/// Respuestas por ruta ("GET /solicitudes"). La última respuesta inmediata de
/// cada ruta se repite; sin respuesta registrada → error de red.
#[derive(Clone, Default)]
pub struct FakeTransport {
    routes: Rc<RefCell<HashMap<String, VecDeque<Reply>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn respond(&self, route: &str, response: HttpResponse) {
        self.push(route, Reply::Ready(response));
    }

    /// Encola una respuesta retenida; se libera con el `Sender` devuelto
    pub fn respond_later(&self, route: &str) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.push(route, Reply::Later(rx));
        tx
    }

    fn push(&self, route: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .entry(route.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn requests_to(&self, route: &str) -> Vec<HttpRequest> {
        self.sent
            .borrow()
            .iter()
            .filter(|r| route_of(r) == route)
            .cloned()
            .collect()
    }
}

fn route_of(request: &HttpRequest) -> String {
    let path = request.url.strip_prefix(TEST_API_URL).unwrap_or(&request.url);
    format!("{} {}", request.method.as_str(), path)
}

impl HttpTransport for FakeTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>> {
        let route = route_of(&request);
        self.sent.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        let reply = match routes.get_mut(&route) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => match queue.front() {
                Some(Reply::Ready(response)) => Some(Reply::Ready(response.clone())),
                _ => queue.pop_front(),
            },
            None => None,
        };
        match reply {
            Some(Reply::Ready(response)) => future::ready(Ok(response)).boxed_local(),
            Some(Reply::Later(rx)) => async move {
                rx.await
                    .map_err(|_| ApiError::Network(format!("respuesta descartada para {}", route)))
            }
            .boxed_local(),
            None => future::ready(Err(ApiError::Network(format!("sin respuesta para {}", route))))
                .boxed_local(),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeNavigator {
    redirects: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
    confirms: Rc<RefCell<Vec<String>>>,
    confirm_answer: Rc<Cell<bool>>,
}

impl FakeNavigator {
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Resuelve de inmediato y anota cada espera
#[derive(Clone, Default)]
pub struct ImmediateTimer {
    sleeps: Rc<RefCell<Vec<u32>>>,
}

impl ImmediateTimer {
    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

impl Timer for ImmediateTimer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        self.sleeps.borrow_mut().push(millis);
        future::ready(()).boxed_local()
    }
}

/// Cada espera queda pendiente hasta `release()`
#[derive(Clone, Default)]
pub struct ManualTimer {
    pending: Rc<RefCell<Vec<oneshot::Sender<()>>>>,
}

impl ManualTimer {
    pub fn waiting(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn release(&self) {
        for tx in self.pending.borrow_mut().drain(..) {
            let _ = tx.send(());
        }
    }
}

impl Timer for ManualTimer {
    fn sleep(&self, _millis: u32) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push(tx);
        rx.map(|_| ()).boxed_local()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    User(String),
    Stats(UserStats),
    Animales(ListState<Animal>),
    Solicitudes(ListState<Solicitud>),
    Detail(i64),
    Form(AdoptionFormMode),
    OpenModal,
    CloseModal,
    Alert(AlertKind, String),
    SubmitBusy(bool),
}

#[derive(Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Ids del último render del listado de animales (`None` = error)
    pub fn last_animales(&self) -> Option<Option<Vec<i64>>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Animales(ListState::Loaded(list)) => Some(Some(list.iter().map(|a| a.id).collect())),
            ViewEvent::Animales(ListState::Failed) => Some(None),
            _ => None,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl DashboardView for RecordingView {
    fn render_user(&self, user: &User) {
        self.push(ViewEvent::User(user.nombre.clone()));
    }

    fn render_stats(&self, stats: &UserStats) {
        self.push(ViewEvent::Stats(stats.clone()));
    }

    fn render_animales(&self, animales: &ListState<Animal>) {
        self.push(ViewEvent::Animales(animales.clone()));
    }

    fn render_solicitudes(&self, solicitudes: &ListState<Solicitud>) {
        self.push(ViewEvent::Solicitudes(solicitudes.clone()));
    }

    fn render_animal_detail(&self, animal: &Animal) {
        self.push(ViewEvent::Detail(animal.id));
    }

    fn set_adoption_form(&self, mode: AdoptionFormMode) {
        self.push(ViewEvent::Form(mode));
    }

    fn open_modal(&self) {
        self.push(ViewEvent::OpenModal);
    }

    fn close_modal(&self) {
        self.push(ViewEvent::CloseModal);
    }

    fn show_alert(&self, kind: AlertKind, message: &str) {
        self.push(ViewEvent::Alert(kind, message.to_string()));
    }

    fn set_submit_busy(&self, busy: bool) {
        self.push(ViewEvent::SubmitBusy(busy));
    }
}
