// ============================================================================
// LIST STATE - Render unificado de listas: items / vacío / error
// ============================================================================

use crate::utils::escape_html;

/// Resultado de cargar una lista
#[derive(Clone, Debug, PartialEq)]
pub enum ListState<T> {
    Loaded(Vec<T>),
    Failed,
}

/// Mensaje con icono que ocupa el contenedor cuando no hay items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub message: &'static str,
    pub is_error: bool,
}

impl Placeholder {
    pub const fn empty(icon: &'static str, message: &'static str) -> Self {
        Self { icon, message, is_error: false }
    }

    pub const fn error(message: &'static str) -> Self {
        Self { icon: "❌", message, is_error: true }
    }

    fn to_html(self) -> String {
        let style = if self.is_error { r#" style="color: #dc3545;""# } else { "" };
        format!(
            r#"<div class="empty-icon">{}</div><p{}>{}</p>"#,
            self.icon,
            style,
            escape_html(self.message)
        )
    }
}

/// Contenido listo para volcar en el contenedor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedList {
    pub class_name: &'static str,
    pub html: String,
}

pub const EMPTY_STATE_CLASS: &str = "empty-state";

/// Renderer parametrizado por (clase del contenedor, placeholders, items)
pub struct ListRenderer<T> {
    pub container_class: &'static str,
    pub empty: Placeholder,
    pub error: Placeholder,
    pub render_items: fn(&[T]) -> String,
}

impl<T> ListRenderer<T> {
    pub fn render(&self, state: &ListState<T>) -> RenderedList {
        match state {
            ListState::Loaded(items) if !items.is_empty() => RenderedList {
                class_name: self.container_class,
                html: (self.render_items)(items),
            },
            ListState::Loaded(_) => RenderedList {
                class_name: EMPTY_STATE_CLASS,
                html: self.empty.to_html(),
            },
            ListState::Failed => RenderedList {
                class_name: EMPTY_STATE_CLASS,
                html: self.error.to_html(),
            },
        }
    }
}
