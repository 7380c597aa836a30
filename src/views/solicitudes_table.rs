// Tabla "Mis solicitudes"

use crate::models::Solicitud;
use crate::utils::{capitalize, escape_html, format_fecha, truncate_with_ellipsis};
use crate::views::list_state::{ListRenderer, Placeholder};

const MOTIVO_MAX_CHARS: usize = 50;

pub fn solicitudes_renderer() -> ListRenderer<Solicitud> {
    ListRenderer {
        container_class: "table-container",
        empty: Placeholder::empty("📋", "Aún no has enviado ninguna solicitud de adopción"),
        error: Placeholder::error("Error al cargar solicitudes. Por favor, intenta de nuevo."),
        render_items: render_solicitudes_table,
    }
}

pub fn render_solicitudes_table(solicitudes: &[Solicitud]) -> String {
    let rows: String = solicitudes.iter().map(render_row).collect();
    format!(
        "<table><thead><tr><th>Animal</th><th>Fecha</th><th>Estado</th><th>Motivo</th></tr></thead><tbody>{}</tbody></table>",
        rows
    )
}

fn render_row(sol: &Solicitud) -> String {
    let nombre = sol.nombre_animal.as_deref().unwrap_or("Animal");
    let fecha = sol.fecha_solicitud.as_deref().map(format_fecha).unwrap_or_default();
    let motivo = match sol.motivo_adopcion.as_deref() {
        Some(m) if !m.is_empty() => escape_html(&truncate_with_ellipsis(m, MOTIVO_MAX_CHARS)),
        _ => "-".to_string(),
    };
    format!(
        r#"<tr><td><strong>{}</strong></td><td>{}</td><td><span class="status-badge status-{}">{}</span></td><td>{}</td></tr>"#,
        escape_html(nombre),
        escape_html(&fecha),
        escape_html(&sol.estado),
        escape_html(&capitalize(&sol.estado)),
        motivo
    )
}
