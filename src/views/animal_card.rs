// ============================================================================
// ANIMAL CARD - Tarjetas del listado de animales disponibles
// ============================================================================

use crate::models::Animal;
use crate::utils::escape_html;
use crate::views::list_state::{ListRenderer, Placeholder};

/// Atributo que identifica la tarjeta (click delegado en el contenedor)
pub const ANIMAL_ID_ATTR: &str = "data-animal-id";

pub fn animales_renderer() -> ListRenderer<Animal> {
    ListRenderer {
        container_class: "animales-grid",
        empty: Placeholder::empty("🐾", "No hay animales disponibles con los filtros seleccionados"),
        error: Placeholder::error("Error al cargar animales. Por favor, intenta de nuevo."),
        render_items: render_animal_grid,
    }
}

pub fn render_animal_grid(animales: &[Animal]) -> String {
    animales.iter().map(render_animal_card).collect()
}

pub fn render_animal_card(animal: &Animal) -> String {
    format!(
        r#"<div class="animal-card" {attr}="{id}">
  <div class="animal-image">{icon}<div class="animal-type-badge">{tipo}</div></div>
  <div class="animal-info">
    <div class="animal-name">{nombre}</div>
    <div class="animal-details">
      <div class="animal-detail-item"><span>🎯</span><span>{raza}</span></div>
      <div class="animal-detail-item"><span>{sexo_icon}</span><span>{sexo}</span></div>
      <div class="animal-detail-item"><span>📏</span><span>Tamaño {tamanio}</span></div>
      <div class="animal-detail-item"><span>🎂</span><span>{anos} año(s) {meses} mes(es)</span></div>
    </div>
    <div class="animal-badges"><span class="animal-badge badge-disponible">✓ Disponible</span></div>
  </div>
</div>"#,
        attr = ANIMAL_ID_ATTR,
        id = animal.id,
        icon = animal.icon(),
        tipo = animal.tipo_label(),
        nombre = escape_html(&animal.nombre),
        raza = escape_html(animal.raza_label()),
        sexo_icon = if animal.is_macho() { "♂️" } else { "♀️" },
        sexo = animal.sexo_label(),
        tamanio = escape_html(&animal.tamanio),
        anos = animal.anos(),
        meses = animal.meses(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::animal;
    use crate::views::list_state::ListState;

    #[test]
    fn tarjeta_con_id_y_nombre_escapado() {
        let mut a = animal(7, "<b>Toby</b>", "perro", "grande");
        a.edad_anos = Some(3);
        let html = render_animal_card(&a);
        assert!(html.contains(r#"data-animal-id="7""#));
        assert!(html.contains("&lt;b&gt;Toby&lt;/b&gt;"));
        assert!(html.contains("Tamaño grande"));
        assert!(html.contains("3 año(s) 0 mes(es)"));
        assert!(html.contains("🐕"));
    }

    #[test]
    fn grid_vacio_muestra_placeholder() {
        let out = animales_renderer().render(&ListState::Loaded(vec![]));
        assert!(out.html.contains("No hay animales disponibles"));
    }
}
