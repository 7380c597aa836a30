// Contenido del modal de detalle de un animal

use crate::models::api::format_number;
use crate::models::Animal;
use crate::utils::escape_html;

pub fn detail_subtitle(animal: &Animal) -> String {
    format!("{} • {}", animal.raza_label(), animal.sexo_label())
}

pub fn render_detail_grid(animal: &Animal) -> String {
    let peso = animal
        .peso
        .map(|p| format!("{} kg", format_number(p)))
        .unwrap_or_else(|| "N/A".to_string());
    let color = match animal.color.as_deref() {
        Some(c) if !c.is_empty() => escape_html(c),
        _ => "N/A".to_string(),
    };

    [
        ("Edad", format!("{}a {}m", animal.anos(), animal.meses())),
        ("Tamaño", escape_html(&animal.tamanio)),
        ("Peso", peso),
        ("Color", color),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<div class="detail-item"><div class="detail-label">{}</div><div class="detail-value">{}</div></div>"#,
            label, value
        )
    })
    .collect()
}

/// Secciones opcionales; las vacías se omiten
pub fn render_descriptions(animal: &Animal) -> String {
    [
        ("📝 Descripción", &animal.descripcion),
        ("✨ Características", &animal.caracteristicas),
        ("🏥 Estado de Salud", &animal.estado_salud),
    ]
    .iter()
    .filter_map(|(title, text)| {
        let text = text.as_deref().filter(|t| !t.is_empty())?;
        Some(format!(
            r#"<div class="description-section"><div class="description-title">{}</div><div class="description-text">{}</div></div>"#,
            title,
            escape_html(text)
        ))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::animal;

    #[test]
    fn grid_con_valores_por_defecto() {
        let a = animal(1, "Mishi", "gato", "pequeño");
        let html = render_detail_grid(&a);
        assert!(html.contains("0a 0m"));
        assert_eq!(html.matches("N/A").count(), 2);
        assert_eq!(detail_subtitle(&a), "Raza mixta • Hembra");
    }

    #[test]
    fn peso_y_descripciones() {
        let mut a = animal(1, "Toby", "perro", "grande");
        a.peso = Some(14.5);
        a.descripcion = Some("Juguetón".into());
        a.estado_salud = Some(String::new());
        assert!(render_detail_grid(&a).contains("14.5 kg"));

        let desc = render_descriptions(&a);
        assert!(desc.contains("Juguetón"));
        assert!(!desc.contains("Características"));
        assert!(!desc.contains("Estado de Salud"));
    }
}
