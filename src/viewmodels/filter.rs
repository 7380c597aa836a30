// ============================================================================
// FILTRO DE ANIMALES - Función pura sobre la lista en memoria
// ============================================================================

use crate::models::Animal;

const TIPOS: [&str; 2] = ["perro", "gato"];
const TAMANIOS: [&str; 3] = ["pequeño", "mediano", "grande"];

/// Filtro activo del listado
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnimalFilter {
    #[default]
    Todos,
    Tipo(String),
    Tamanio(String),
}

impl AnimalFilter {
    /// Valor del botón de filtro → filtro. Lo desconocido no filtra.
    pub fn parse(value: &str) -> Self {
        if TIPOS.contains(&value) {
            AnimalFilter::Tipo(value.to_string())
        } else if TAMANIOS.contains(&value) {
            AnimalFilter::Tamanio(value.to_string())
        } else {
            AnimalFilter::Todos
        }
    }

    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            AnimalFilter::Todos => true,
            AnimalFilter::Tipo(tipo) => animal.tipo == *tipo,
            AnimalFilter::Tamanio(tamanio) => animal.tamanio == *tamanio,
        }
    }

    /// Subconjunto que cumple el filtro, en el orden original
    pub fn apply(&self, animales: &[Animal]) -> Vec<Animal> {
        animales.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::animal;

    fn lista() -> Vec<Animal> {
        vec![
            animal(1, "Toby", "perro", "grande"),
            animal(2, "Mishi", "gato", "pequeño"),
            animal(3, "Rocky", "perro", "pequeño"),
            animal(4, "Luna", "gato", "mediano"),
        ]
    }

    fn ids(animales: &[Animal]) -> Vec<i64> {
        animales.iter().map(|a| a.id).collect()
    }

    #[test]
    fn por_tipo_preserva_orden() {
        let filtrados = AnimalFilter::parse("perro").apply(&lista());
        assert_eq!(ids(&filtrados), vec![1, 3]);
        assert!(filtrados.iter().all(|a| a.tipo == "perro"));
    }

    #[test]
    fn por_tamanio() {
        assert_eq!(ids(&AnimalFilter::parse("pequeño").apply(&lista())), vec![2, 3]);
        assert_eq!(ids(&AnimalFilter::parse("mediano").apply(&lista())), vec![4]);
    }

    #[test]
    fn valor_desconocido_es_identidad() {
        for valor in ["todos", "", "PERRO", "conejo"] {
            assert_eq!(AnimalFilter::parse(valor), AnimalFilter::Todos);
            assert_eq!(AnimalFilter::parse(valor).apply(&lista()), lista());
        }
    }

    #[test]
    fn lista_vacia() {
        assert!(AnimalFilter::parse("gato").apply(&[]).is_empty());
    }
}
