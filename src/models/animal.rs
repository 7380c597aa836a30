use serde::{Deserialize, Serialize};
use super::api::de_opt_number;

pub const TIPO_PERRO: &str = "perro";
pub const SEXO_MACHO: &str = "macho";

/// Animal adoptable (solo lectura desde el cliente)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Animal {
    #[serde(rename = "id_animal", alias = "id")]
    pub id: i64,
    pub nombre: String,
    pub tipo: String,
    #[serde(default)]
    pub raza: Option<String>,
    #[serde(default)]
    pub sexo: String,
    #[serde(default)]
    pub tamanio: String,
    #[serde(default)]
    pub edad_anos: Option<u32>,
    #[serde(default)]
    pub edad_meses: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub peso: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub caracteristicas: Option<String>,
    #[serde(default)]
    pub estado_salud: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

impl Animal {
    pub fn is_perro(&self) -> bool {
        self.tipo == TIPO_PERRO
    }

    pub fn is_macho(&self) -> bool {
        self.sexo == SEXO_MACHO
    }

    pub fn icon(&self) -> &'static str {
        if self.is_perro() { "🐕" } else { "🐈" }
    }

    pub fn tipo_label(&self) -> &'static str {
        if self.is_perro() { "Perro" } else { "Gato" }
    }

    pub fn sexo_label(&self) -> &'static str {
        if self.is_macho() { "Macho" } else { "Hembra" }
    }

    pub fn raza_label(&self) -> &str {
        match self.raza.as_deref() {
            Some(raza) if !raza.is_empty() => raza,
            _ => "Raza mixta",
        }
    }

    pub fn anos(&self) -> u32 {
        self.edad_anos.unwrap_or(0)
    }

    pub fn meses(&self) -> u32 {
        self.edad_meses.unwrap_or(0)
    }
}
