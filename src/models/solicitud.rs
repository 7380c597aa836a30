use serde::{Deserialize, Serialize};

pub const ESTADO_PENDIENTE: &str = "pendiente";

/// Solicitud de adopción tal como la devuelve `GET /solicitudes`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Solicitud {
    #[serde(default)]
    pub id_solicitud: Option<i64>,
    pub id_animal: i64,
    #[serde(default)]
    pub motivo_adopcion: Option<String>,
    #[serde(default)]
    pub experiencia_mascotas: Option<String>,
    #[serde(default)]
    pub info_adicional: Option<String>,
    pub estado: String,
    #[serde(default)]
    pub fecha_solicitud: Option<String>,
    #[serde(default)]
    pub nombre_animal: Option<String>,
}

impl Solicitud {
    pub fn is_pendiente(&self) -> bool {
        self.estado == ESTADO_PENDIENTE
    }
}

/// Cuerpo de `POST /solicitudes`. Los opcionales vacíos viajan como `null`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NuevaSolicitud {
    pub id_animal: Option<i64>,
    pub motivo_adopcion: String,
    pub experiencia_mascotas: Option<String>,
    pub info_adicional: Option<String>,
}

impl NuevaSolicitud {
    pub fn new(id_animal: Option<i64>, form: AdoptionForm) -> Self {
        Self {
            id_animal,
            motivo_adopcion: form.motivo_adopcion,
            experiencia_mascotas: non_empty(form.experiencia_mascotas),
            info_adicional: non_empty(form.info_adicional),
        }
    }
}

/// Valores crudos del formulario de adopción
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AdoptionForm {
    pub motivo_adopcion: String,
    pub experiencia_mascotas: String,
    pub info_adicional: String,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// ¿Existe ya una solicitud pendiente para este animal?
pub fn has_pending_for(solicitudes: &[Solicitud], id_animal: i64) -> bool {
    solicitudes
        .iter()
        .any(|s| s.id_animal == id_animal && s.is_pendiente())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solicitud(id_animal: i64, estado: &str) -> Solicitud {
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

    #[test]
    fn body_con_opcionales_vacios_en_null() {
        let body = NuevaSolicitud::new(
            Some(4),
            AdoptionForm {
                motivo_adopcion: String::new(),
                experiencia_mascotas: String::new(),
                info_adicional: "Tengo patio".into(),
            },
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id_animal": 4,
                "motivo_adopcion": "",
                "experiencia_mascotas": null,
                "info_adicional": "Tengo patio"
            })
        );
    }

    #[test]
    fn solo_cuenta_la_pendiente_del_mismo_animal() {
        let lista = vec![solicitud(1, "aprobada"), solicitud(2, "pendiente")];
        assert!(!has_pending_for(&lista, 1));
        assert!(has_pending_for(&lista, 2));
        assert!(!has_pending_for(&lista, 3));
    }
}
