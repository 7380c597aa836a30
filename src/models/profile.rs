use serde::{Deserialize, Serialize};
use super::api::{de_count_or_zero, de_number_or_zero};

/// Estadísticas del usuario (`GET /auth/profile` → `data.stats`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserStats {
    #[serde(default, deserialize_with = "de_count_or_zero")]
    pub total_solicitudes: u32,
    #[serde(default, deserialize_with = "de_count_or_zero")]
    pub solicitudes_aprobadas: u32,
    #[serde(default, deserialize_with = "de_count_or_zero")]
    pub total_adopciones: u32,
    #[serde(default, deserialize_with = "de_number_or_zero")]
    pub total_donado: f64,
}

/// Perfil: solo interesa el bloque de estadísticas
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct Profile {
    #[serde(default)]
    pub stats: Option<UserStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_parciales_cuentan_como_cero() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": 1, "nombre": "Ana", "stats": {"total_solicitudes": "3", "total_adopciones": null, "total_donado": "150.00"}}"#,
        )
        .unwrap();
        let stats = profile.stats.unwrap();
        assert_eq!(stats.total_solicitudes, 3);
        assert_eq!(stats.solicitudes_aprobadas, 0);
        assert_eq!(stats.total_adopciones, 0);
        assert_eq!(stats.total_donado, 150.0);
    }
}
