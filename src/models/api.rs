use serde::{Deserialize, Deserializer};

/// Envoltorio común de todas las respuestas del backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Los NUMERIC de Postgres llegan como string ("12.50"); se aceptan ambos
pub(crate) fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Igual que `de_opt_number` pero `null`/ausente cuenta como 0
pub(crate) fn de_number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_number(deserializer)?.unwrap_or(0.0))
}

/// Contadores (COUNT de Postgres llega como string); `null`/ausente → 0
pub(crate) fn de_count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_number(deserializer)?
        .filter(|n| *n >= 0.0)
        .map(|n| n as u32)
        .unwrap_or(0))
}

/// Formatea un número sin decimales superfluos (12.0 → "12", 12.5 → "12.5")
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Peso {
        #[serde(default, deserialize_with = "de_opt_number")]
        peso: Option<f64>,
    }

    #[test]
    fn numero_como_string_o_numero() {
        let a: Peso = serde_json::from_str(r#"{"peso": "12.50"}"#).unwrap();
        let b: Peso = serde_json::from_str(r#"{"peso": 8}"#).unwrap();
        let c: Peso = serde_json::from_str(r#"{"peso": null}"#).unwrap();
        let d: Peso = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(a.peso, Some(12.5));
        assert_eq!(b.peso, Some(8.0));
        assert_eq!(c.peso, None);
        assert_eq!(d.peso, None);
    }

    #[test]
    fn envelope_sin_data() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": false, "message": "No autorizado"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("No autorizado"));
    }

    #[test]
    fn formato_de_numeros() {
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(12.5), "12.5");
    }
}
