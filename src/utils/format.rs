// Helpers de presentación compartidos por las vistas

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Escapa texto para interpolarlo dentro de HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fecha corta estilo es-ES (d/m/aaaa) en la zona horaria del navegador.
/// Si no se reconoce, se devuelve tal cual.
pub fn format_fecha(raw: &str) -> String {
    format_fecha_en(raw, &Local)
}

/// Los instantes con offset (RFC 3339) se pasan a `tz` antes de tomar el día;
/// las fechas sin offset ya son locales.
pub(crate) fn format_fecha_en<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(tz).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%-d/%-m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Primeros `max` caracteres + "..." (cuenta caracteres, no bytes)
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
