// ============================================================================
// STORAGE - Almacenamiento clave/valor persistente (localStorage)
// ============================================================================

use web_sys::{window, Storage};
use crate::error::ApiError;

/// Almacenamiento clave/valor de strings. En el navegador es `localStorage`;
/// en tests, un mapa en memoria.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ApiError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove_item(&self, key: &str) -> Result<(), ApiError>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` del navegador
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, ApiError> {
        get_local_storage()
            .ok_or_else(|| ApiError::Storage("No se pudo acceder a localStorage".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ApiError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| ApiError::Storage(format!("Error leyendo '{}' de localStorage", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| ApiError::Storage("Error guardando en localStorage".to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), ApiError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| ApiError::Storage("Error eliminando de localStorage".to_string()))
    }
}
