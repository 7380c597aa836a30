use serde::{Deserialize, Serialize};

/// Rol que habilita el panel de administración
pub const ROL_ADMIN: &str = "admin";

/// Usuario cacheado en localStorage tras el login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(alias = "id_usuario")]
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rol: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.rol == ROL_ADMIN
    }

    /// Inicial del avatar (primera letra del nombre en mayúscula)
    pub fn avatar_initial(&self) -> String {
        self.nombre
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn welcome_message(&self) -> String {
        format!("¡Bienvenido/a, {}!", self.nombre)
    }
}

/// Prueba de autenticación del cliente: token + perfil cacheado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acepta_id_usuario_como_alias() {
        let user: User = serde_json::from_str(
            r#"{"id_usuario": 7, "nombre": "ana", "email": "a@b.pe", "rol": "adoptante"}"#,
        )
        .unwrap();
        assert_eq!(user.id, 7);
        assert!(!user.is_admin());
    }

    #[test]
    fn avatar_en_mayuscula() {
        let user = User { id: 1, nombre: "ñandú".into(), email: String::new(), rol: String::new() };
        assert_eq!(user.avatar_initial(), "Ñ");
        assert_eq!(user.welcome_message(), "¡Bienvenido/a, ñandú!");
    }
}
