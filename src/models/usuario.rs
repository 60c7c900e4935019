//! User models (registration body and session user)

use serde::{Deserialize, Serialize};

/// A registered user, as embedded in posts and sent on registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    /// Backend identifier, absent until registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(default)]
    pub nome: String,
    /// Login e-mail
    #[serde(default)]
    pub usuario: String,
    /// Password (only meaningful on registration)
    #[serde(default)]
    pub senha: String,
    /// Avatar URL
    #[serde(default)]
    pub foto: String,
}

/// The authenticated user held by the session.
///
/// The default value carries an empty token and means "nobody is logged in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioLogin {
    /// Backend identifier
    #[serde(default)]
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub nome: String,
    /// Login e-mail
    #[serde(default)]
    pub usuario: String,
    /// Password, sent on login and blanked by the backend in the reply
    #[serde(default)]
    pub senha: String,
    /// Avatar URL
    #[serde(default)]
    pub foto: String,
    /// Authorization token, sent verbatim in the `Authorization` header
    #[serde(default)]
    pub token: String,
}

impl UsuarioLogin {
    /// Build a login request from credentials
    pub fn credentials(usuario: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            usuario: usuario.into(),
            senha: senha.into(),
            ..Self::default()
        }
    }

    /// Whether this user carries a token
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl From<&UsuarioLogin> for Usuario {
    fn from(login: &UsuarioLogin) -> Self {
        Self {
            id: Some(login.id),
            nome: login.nome.clone(),
            usuario: login.usuario.clone(),
            senha: login.senha.clone(),
            foto: login.foto.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_login_is_anonymous() {
        assert!(!UsuarioLogin::default().is_authenticated());
    }

    #[test]
    fn test_owner_from_session_drops_token() {
        let login = UsuarioLogin {
            id: 3,
            nome: "Lucas".to_string(),
            usuario: "lucas@email.com".to_string(),
            token: "Bearer abc".to_string(),
            ..UsuarioLogin::default()
        };
        let owner = Usuario::from(&login);
        assert_eq!(owner.id, Some(3));
        assert_eq!(owner.nome, "Lucas");

        let json = serde_json::to_value(&owner).unwrap();
        assert!(json.get("token").is_none());
    }

    #[test]
    fn test_registration_body_omits_id() {
        let json = serde_json::to_value(Usuario::default()).unwrap();
        assert!(json.get("id").is_none());
    }
}
