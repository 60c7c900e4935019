//! Session context
//!
//! Holds the logged-in user and is handed by reference to whatever needs the
//! token. An empty token means nobody is logged in.

use crate::api::BlogApi;
use crate::error::ApiError;
use crate::models::UsuarioLogin;
use crate::shell::Shell;
use crate::toast::ToastKind;

/// Current user plus login state
#[derive(Debug, Clone, Default)]
pub struct Session {
    usuario: UsuarioLogin,
    is_loading: bool,
}

impl Session {
    /// An anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// A session for an already authenticated user
    pub const fn with_usuario(usuario: UsuarioLogin) -> Self {
        Self {
            usuario,
            is_loading: false,
        }
    }

    /// The current user (default value when logged out)
    pub const fn usuario(&self) -> &UsuarioLogin {
        &self.usuario
    }

    /// Token to send in the `Authorization` header
    pub fn token(&self) -> &str {
        &self.usuario.token
    }

    /// Whether a token is held
    pub fn is_authenticated(&self) -> bool {
        self.usuario.is_authenticated()
    }

    /// Whether a login request is in flight
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Mark a login request as started
    pub fn begin_login(&mut self) {
        self.is_loading = true;
    }

    /// Apply the result of a login request. Returns whether it succeeded.
    pub fn finish_login(
        &mut self,
        result: Result<UsuarioLogin, ApiError>,
        shell: &mut Shell,
    ) -> bool {
        self.is_loading = false;
        match result {
            Ok(usuario) => {
                tracing::info!("logged in as {}", usuario.usuario);
                self.usuario = usuario;
                shell.alerta("Usuário foi autenticado com sucesso!", ToastKind::Sucesso);
                true
            }
            Err(e) => {
                tracing::warn!("login failed: {}", e);
                shell.alerta("Dados do usuário inconsistentes!", ToastKind::Erro);
                false
            }
        }
    }

    /// Log in with `credenciais`. Returns whether it succeeded.
    pub async fn handle_login(
        &mut self,
        api: &impl BlogApi,
        credenciais: &UsuarioLogin,
        shell: &mut Shell,
    ) -> bool {
        self.begin_login();
        let result = api.login(credenciais).await;
        self.finish_login(result, shell)
    }

    /// Forget the current user
    pub fn handle_logout(&mut self) {
        if self.is_authenticated() {
            tracing::info!("logged out {}", self.usuario.usuario);
        }
        self.usuario = UsuarioLogin::default();
    }

    /// Report a failed request: a refused token ends the session, anything
    /// else raises `message` as an error notice.
    pub fn handle_error(&mut self, error: &ApiError, message: &str, shell: &mut Shell) {
        if error.is_forbidden() {
            tracing::warn!("token refused, logging out: {}", error);
            self.handle_logout();
        } else {
            tracing::warn!("{}: {}", message, error);
            shell.alerta(message, ToastKind::Erro);
        }
    }
}
