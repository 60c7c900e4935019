//! Login screen

use crate::error::ApiError;
use crate::models::UsuarioLogin;
use crate::router::Route;
use crate::session::Session;
use crate::shell::Shell;

/// Inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    /// E-mail
    #[default]
    Usuario,
    /// Password
    Senha,
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    /// Typed e-mail
    pub usuario: String,
    /// Typed password
    pub senha: String,
    /// Focused input
    pub focus: LoginField,
}

impl LoginPage {
    /// A logged-in user visiting the login screen goes straight home
    pub fn mount(&self, session: &Session, shell: &mut Shell) {
        if session.is_authenticated() {
            shell.navigate(Route::Home);
        }
    }

    /// Switch input
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Usuario => LoginField::Senha,
            LoginField::Senha => LoginField::Usuario,
        };
    }

    /// Type a character into the focused input
    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Usuario => &mut self.usuario,
            LoginField::Senha => &mut self.senha,
        }
    }

    /// Start a login. Returns the credentials to send, or `None` while a
    /// login is already in flight.
    pub fn begin(&self, session: &mut Session) -> Option<UsuarioLogin> {
        if session.is_loading() {
            return None;
        }
        session.begin_login();
        Some(UsuarioLogin::credentials(self.usuario.trim(), &self.senha))
    }

    /// Apply the login result; success leads to `/home`
    pub fn finish(
        &mut self,
        result: Result<UsuarioLogin, ApiError>,
        session: &mut Session,
        shell: &mut Shell,
    ) {
        if session.finish_login(result, shell) {
            self.senha.clear();
            shell.navigate(Route::Home);
        }
    }
}
