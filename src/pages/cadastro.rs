//! Registration screen

use crate::error::ApiError;
use crate::models::Usuario;
use crate::router::Route;
use crate::shell::Shell;
use crate::toast::ToastKind;

/// Minimum password length accepted by the backend
pub const MIN_SENHA: usize = 8;

/// Inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CadastroField {
    /// Display name
    #[default]
    Nome,
    /// E-mail
    Usuario,
    /// Avatar URL
    Foto,
    /// Password
    Senha,
    /// Password confirmation
    ConfirmarSenha,
}

impl CadastroField {
    /// Inputs in form order
    pub const fn all() -> &'static [Self] {
        &[
            Self::Nome,
            Self::Usuario,
            Self::Foto,
            Self::Senha,
            Self::ConfirmarSenha,
        ]
    }

    /// Label shown next to the input
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Nome => "Nome",
            Self::Usuario => "Usuário",
            Self::Foto => "Foto",
            Self::Senha => "Senha",
            Self::ConfirmarSenha => "Confirmar Senha",
        }
    }

    /// Whether the value is masked
    pub const fn secret(&self) -> bool {
        matches!(self, Self::Senha | Self::ConfirmarSenha)
    }

    /// Next input, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct CadastroPage {
    /// Display name
    pub nome: String,
    /// E-mail
    pub usuario: String,
    /// Avatar URL
    pub foto: String,
    /// Password
    pub senha: String,
    /// Password confirmation
    pub confirmar_senha: String,
    /// Focused input
    pub focus: CadastroField,
    /// Whether a submission is in flight
    pub is_loading: bool,
}

impl CadastroPage {
    /// Value of an input
    pub fn value(&self, field: CadastroField) -> &str {
        match field {
            CadastroField::Nome => &self.nome,
            CadastroField::Usuario => &self.usuario,
            CadastroField::Foto => &self.foto,
            CadastroField::Senha => &self.senha,
            CadastroField::ConfirmarSenha => &self.confirmar_senha,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            CadastroField::Nome => &mut self.nome,
            CadastroField::Usuario => &mut self.usuario,
            CadastroField::Foto => &mut self.foto,
            CadastroField::Senha => &mut self.senha,
            CadastroField::ConfirmarSenha => &mut self.confirmar_senha,
        }
    }

    /// Type a character into the focused input
    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Whether a registration is in flight
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Validate and start a registration. Inconsistent passwords are
    /// rejected locally and both password inputs are cleared.
    pub fn begin(&mut self, shell: &mut Shell) -> Option<Usuario> {
        if self.is_loading {
            return None;
        }

        if self.senha != self.confirmar_senha || self.senha.chars().count() < MIN_SENHA {
            shell.alerta(
                "Dados do usuário inconsistentes! Verifique as informações do cadastro.",
                ToastKind::Erro,
            );
            self.senha.clear();
            self.confirmar_senha.clear();
            return None;
        }

        self.is_loading = true;
        Some(Usuario {
            id: None,
            nome: self.nome.trim().to_string(),
            usuario: self.usuario.trim().to_string(),
            senha: self.senha.clone(),
            foto: self.foto.trim().to_string(),
        })
    }

    /// Apply the registration result; success leads to `/login`
    pub fn finish(&mut self, result: Result<Usuario, ApiError>, shell: &mut Shell) {
        self.is_loading = false;
        match result {
            Ok(usuario) => {
                tracing::info!("registered {}", usuario.usuario);
                shell.alerta("Usuário cadastrado com sucesso!", ToastKind::Sucesso);
                *self = Self::default();
                shell.navigate(Route::Login);
            }
            Err(e) => {
                tracing::warn!("registration failed: {}", e);
                shell.alerta("Erro ao cadastrar o usuário!", ToastKind::Erro);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(senha: &str, confirmar: &str) -> CadastroPage {
        CadastroPage {
            nome: "Lucas".to_string(),
            usuario: "lucas@email.com".to_string(),
            senha: senha.to_string(),
            confirmar_senha: confirmar.to_string(),
            ..CadastroPage::default()
        }
    }

    #[test]
    fn test_mismatched_passwords_are_rejected() {
        let mut shell = Shell::default();
        let mut page = page("12345678", "12345679");
        assert!(page.begin(&mut shell).is_none());
        assert!(page.senha.is_empty());
        assert!(page.confirmar_senha.is_empty());
        assert!(!page.is_loading());
        assert_eq!(shell.toasts.current().map(|t| t.kind), Some(ToastKind::Erro));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let mut shell = Shell::default();
        assert!(page("1234567", "1234567").begin(&mut shell).is_none());
    }

    #[test]
    fn test_successful_registration_goes_to_login() {
        let mut shell = Shell::default();
        let mut page = page("12345678", "12345678");
        let usuario = page.begin(&mut shell).unwrap();
        assert_eq!(usuario.id, None);
        assert!(page.begin(&mut shell).is_none());

        page.finish(Ok(Usuario { id: Some(1), ..usuario }), &mut shell);
        assert_eq!(shell.route(), Route::Login);
        assert!(shell.toasts.contains("Usuário cadastrado com sucesso!"));
        assert!(page.nome.is_empty());
    }

    #[test]
    fn test_failed_registration_stays() {
        let mut shell = Shell::default();
        let mut page = page("12345678", "12345678");
        page.begin(&mut shell);
        page.finish(Err(ApiError::status("/usuarios/cadastrar", 400)), &mut shell);
        assert_eq!(shell.route(), Route::Root);
        assert!(shell.toasts.contains("Erro ao cadastrar o usuário!"));
        assert_eq!(page.nome, "Lucas");
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(CadastroField::ConfirmarSenha.next(), CadastroField::Nome);
        assert!(CadastroField::Senha.secret());
    }
}
