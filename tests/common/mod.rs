//! Scripted in-memory backend shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use blog_pessoal::{ApiError, BlogApi, Postagem, Tema, Usuario, UsuarioLogin};

pub const TOKEN: &str = "Bearer eyJhbGciOi";

/// A request the fake received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    CadastrarUsuario(String),
    ListarTemas,
    BuscarTema(i64),
    ListarPostagens,
    BuscarPostagem(i64),
    CadastrarPostagem(Postagem),
    AtualizarPostagem(Postagem),
}

/// Answers from fixed data; statuses in `failures` turn a path into an error
#[derive(Default)]
pub struct ScriptedApi {
    pub temas: Vec<Tema>,
    pub postagens: Vec<Postagem>,
    pub usuario: Option<UsuarioLogin>,
    failures: HashMap<&'static str, u16>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            temas: vec![Tema::new(1, "Rust"), Tema::new(2, "Java")],
            ..Self::default()
        }
    }

    /// Make every request to `path` fail with `status`
    pub fn failing(mut self, path: &'static str, status: u16) -> Self {
        self.failures.insert(path, status);
        self
    }

    /// Accept logins for `usuario`
    pub fn with_usuario(mut self, usuario: UsuarioLogin) -> Self {
        self.usuario = Some(usuario);
        self
    }

    pub fn with_postagem(mut self, postagem: Postagem) -> Self {
        self.postagens.push(postagem);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call, path: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failures.get(path) {
            Some(status) => Err(ApiError::status(path, *status)),
            None => Ok(()),
        }
    }

    fn check_token(token: &str, path: &'static str) -> Result<(), ApiError> {
        if token == TOKEN {
            Ok(())
        } else {
            Err(ApiError::status(path, 403))
        }
    }
}

impl BlogApi for ScriptedApi {
    async fn login(&self, credenciais: &UsuarioLogin) -> Result<UsuarioLogin, ApiError> {
        self.record(Call::Login(credenciais.usuario.clone()), "/usuarios/logar")?;
        match &self.usuario {
            Some(u) if u.usuario == credenciais.usuario && u.senha == credenciais.senha => {
                Ok(UsuarioLogin {
                    senha: String::new(),
                    ..u.clone()
                })
            }
            _ => Err(ApiError::status("/usuarios/logar", 401)),
        }
    }

    async fn cadastrar_usuario(&self, usuario: &Usuario) -> Result<Usuario, ApiError> {
        self.record(
            Call::CadastrarUsuario(usuario.usuario.clone()),
            "/usuarios/cadastrar",
        )?;
        Ok(Usuario {
            id: Some(99),
            ..usuario.clone()
        })
    }

    async fn listar_temas(&self, token: &str) -> Result<Vec<Tema>, ApiError> {
        self.record(Call::ListarTemas, "/temas")?;
        Self::check_token(token, "/temas")?;
        Ok(self.temas.clone())
    }

    async fn buscar_tema(&self, id: i64, token: &str) -> Result<Tema, ApiError> {
        self.record(Call::BuscarTema(id), "/temas/{id}")?;
        Self::check_token(token, "/temas/{id}")?;
        self.temas
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::status(format!("/temas/{id}"), 404))
    }

    async fn listar_postagens(&self, token: &str) -> Result<Vec<Postagem>, ApiError> {
        self.record(Call::ListarPostagens, "/postagens")?;
        Self::check_token(token, "/postagens")?;
        Ok(self.postagens.clone())
    }

    async fn buscar_postagem(&self, id: i64, token: &str) -> Result<Postagem, ApiError> {
        self.record(Call::BuscarPostagem(id), "/postagens/{id}")?;
        Self::check_token(token, "/postagens/{id}")?;
        self.postagens
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::status(format!("/postagens/{id}"), 404))
    }

    async fn cadastrar_postagem(
        &self,
        postagem: &Postagem,
        token: &str,
    ) -> Result<Postagem, ApiError> {
        self.record(Call::CadastrarPostagem(postagem.clone()), "POST /postagens")?;
        Self::check_token(token, "/postagens")?;
        Ok(Postagem {
            id: Some(100),
            ..postagem.clone()
        })
    }

    async fn atualizar_postagem(
        &self,
        postagem: &Postagem,
        token: &str,
    ) -> Result<Postagem, ApiError> {
        self.record(Call::AtualizarPostagem(postagem.clone()), "PUT /postagens")?;
        Self::check_token(token, "/postagens")?;
        Ok(postagem.clone())
    }
}

/// The user the fake accepts
pub fn usuario_login() -> UsuarioLogin {
    UsuarioLogin {
        id: 7,
        nome: "Lucas".to_string(),
        usuario: "lucas@email.com".to_string(),
        senha: "12345678".to_string(),
        foto: String::new(),
        token: TOKEN.to_string(),
    }
}

/// A session already holding [`usuario_login`]
pub fn logged_in() -> blog_pessoal::Session {
    blog_pessoal::Session::with_usuario(usuario_login())
}
