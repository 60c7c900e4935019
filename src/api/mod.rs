//! Backend access
//!
//! [`service`] holds the generic GET/POST/PUT helpers, [`BlogClient`] maps
//! every backend endpoint onto them, and [`BlogApi`] is the seam the rest of
//! the crate talks to.

mod client;
pub mod service;

pub use client::BlogClient;
pub use service::{RequestConfig, Service};

use crate::error::ApiError;
use crate::models::{Postagem, Tema, Usuario, UsuarioLogin};

/// Operations offered by the Blog Pessoal backend
#[allow(async_fn_in_trait)]
pub trait BlogApi {
    /// Exchange credentials for a session user (`POST /usuarios/logar`)
    async fn login(&self, credenciais: &UsuarioLogin) -> Result<UsuarioLogin, ApiError>;

    /// Register a new user (`POST /usuarios/cadastrar`)
    async fn cadastrar_usuario(&self, usuario: &Usuario) -> Result<Usuario, ApiError>;

    /// List every theme (`GET /temas`)
    async fn listar_temas(&self, token: &str) -> Result<Vec<Tema>, ApiError>;

    /// Fetch one theme (`GET /temas/{id}`)
    async fn buscar_tema(&self, id: i64, token: &str) -> Result<Tema, ApiError>;

    /// List every post (`GET /postagens`)
    async fn listar_postagens(&self, token: &str) -> Result<Vec<Postagem>, ApiError>;

    /// Fetch one post (`GET /postagens/{id}`)
    async fn buscar_postagem(&self, id: i64, token: &str) -> Result<Postagem, ApiError>;

    /// Create a post (`POST /postagens`)
    async fn cadastrar_postagem(&self, postagem: &Postagem, token: &str)
    -> Result<Postagem, ApiError>;

    /// Update a post in place (`PUT /postagens`)
    async fn atualizar_postagem(&self, postagem: &Postagem, token: &str)
    -> Result<Postagem, ApiError>;
}
