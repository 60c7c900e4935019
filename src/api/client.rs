//! Blog Pessoal backend client built on the HTTP helpers

use std::time::Duration;

use crate::error::ApiError;
use crate::models::{Postagem, Tema, Usuario, UsuarioLogin};

use super::BlogApi;
use super::service::{RequestConfig, Service};

/// REST client for the Blog Pessoal backend
#[derive(Debug, Clone)]
pub struct BlogClient {
    service: Service,
}

impl BlogClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            service: Service::new(base_url, timeout)?,
        })
    }
}

impl BlogApi for BlogClient {
    async fn login(&self, credenciais: &UsuarioLogin) -> Result<UsuarioLogin, ApiError> {
        let mut usuario = UsuarioLogin::default();
        self.service
            .cadastrar(
                "/usuarios/logar",
                credenciais,
                |u| usuario = u,
                &RequestConfig::default(),
            )
            .await?;
        Ok(usuario)
    }

    async fn cadastrar_usuario(&self, usuario: &Usuario) -> Result<Usuario, ApiError> {
        let mut criado = Usuario::default();
        self.service
            .cadastrar(
                "/usuarios/cadastrar",
                usuario,
                |u| criado = u,
                &RequestConfig::default(),
            )
            .await?;
        Ok(criado)
    }

    async fn listar_temas(&self, token: &str) -> Result<Vec<Tema>, ApiError> {
        let mut temas = Vec::new();
        self.service
            .buscar("/temas", |t| temas = t, &RequestConfig::authorized(token))
            .await?;
        Ok(temas)
    }

    async fn buscar_tema(&self, id: i64, token: &str) -> Result<Tema, ApiError> {
        let mut tema = Tema::default();
        self.service
            .buscar(
                &format!("/temas/{id}"),
                |t| tema = t,
                &RequestConfig::authorized(token),
            )
            .await?;
        Ok(tema)
    }

    async fn listar_postagens(&self, token: &str) -> Result<Vec<Postagem>, ApiError> {
        let mut postagens = Vec::new();
        self.service
            .buscar(
                "/postagens",
                |p| postagens = p,
                &RequestConfig::authorized(token),
            )
            .await?;
        Ok(postagens)
    }

    async fn buscar_postagem(&self, id: i64, token: &str) -> Result<Postagem, ApiError> {
        let mut postagem = Postagem::default();
        self.service
            .buscar(
                &format!("/postagens/{id}"),
                |p| postagem = p,
                &RequestConfig::authorized(token),
            )
            .await?;
        Ok(postagem)
    }

    async fn cadastrar_postagem(
        &self,
        postagem: &Postagem,
        token: &str,
    ) -> Result<Postagem, ApiError> {
        let mut criada = Postagem::default();
        self.service
            .cadastrar(
                "/postagens",
                postagem,
                |p| criada = p,
                &RequestConfig::authorized(token),
            )
            .await?;
        Ok(criada)
    }

    async fn atualizar_postagem(
        &self,
        postagem: &Postagem,
        token: &str,
    ) -> Result<Postagem, ApiError> {
        let mut atualizada = Postagem::default();
        self.service
            .atualizar(
                "/postagens",
                postagem,
                |p| atualizada = p,
                &RequestConfig::authorized(token),
            )
            .await?;
        Ok(atualizada)
    }
}
