//! Async operations for the TUI
//!
//! Uses channels to communicate between the sync TUI loop and the worker
//! task that talks to the backend.

use tokio::sync::mpsc;

use crate::api::{BlogApi, BlogClient};
use crate::error::ApiError;
use crate::form::{Submission, SubmitKind};
use crate::models::{Postagem, Tema, Usuario, UsuarioLogin};

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum AsyncCommand {
    /// Log in
    Login { credenciais: UsuarioLogin },
    /// Register a user
    CadastrarUsuario { usuario: Usuario },
    /// Load the post listing
    ListarPostagens { token: String },
    /// Load the theme listing
    ListarTemas { token: String },
    /// Load the theme selector of form `generation`
    FormTemas { generation: u64, token: String },
    /// Load the post edited by form `generation`
    FormPostagem {
        generation: u64,
        id: i64,
        token: String,
    },
    /// Load a theme for form `generation`
    FormTema {
        generation: u64,
        id: i64,
        token: String,
    },
    /// Send the submission of form `generation`
    Submit {
        generation: u64,
        submission: Submission,
        token: String,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Results sent back from the async worker to the TUI
#[derive(Debug)]
pub enum AsyncResult {
    /// Login finished
    LoggedIn(Result<UsuarioLogin, ApiError>),
    /// Registration finished
    Registered(Result<Usuario, ApiError>),
    /// Post listing fetched
    Postagens(Result<Vec<Postagem>, ApiError>),
    /// Theme listing fetched
    Temas(Result<Vec<Tema>, ApiError>),
    /// Theme selector fetched
    FormTemas {
        generation: u64,
        result: Result<Vec<Tema>, ApiError>,
    },
    /// Edited post fetched
    FormPostagem {
        generation: u64,
        result: Result<Postagem, ApiError>,
    },
    /// Theme fetched
    FormTema {
        generation: u64,
        result: Result<Tema, ApiError>,
    },
    /// Submission finished
    Submitted {
        generation: u64,
        kind: SubmitKind,
        result: Result<Postagem, ApiError>,
    },
}

/// Channel handles for communicating with the async worker
pub struct AsyncHandle {
    /// Send commands to the worker
    pub cmd_tx: mpsc::Sender<AsyncCommand>,
    /// Receive results from the worker
    pub result_rx: mpsc::Receiver<AsyncResult>,
}

/// Spawn the async worker and return handles
pub fn spawn_worker(client: BlogClient) -> AsyncHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<AsyncCommand>(32);
    let (result_tx, result_rx) = mpsc::channel::<AsyncResult>(32);

    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            if matches!(cmd, AsyncCommand::Shutdown) {
                break;
            }
            // Requests are independent; a slow one must not hold up the rest
            let client = client.clone();
            let result_tx = result_tx.clone();
            tokio::spawn(async move {
                if let Some(result) = execute(&client, cmd).await
                    && result_tx.send(result).await.is_err()
                {
                    tracing::debug!("worker: result dropped, UI gone");
                }
            });
        }
    });

    AsyncHandle { cmd_tx, result_rx }
}

/// Run one command against the backend
pub async fn execute(api: &BlogClient, cmd: AsyncCommand) -> Option<AsyncResult> {
    let result = match cmd {
        AsyncCommand::Login { credenciais } => AsyncResult::LoggedIn(api.login(&credenciais).await),
        AsyncCommand::CadastrarUsuario { usuario } => {
            AsyncResult::Registered(api.cadastrar_usuario(&usuario).await)
        }
        AsyncCommand::ListarPostagens { token } => {
            AsyncResult::Postagens(api.listar_postagens(&token).await)
        }
        AsyncCommand::ListarTemas { token } => AsyncResult::Temas(api.listar_temas(&token).await),
        AsyncCommand::FormTemas { generation, token } => AsyncResult::FormTemas {
            generation,
            result: api.listar_temas(&token).await,
        },
        AsyncCommand::FormPostagem {
            generation,
            id,
            token,
        } => AsyncResult::FormPostagem {
            generation,
            result: api.buscar_postagem(id, &token).await,
        },
        AsyncCommand::FormTema {
            generation,
            id,
            token,
        } => AsyncResult::FormTema {
            generation,
            result: api.buscar_tema(id, &token).await,
        },
        AsyncCommand::Submit {
            generation,
            submission,
            token,
        } => {
            let result = match submission.kind {
                SubmitKind::Cadastrar => api.cadastrar_postagem(&submission.postagem, &token).await,
                SubmitKind::Atualizar => api.atualizar_postagem(&submission.postagem, &token).await,
            };
            AsyncResult::Submitted {
                generation,
                kind: submission.kind,
                result,
            }
        }
        AsyncCommand::Shutdown => return None,
    };

    if let Some(e) = result.error() {
        tracing::debug!("worker: {}", e);
    }
    Some(result)
}

impl AsyncResult {
    fn error(&self) -> Option<&ApiError> {
        match self {
            Self::LoggedIn(r) => r.as_ref().err(),
            Self::Registered(r) => r.as_ref().err(),
            Self::Postagens(r) => r.as_ref().err(),
            Self::Temas(r) | Self::FormTemas { result: r, .. } => r.as_ref().err(),
            Self::FormPostagem { result, .. } | Self::Submitted { result, .. } => {
                result.as_ref().err()
            }
            Self::FormTema { result, .. } => result.as_ref().err(),
        }
    }
}
