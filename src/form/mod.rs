//! Post form (create and edit)
//!
//! [`FormPostagem`] is split into synchronous steps (`begin_*`, `*_loaded`,
//! `finish_submit`) so the TUI can run the requests on its worker task, and
//! async wrappers (`mount`, `select_tema`, `submit`) that drive the same
//! steps against any [`BlogApi`].

mod fields;

pub use fields::{Field, FieldUpdate, reduce};

use crate::api::BlogApi;
use crate::error::ApiError;
use crate::models::{Postagem, Tema};
use crate::router::Route;
use crate::session::Session;
use crate::shell::Shell;
use crate::toast::ToastKind;

/// Whether a submit creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    /// `POST /postagens`
    Cadastrar,
    /// `PUT /postagens`
    Atualizar,
}

impl SubmitKind {
    const fn success_message(self) -> &'static str {
        match self {
            Self::Cadastrar => "Postagem cadastrada com sucesso",
            Self::Atualizar => "Postagem atualizada com sucesso",
        }
    }

    const fn failure_message(self) -> &'static str {
        match self {
            Self::Cadastrar => "Erro ao cadastrar a Postagem",
            Self::Atualizar => "Erro ao atualizar a Postagem",
        }
    }
}

/// A request the form wants sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Create or update
    pub kind: SubmitKind,
    /// Body to send
    pub postagem: Postagem,
}

/// What to fetch once the form is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPlan {
    /// Post to load, when editing
    pub postagem_id: Option<i64>,
}

/// State of the create/edit post form
#[derive(Debug, Clone, Default)]
pub struct FormPostagem {
    id: Option<i64>,
    postagem: Postagem,
    tema: Tema,
    temas: Vec<Tema>,
    is_loading: bool,
    postagem_carregada: bool,
}

impl FormPostagem {
    /// A form for a new post (`id` is `None`) or for editing post `id`
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Form matching a route, if the route hosts the form
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::NovaPostagem => Some(Self::new(None)),
            Route::EditarPostagem(id) => Some(Self::new(Some(id))),
            _ => None,
        }
    }

    /// Post being edited, if any
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Whether the form edits an existing post
    pub const fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Current form state
    pub const fn postagem(&self) -> &Postagem {
        &self.postagem
    }

    /// Currently selected theme
    pub const fn tema(&self) -> &Tema {
        &self.tema
    }

    /// Themes offered in the selector
    pub fn temas(&self) -> &[Tema] {
        &self.temas
    }

    /// Whether a submit is in flight
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Heading shown above the form
    pub const fn titulo(&self) -> &'static str {
        if self.is_editing() {
            "Editar Postagem"
        } else {
            "Nova Postagem"
        }
    }

    /// Caption of the submit control
    pub const fn rotulo_botao(&self) -> &'static str {
        if self.is_editing() { "Atualizar" } else { "Cadastrar" }
    }

    /// Whether the submit control is disabled.
    ///
    /// Disabled while no theme description is loaded; when editing, also
    /// until the post itself has arrived.
    pub fn submit_disabled(&self) -> bool {
        !self.tema.is_loaded() || (self.is_editing() && !self.postagem_carregada)
    }

    /// Guard the form behind a session. Without a token the user is sent to
    /// `/` and nothing must be fetched.
    pub fn begin_mount(&self, session: &Session, shell: &mut Shell) -> Option<MountPlan> {
        if !session.is_authenticated() {
            shell.alerta("Você precisa estar logado", ToastKind::Info);
            shell.navigate(Route::Root);
            return None;
        }

        Some(MountPlan {
            postagem_id: self.id,
        })
    }

    /// Apply the theme list
    pub fn temas_loaded(
        &mut self,
        result: Result<Vec<Tema>, ApiError>,
        session: &mut Session,
        shell: &mut Shell,
    ) {
        match result {
            Ok(temas) => self.temas = temas,
            Err(e) => session.handle_error(&e, "Erro ao buscar os temas", shell),
        }
    }

    /// Apply the post being edited. Returns the id of its theme, which the
    /// caller must fetch and hand to [`Self::tema_loaded`].
    pub fn postagem_loaded(
        &mut self,
        result: Result<Postagem, ApiError>,
        session: &mut Session,
        shell: &mut Shell,
    ) -> Option<i64> {
        match result {
            Ok(postagem) => {
                let tema_id = postagem.tema.as_ref().map(|t| t.id);
                self.tema = postagem.tema.clone().unwrap_or_default();
                self.postagem = postagem;
                self.postagem_carregada = true;
                tema_id
            }
            Err(e) => {
                session.handle_error(&e, "Erro ao buscar a postagem", shell);
                None
            }
        }
    }

    /// Apply a fetched theme, either chosen in the selector or the one of the
    /// post being edited
    pub fn tema_loaded(
        &mut self,
        result: Result<Tema, ApiError>,
        session: &mut Session,
        shell: &mut Shell,
    ) {
        match result {
            Ok(tema) => {
                self.postagem.tema = Some(tema.clone());
                self.tema = tema;
            }
            Err(e) => session.handle_error(&e, "Erro ao buscar o tema", shell),
        }
    }

    /// Apply a field edit
    pub fn apply(&mut self, update: FieldUpdate, session: &Session) {
        self.postagem = reduce(&self.postagem, update, &self.tema, session.usuario());
    }

    /// Start a submit. Returns `None` (and sends nothing) while the control
    /// is disabled, a submit is in flight, or a required field is empty.
    pub fn begin_submit(&mut self, shell: &mut Shell) -> Option<Submission> {
        if self.submit_disabled() || self.is_loading {
            return None;
        }

        if let Some(field) = Field::all()
            .iter()
            .find(|f| f.required() && f.value(&self.postagem).trim().is_empty())
        {
            shell.alerta(format!("Preencha o campo {}", field.label()), ToastKind::Info);
            return None;
        }

        self.is_loading = true;
        let kind = if self.is_editing() {
            SubmitKind::Atualizar
        } else {
            SubmitKind::Cadastrar
        };

        Some(Submission {
            kind,
            postagem: self.postagem.clone(),
        })
    }

    /// Apply the outcome of a submit and leave for the listing
    pub fn finish_submit(
        &mut self,
        kind: SubmitKind,
        result: Result<Postagem, ApiError>,
        session: &mut Session,
        shell: &mut Shell,
    ) {
        match result {
            Ok(postagem) => {
                tracing::info!("post {:?} saved ({:?})", postagem.id, kind);
                self.postagem = postagem;
                shell.alerta(kind.success_message(), ToastKind::Sucesso);
            }
            Err(e) => session.handle_error(&e, kind.failure_message(), shell),
        }

        self.is_loading = false;
        shell.navigate(Route::Postagens);
    }

    /// Mount the form: check the session, load the themes and, when editing,
    /// the post and its theme
    pub async fn mount(&mut self, api: &impl BlogApi, session: &mut Session, shell: &mut Shell) {
        let Some(plan) = self.begin_mount(session, shell) else {
            return;
        };

        let temas = api.listar_temas(session.token()).await;
        self.temas_loaded(temas, session, shell);

        if let Some(id) = plan.postagem_id {
            let postagem = api.buscar_postagem(id, session.token()).await;
            if let Some(tema_id) = self.postagem_loaded(postagem, session, shell) {
                let tema = api.buscar_tema(tema_id, session.token()).await;
                self.tema_loaded(tema, session, shell);
            }
        }
    }

    /// Select theme `id` in the selector
    pub async fn select_tema(
        &mut self,
        id: i64,
        api: &impl BlogApi,
        session: &mut Session,
        shell: &mut Shell,
    ) {
        let tema = api.buscar_tema(id, session.token()).await;
        self.tema_loaded(tema, session, shell);
    }

    /// Submit the form
    pub async fn submit(&mut self, api: &impl BlogApi, session: &mut Session, shell: &mut Shell) {
        let Some(submission) = self.begin_submit(shell) else {
            return;
        };

        let result = match submission.kind {
            SubmitKind::Cadastrar => {
                api.cadastrar_postagem(&submission.postagem, session.token())
                    .await
            }
            SubmitKind::Atualizar => {
                api.atualizar_postagem(&submission.postagem, session.token())
                    .await
            }
        };

        self.finish_submit(submission.kind, result, session, shell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UsuarioLogin;

    fn session() -> Session {
        Session::with_usuario(UsuarioLogin {
            id: 1,
            nome: "Lucas".to_string(),
            token: "Bearer t".to_string(),
            ..UsuarioLogin::default()
        })
    }

    fn filled(form: &mut FormPostagem, session: &Session) {
        form.apply(FieldUpdate::Titulo("Título".to_string()), session);
        form.apply(FieldUpdate::Texto("Texto".to_string()), session);
    }

    #[test]
    fn test_mount_without_token_redirects() {
        let form = FormPostagem::new(None);
        let mut shell = Shell::new(Route::NovaPostagem, std::time::Duration::from_secs(5));

        assert_eq!(form.begin_mount(&Session::new(), &mut shell), None);
        assert_eq!(shell.route(), Route::Root);
        assert!(shell.toasts.contains("Você precisa estar logado"));
    }

    #[test]
    fn test_submit_disabled_iff_tema_description_empty() {
        let mut session = session();
        let mut shell = Shell::default();
        let mut form = FormPostagem::new(None);
        assert!(form.submit_disabled());

        form.tema_loaded(Ok(Tema::new(3, "")), &mut session, &mut shell);
        assert!(form.submit_disabled());

        form.tema_loaded(Ok(Tema::new(3, "Rust")), &mut session, &mut shell);
        assert!(!form.submit_disabled());
        assert_eq!(form.tema(), &Tema::new(3, "Rust"));
        assert_eq!(form.postagem().tema, Some(Tema::new(3, "Rust")));
    }

    #[test]
    fn test_edit_waits_for_post_and_theme() {
        let mut session = session();
        let mut shell = Shell::default();
        let mut form = FormPostagem::new(Some(5));

        // theme picked before the post arrived
        form.tema_loaded(Ok(Tema::new(1, "Rust")), &mut session, &mut shell);
        assert!(form.submit_disabled());

        let post = Postagem {
            id: Some(5),
            titulo: "Spring".to_string(),
            tema: Some(Tema::new(2, "")),
            ..Postagem::default()
        };
        let tema_id = form.postagem_loaded(Ok(post), &mut session, &mut shell);
        assert_eq!(tema_id, Some(2));
        assert!(form.submit_disabled());

        form.tema_loaded(Ok(Tema::new(2, "Java")), &mut session, &mut shell);
        assert!(!form.submit_disabled());
        assert_eq!(form.postagem().tema_descricao(), "Java");
        assert_eq!(form.postagem().titulo, "Spring");
    }

    #[test]
    fn test_begin_submit_branches_on_id() {
        let mut session = session();
        let mut shell = Shell::default();

        let mut novo = FormPostagem::new(None);
        novo.tema_loaded(Ok(Tema::new(1, "Rust")), &mut session, &mut shell);
        filled(&mut novo, &session);
        let submission = novo.begin_submit(&mut shell).unwrap();
        assert_eq!(submission.kind, SubmitKind::Cadastrar);
        assert!(novo.is_loading());

        // a second press while in flight sends nothing
        assert!(novo.begin_submit(&mut shell).is_none());

        let mut edicao = FormPostagem::new(Some(5));
        edicao.postagem_loaded(Ok(Postagem::default()), &mut session, &mut shell);
        edicao.tema_loaded(Ok(Tema::new(1, "Rust")), &mut session, &mut shell);
        filled(&mut edicao, &session);
        assert_eq!(
            edicao.begin_submit(&mut shell).map(|s| s.kind),
            Some(SubmitKind::Atualizar)
        );
    }

    #[test]
    fn test_required_fields_block_submit() {
        let mut session = session();
        let mut shell = Shell::default();
        let mut form = FormPostagem::new(None);
        form.tema_loaded(Ok(Tema::new(1, "Rust")), &mut session, &mut shell);

        assert!(form.begin_submit(&mut shell).is_none());
        assert!(!form.is_loading());
        assert!(shell.toasts.contains("Preencha o campo Título da Postagem"));
    }

    #[test]
    fn test_finish_submit_always_navigates_once() {
        let mut session = session();
        let mut shell = Shell::default();
        let mut form = FormPostagem::new(None);
        form.is_loading = true;

        form.finish_submit(
            SubmitKind::Cadastrar,
            Err(ApiError::status("/postagens", 500)),
            &mut session,
            &mut shell,
        );

        assert!(!form.is_loading());
        assert_eq!(shell.router.visits(Route::Postagens), 1);
        assert!(shell.toasts.contains("Erro ao cadastrar a Postagem"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_for_route() {
        assert_eq!(FormPostagem::for_route(Route::EditarPostagem(4)).and_then(|f| f.id()), Some(4));
        assert!(FormPostagem::for_route(Route::NovaPostagem).is_some_and(|f| !f.is_editing()));
        assert!(FormPostagem::for_route(Route::Home).is_none());
    }
}
