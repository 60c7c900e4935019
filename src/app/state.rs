//! Application state

use std::time::Instant;

use super::async_ops::{AsyncCommand, AsyncResult};
use crate::config::Config;
use crate::form::{Field, FormPostagem};
use crate::pages::{CadastroPage, ListaPostagens, ListaTemas, LoginPage, lista_postagens, lista_temas};
use crate::router::Route;
use crate::session::Session;
use crate::shell::Shell;
use crate::theme::Theme;
use crate::toast::ToastKind;

/// Redirects followed in one pass before giving up
const MAX_REDIRECTS: usize = 8;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Screens take the keys
    #[default]
    Normal,
    /// Shortcut overlay
    Help,
    /// Theme selector overlay
    ThemePicker,
}

/// Focused control of the post form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// A text input
    Field(Field),
    /// The theme selector
    Tema,
    /// The submit control
    Enviar,
}

impl Default for FormFocus {
    fn default() -> Self {
        Self::Field(Field::Titulo)
    }
}

impl FormFocus {
    /// Following control, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Field(Field::Linkedin) => Self::Tema,
            Self::Field(f) => Self::Field(f.next()),
            Self::Tema => Self::Enviar,
            Self::Enviar => Self::Field(Field::Titulo),
        }
    }

    /// Preceding control, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Field(Field::Titulo) => Self::Enviar,
            Self::Field(f) => Self::Field(f.prev()),
            Self::Tema => Self::Field(Field::Linkedin),
            Self::Enviar => Self::Tema,
        }
    }
}

/// Application state
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Whether to quit
    pub should_quit: bool,
    /// Current theme
    pub theme: Theme,
    /// Current mode
    pub mode: Mode,
    /// Theme picker cursor
    pub theme_picker_index: usize,

    /// Logged-in user
    pub session: Session,
    /// Router and notices
    pub shell: Shell,

    /// Login screen
    pub login: LoginPage,
    /// Registration screen
    pub cadastro: CadastroPage,
    /// Post listing
    pub postagens: ListaPostagens,
    /// Theme listing
    pub temas: ListaTemas,

    /// Post form, while a form route is active
    pub form: Option<FormPostagem>,
    /// Focused form control
    pub form_focus: FormFocus,
    /// Cursor in the theme selector
    pub tema_cursor: usize,
    /// Bumped every time a form is mounted; stale worker results are dropped
    pub form_generation: u64,

    mounted: Option<Route>,
    tick: u64,
}

impl AppState {
    /// Create a new app state starting at `route`
    pub fn new(config: Config, route: Route) -> Self {
        let theme = config.theme;
        let shell = Shell::new(route, config.toast_duration());

        Self {
            config,
            should_quit: false,
            theme,
            mode: Mode::Normal,
            theme_picker_index: 0,
            session: Session::new(),
            shell,
            login: LoginPage::default(),
            cadastro: CadastroPage::default(),
            postagens: lista_postagens(),
            temas: lista_temas(),
            form: None,
            form_focus: FormFocus::default(),
            tema_cursor: 0,
            form_generation: 0,
            mounted: None,
            tick: 0,
        }
    }

    /// Tick for animations and notice expiry
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.shell.toasts.expire(Instant::now());
    }

    /// Get current tick
    pub const fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Current route
    pub fn route(&self) -> Route {
        self.shell.route()
    }

    /// Whether something is waiting on the backend
    pub fn is_busy(&self) -> bool {
        self.session.is_loading()
            || self.cadastro.is_loading()
            || self.postagens.is_loading()
            || self.temas.is_loading()
            || self.form.as_ref().is_some_and(FormPostagem::is_loading)
    }

    /// Navigate to `route`
    pub fn navigate(&mut self, route: Route) {
        self.shell.navigate(route);
    }

    /// Navbar "Sair"
    pub fn logout(&mut self) {
        self.session.handle_logout();
        self.shell.alerta("O usuário foi desconectado!", ToastKind::Info);
        self.shell.navigate(Route::Root);
    }

    /// Mount the screen of the current route if it changed since the last
    /// call, following redirects. Returns the requests the screens need.
    pub fn sync_route(&mut self) -> Vec<AsyncCommand> {
        let mut commands = Vec::new();

        // A token cleared while the screen was up sends it back through its guard
        if self.route().requires_login() && !self.session.is_authenticated() {
            self.mounted = None;
        }

        for _ in 0..MAX_REDIRECTS {
            let route = self.route();
            if self.mounted == Some(route) {
                break;
            }
            self.mounted = Some(route);
            commands.extend(self.mount(route));
        }

        commands
    }

    fn mount(&mut self, route: Route) -> Vec<AsyncCommand> {
        tracing::debug!("mount {}", route);

        if !route.is_form() {
            self.form = None;
        }

        match route {
            Route::Root | Route::Login => {
                self.login.mount(&self.session, &mut self.shell);
                Vec::new()
            }
            Route::Cadastro | Route::Home => Vec::new(),
            Route::Postagens => {
                if self.postagens.begin_mount(&self.session, &mut self.shell) {
                    vec![AsyncCommand::ListarPostagens {
                        token: self.session.token().to_string(),
                    }]
                } else {
                    Vec::new()
                }
            }
            Route::Temas => {
                if self.temas.begin_mount(&self.session, &mut self.shell) {
                    vec![AsyncCommand::ListarTemas {
                        token: self.session.token().to_string(),
                    }]
                } else {
                    Vec::new()
                }
            }
            Route::NovaPostagem | Route::EditarPostagem(_) => self.mount_form(route),
        }
    }

    fn mount_form(&mut self, route: Route) -> Vec<AsyncCommand> {
        let Some(form) = FormPostagem::for_route(route) else {
            return Vec::new();
        };

        self.form_generation += 1;
        self.form_focus = FormFocus::default();
        self.tema_cursor = 0;

        let plan = form.begin_mount(&self.session, &mut self.shell);
        self.form = Some(form);
        let Some(plan) = plan else {
            return Vec::new();
        };

        let token = self.session.token().to_string();
        let generation = self.form_generation;
        let mut commands = vec![AsyncCommand::FormTemas {
            generation,
            token: token.clone(),
        }];
        if let Some(id) = plan.postagem_id {
            commands.push(AsyncCommand::FormPostagem {
                generation,
                id,
                token,
            });
        }
        commands
    }

    /// Apply a worker result. Returns follow-up requests.
    pub fn handle_result(&mut self, result: AsyncResult) -> Vec<AsyncCommand> {
        match result {
            AsyncResult::LoggedIn(result) => {
                self.login.finish(result, &mut self.session, &mut self.shell);
            }
            AsyncResult::Registered(result) => {
                self.cadastro.finish(result, &mut self.shell);
            }
            AsyncResult::Postagens(result) => {
                self.postagens
                    .loaded(result, &mut self.session, &mut self.shell);
            }
            AsyncResult::Temas(result) => {
                self.temas.loaded(result, &mut self.session, &mut self.shell);
            }
            AsyncResult::FormTemas { generation, result } => {
                if let Some(form) = current_form(&mut self.form, self.form_generation, generation) {
                    form.temas_loaded(result, &mut self.session, &mut self.shell);
                }
            }
            AsyncResult::FormPostagem { generation, result } => {
                if let Some(form) = current_form(&mut self.form, self.form_generation, generation)
                    && let Some(id) = form.postagem_loaded(result, &mut self.session, &mut self.shell)
                {
                    return vec![AsyncCommand::FormTema {
                        generation,
                        id,
                        token: self.session.token().to_string(),
                    }];
                }
            }
            AsyncResult::FormTema { generation, result } => {
                if let Some(form) = current_form(&mut self.form, self.form_generation, generation) {
                    form.tema_loaded(result, &mut self.session, &mut self.shell);
                }
            }
            AsyncResult::Submitted {
                generation,
                kind,
                result,
            } => {
                // The outcome is reported even if the user already left the form
                let mut scratch = FormPostagem::default();
                let form = match self.form.as_mut() {
                    Some(form) if generation == self.form_generation => form,
                    _ => &mut scratch,
                };
                form.finish_submit(kind, result, &mut self.session, &mut self.shell);
            }
        }
        Vec::new()
    }

}

/// The mounted form, if `generation` still refers to it
fn current_form(
    form: &mut Option<FormPostagem>,
    current: u64,
    generation: u64,
) -> Option<&mut FormPostagem> {
    if generation == current {
        form.as_mut()
    } else {
        tracing::debug!("dropping result for stale form {}", generation);
        None
    }
}
