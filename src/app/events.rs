//! Event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::async_ops::AsyncCommand;
use super::state::{AppState, FormFocus, Mode};
use crate::chrome::{nav_items, social_link};
use crate::form::Field;
use crate::pages::CadastroField;
use crate::router::Route;
use crate::theme::Theme;
use crate::toast::ToastKind;

/// Handle key events, returning an optional async command
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    // Handle mode-specific input first
    match state.mode {
        Mode::ThemePicker => {
            handle_theme_picker_key(state, key);
            return None;
        }
        Mode::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::F(1)
            ) {
                state.mode = Mode::Normal;
            }
            return None;
        }
        Mode::Normal => {}
    }

    // Shortcuts that work on every screen, text inputs included
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            state.should_quit = true;
            return None;
        }
        (_, KeyCode::F(1)) => {
            state.mode = Mode::Help;
            return None;
        }
        (_, KeyCode::F(2)) => {
            open_theme_picker(state);
            return None;
        }
        (KeyModifiers::ALT, KeyCode::Char(c)) => {
            activate_nav(state, c);
            return None;
        }
        _ => {}
    }

    match state.route() {
        Route::Root | Route::Login => handle_login_key(state, key),
        Route::Cadastro => handle_cadastro_key(state, key),
        Route::NovaPostagem | Route::EditarPostagem(_) => handle_form_key(state, key),
        Route::Home | Route::Postagens | Route::Temas => handle_browse_key(state, key),
    }
}

fn open_theme_picker(state: &mut AppState) {
    state.theme_picker_index = Theme::all()
        .iter()
        .position(|t| *t == state.theme.inner())
        .unwrap_or(0);
    state.mode = Mode::ThemePicker;
}

/// Follow the navbar entry bound to `key`. Returns whether one matched.
fn activate_nav(state: &mut AppState, key: char) -> bool {
    let Some(item) = nav_items(state.session.is_authenticated())
        .iter()
        .find(|item| item.key == key)
    else {
        return false;
    };

    match item.route {
        Some(route) => state.navigate(route),
        None => state.logout(),
    }
    true
}

fn open_social_link(state: &mut AppState, key: char) -> bool {
    let Some(link) = social_link(key) else {
        return false;
    };
    if let Err(e) = open::that(link.url) {
        tracing::warn!("failed to open {}: {}", link.url, e);
        state
            .shell
            .alerta(format!("Não foi possível abrir o {}", link.name), ToastKind::Erro);
    }
    true
}

/// Home and the listings: no text inputs, so plain keys are shortcuts
fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return None;
        }
        KeyCode::Char('?') => {
            state.mode = Mode::Help;
            return None;
        }
        KeyCode::Char('t') => {
            open_theme_picker(state);
            return None;
        }
        KeyCode::Esc => {
            state.shell.toasts.dismiss();
            return None;
        }
        KeyCode::Char(c) if activate_nav(state, c) || open_social_link(state, c) => return None,
        _ => {}
    }

    match state.route() {
        Route::Postagens => handle_postagens_key(state, key),
        Route::Temas => handle_temas_key(state, key),
        _ => None,
    }
}

fn handle_postagens_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.postagens.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.postagens.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => state.postagens.select_first(),
        KeyCode::End => state.postagens.select_last(),
        KeyCode::Char('n') => state.navigate(Route::NovaPostagem),
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = state.postagens.selected().and_then(|p| p.id) {
                state.navigate(Route::EditarPostagem(id));
            }
        }
        KeyCode::Char('r') if !state.postagens.is_loading() => {
            if state.postagens.begin_mount(&state.session, &mut state.shell) {
                return Some(AsyncCommand::ListarPostagens {
                    token: state.session.token().to_string(),
                });
            }
        }
        _ => {}
    }
    None
}

fn handle_temas_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.temas.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.temas.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => state.temas.select_first(),
        KeyCode::End => state.temas.select_last(),
        KeyCode::Char('r') if !state.temas.is_loading() => {
            if state.temas.begin_mount(&state.session, &mut state.shell) {
                return Some(AsyncCommand::ListarTemas {
                    token: state.session.token().to_string(),
                });
            }
        }
        _ => {}
    }
    None
}

fn handle_login_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => state.navigate(Route::Cadastro),
        (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down) => {
            state.login.toggle_focus();
        }
        (_, KeyCode::Enter) => {
            return state
                .login
                .begin(&mut state.session)
                .map(|credenciais| AsyncCommand::Login { credenciais });
        }
        (_, KeyCode::Backspace) => state.login.backspace(),
        (_, KeyCode::Esc) => state.shell.toasts.dismiss(),
        (_, KeyCode::Char(c)) => state.login.input(c),
        _ => {}
    }
    None
}

fn handle_cadastro_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    let page = &mut state.cadastro;
    match key.code {
        KeyCode::Esc => state.navigate(Route::Login),
        KeyCode::Tab | KeyCode::Down => page.focus = page.focus.next(),
        KeyCode::BackTab | KeyCode::Up => {
            // cycle backwards through the fixed field order
            let all = CadastroField::all();
            let idx = all.iter().position(|f| *f == page.focus).unwrap_or(0);
            page.focus = all[(idx + all.len() - 1) % all.len()];
        }
        KeyCode::Enter => {
            return page
                .begin(&mut state.shell)
                .map(|usuario| AsyncCommand::CadastrarUsuario { usuario });
        }
        KeyCode::Backspace => page.backspace(),
        KeyCode::Char(c) => page.input(c),
        _ => {}
    }
    None
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            state.navigate(Route::Postagens);
            return None;
        }
        (_, KeyCode::Tab) => {
            state.form_focus = state.form_focus.next();
            return None;
        }
        (_, KeyCode::BackTab) => {
            state.form_focus = state.form_focus.prev();
            return None;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => return submit(state),
        _ => {}
    }

    match state.form_focus {
        FormFocus::Field(field) => {
            edit_field(state, field, key);
            None
        }
        FormFocus::Tema => handle_tema_selector_key(state, key),
        FormFocus::Enviar => {
            if key.code == KeyCode::Enter {
                submit(state)
            } else {
                None
            }
        }
    }
}

fn edit_field(state: &mut AppState, field: Field, key: KeyEvent) {
    let Some(form) = state.form.as_mut() else {
        return;
    };

    let mut value = field.value(form.postagem()).to_string();
    match key.code {
        KeyCode::Char(c) => value.push(c),
        KeyCode::Backspace => {
            value.pop();
        }
        KeyCode::Enter if field.multiline() => value.push('\n'),
        KeyCode::Enter => {
            state.form_focus = state.form_focus.next();
            return;
        }
        _ => return,
    }
    form.apply(field.update(value), &state.session);
}

fn handle_tema_selector_key(state: &mut AppState, key: KeyEvent) -> Option<AsyncCommand> {
    let form = state.form.as_ref()?;
    let len = form.temas().len();
    if len == 0 {
        return None;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            state.tema_cursor = (state.tema_cursor + 1) % len;
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.tema_cursor = state.tema_cursor.checked_sub(1).unwrap_or(len - 1);
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let id = form.temas().get(state.tema_cursor)?.id;
            Some(AsyncCommand::FormTema {
                generation: state.form_generation,
                id,
                token: state.session.token().to_string(),
            })
        }
        _ => None,
    }
}

fn submit(state: &mut AppState) -> Option<AsyncCommand> {
    let submission = state.form.as_mut()?.begin_submit(&mut state.shell)?;
    Some(AsyncCommand::Submit {
        generation: state.form_generation,
        submission,
        token: state.session.token().to_string(),
    })
}

fn handle_theme_picker_key(state: &mut AppState, key: KeyEvent) {
    let themes = Theme::all();
    let len = themes.len();

    match key.code {
        KeyCode::Esc => {
            state.theme = state.config.theme;
            state.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            // Apply selected theme
            let selected_theme = Theme::from(themes[state.theme_picker_index]);
            state.theme = selected_theme;
            state.config.theme = selected_theme;
            state.mode = Mode::Normal;
            state.shell.alerta(
                format!("Tema visual: {}", selected_theme.name()),
                ToastKind::Info,
            );
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.theme_picker_index = (state.theme_picker_index + 1) % len;
            // Preview theme
            state.theme = Theme::from(themes[state.theme_picker_index]);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.theme_picker_index = state.theme_picker_index.checked_sub(1).unwrap_or(len - 1);
            state.theme = Theme::from(themes[state.theme_picker_index]);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.theme_picker_index = 0;
            state.theme = Theme::from(themes[state.theme_picker_index]);
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.theme_picker_index = len - 1;
            state.theme = Theme::from(themes[state.theme_picker_index]);
        }
        _ => {}
    }
}
