//! Listing screens (posts, themes)

use crate::error::ApiError;
use crate::router::Route;
use crate::session::Session;
use crate::shell::Shell;
use crate::toast::ToastKind;

/// A list fetched from the backend with a cursor
#[derive(Debug, Clone)]
pub struct Lista<T> {
    items: Vec<T>,
    selected: usize,
    loading: bool,
    error_message: &'static str,
}

impl<T> Lista<T> {
    /// Empty list; `error_message` is shown when the fetch fails
    pub const fn new(error_message: &'static str) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            loading: false,
            error_message,
        }
    }

    /// Guard the listing behind a session. Returns whether the fetch should
    /// be issued.
    pub fn begin_mount(&mut self, session: &Session, shell: &mut Shell) -> bool {
        if !session.is_authenticated() {
            shell.alerta("Você precisa estar logado", ToastKind::Info);
            shell.navigate(Route::Root);
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply the fetched items
    pub fn loaded(
        &mut self,
        result: Result<Vec<T>, ApiError>,
        session: &mut Session,
        shell: &mut Shell,
    ) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.selected = self.selected.min(self.items.len().saturating_sub(1));
            }
            Err(e) => session.handle_error(&e, self.error_message, shell),
        }
    }

    /// Items in backend order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether the fetch is in flight
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Index of the highlighted item
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted item
    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    /// Move the cursor down
    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    /// Move the cursor up
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the first item
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last item
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UsuarioLogin;

    fn session() -> Session {
        Session::with_usuario(UsuarioLogin {
            token: "Bearer t".to_string(),
            ..UsuarioLogin::default()
        })
    }

    #[test]
    fn test_mount_requires_token() {
        let mut lista: Lista<u8> = Lista::new("Erro");
        let mut shell = Shell::new(Route::Postagens, std::time::Duration::from_secs(5));
        assert!(!lista.begin_mount(&Session::new(), &mut shell));
        assert_eq!(shell.route(), Route::Root);
        assert!(lista.begin_mount(&session(), &mut shell));
        assert!(lista.is_loading());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut session = session();
        let mut shell = Shell::default();
        let mut lista = Lista::new("Erro");
        lista.loaded(Ok(vec![1, 2, 3]), &mut session, &mut shell);

        lista.select_last();
        lista.select_next();
        assert_eq!(lista.selected(), Some(&3));

        lista.loaded(Ok(vec![7]), &mut session, &mut shell);
        assert_eq!(lista.selected(), Some(&7));

        lista.select_prev();
        lista.select_first();
        assert_eq!(lista.selected_index(), 0);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut session = session();
        let mut shell = Shell::default();
        let mut lista = Lista::new("Erro ao buscar as postagens");
        lista.loaded(Ok(vec![1]), &mut session, &mut shell);
        lista.loaded(Err(ApiError::status("/postagens", 500)), &mut session, &mut shell);

        assert_eq!(lista.items(), &[1]);
        assert!(shell.toasts.contains("Erro ao buscar as postagens"));
    }
}
