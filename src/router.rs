//! Client-side routes
//!
//! Screens are addressed by the same paths the web client used, so a path
//! given as the first argument (`blog-pessoal /postagens`) opens that screen.

use std::collections::HashMap;

/// A client route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: login screen
    Root,
    /// `/login`: login screen
    Login,
    /// `/cadastro`: registration screen
    Cadastro,
    /// `/home`: landing screen after login
    Home,
    /// `/postagens`: post listing
    Postagens,
    /// `/temas`: theme listing
    Temas,
    /// `/cadastrarpostagem`: post form in create mode
    NovaPostagem,
    /// `/editarpostagem/{id}`: post form in edit mode
    EditarPostagem(i64),
}

impl Route {
    /// Parse a path into a route
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Self::Root),
            "/login" => Some(Self::Login),
            "/cadastro" => Some(Self::Cadastro),
            "/home" => Some(Self::Home),
            "/postagens" => Some(Self::Postagens),
            "/temas" => Some(Self::Temas),
            "/cadastrarpostagem" => Some(Self::NovaPostagem),
            other => other
                .strip_prefix("/editarpostagem/")
                .and_then(|id| id.parse().ok())
                .map(Self::EditarPostagem),
        }
    }

    /// The path for this route
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Cadastro => "/cadastro".to_string(),
            Self::Home => "/home".to_string(),
            Self::Postagens => "/postagens".to_string(),
            Self::Temas => "/temas".to_string(),
            Self::NovaPostagem => "/cadastrarpostagem".to_string(),
            Self::EditarPostagem(id) => format!("/editarpostagem/{id}"),
        }
    }

    /// Whether this route shows the login screen
    pub const fn is_login(&self) -> bool {
        matches!(self, Self::Root | Self::Login)
    }

    /// Whether the route hosts the post form
    pub const fn is_form(&self) -> bool {
        matches!(self, Self::NovaPostagem | Self::EditarPostagem(_))
    }

    /// Whether the screen is only shown to a logged-in user
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::Postagens | Self::Temas) || self.is_form()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Current route plus a count of arrivals per route
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    visits: HashMap<Route, usize>,
}

impl Router {
    /// Start at `route`
    pub fn new(route: Route) -> Self {
        Self {
            current: route,
            visits: HashMap::from([(route, 1)]),
        }
    }

    /// Current route
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Go to `route`
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("navigate {} -> {}", self.current, route);
        self.current = route;
        *self.visits.entry(route).or_default() += 1;
    }

    /// How many times `route` was navigated to (the starting route counts)
    pub fn visits(&self, route: Route) -> usize {
        self.visits.get(&route).copied().unwrap_or(0)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Root));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/home/"), Some(Route::Home));
        assert_eq!(Route::parse("/cadastro"), Some(Route::Cadastro));
        assert_eq!(
            Route::parse("/editarpostagem/5"),
            Some(Route::EditarPostagem(5))
        );
        assert_eq!(Route::parse("/editarpostagem/abc"), None);
        assert_eq!(Route::parse("/perfil"), None);
    }

    #[test]
    fn test_path_parses_back() {
        for route in [
            Route::Root,
            Route::Login,
            Route::Postagens,
            Route::NovaPostagem,
            Route::EditarPostagem(12),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_navigate_counts_visits() {
        let mut router = Router::new(Route::Home);
        router.navigate(Route::Postagens);
        router.navigate(Route::NovaPostagem);
        router.navigate(Route::Postagens);
        assert_eq!(router.current(), Route::Postagens);
        assert_eq!(router.visits(Route::Home), 1);
        assert_eq!(router.visits(Route::Postagens), 2);
        assert_eq!(router.visits(Route::Temas), 0);
    }

    #[test]
    fn test_repeated_hops_keep_one_entry_per_route() {
        let mut router = Router::new(Route::Root);
        for _ in 0..1000 {
            router.navigate(Route::Home);
            router.navigate(Route::Root);
        }
        assert_eq!(router.visits.len(), 2);
        assert_eq!(router.visits(Route::Root), 1001);
    }
}
