//! App shell: the router plus the notice queue every screen reports to

use std::time::Duration;

use crate::router::{Route, Router};
use crate::toast::{ToastKind, Toasts};

/// Navigation and notices shared by every screen
#[derive(Debug, Clone, Default)]
pub struct Shell {
    /// Current route
    pub router: Router,
    /// Pending notices
    pub toasts: Toasts,
}

impl Shell {
    /// Start at `route` with notices that live for `toast_ttl`
    pub fn new(route: Route, toast_ttl: Duration) -> Self {
        Self {
            router: Router::new(route),
            toasts: Toasts::new(toast_ttl),
        }
    }

    /// Raise a notice
    pub fn alerta(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(message, kind);
    }

    /// Navigate to `route`
    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
    }

    /// Current route
    pub fn route(&self) -> Route {
        self.router.current()
    }
}
