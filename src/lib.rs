//! # Blog Pessoal ✎
//!
//! A terminal client for the Blog Pessoal REST API.
//!
//! ## Overview
//!
//! Register, log in, browse posts and themes, and write or edit posts tied to
//! a theme, all from your terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                │
//! │  Event loop, async worker, navbar / screens / footer        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Shell       │ │      Form       │ │     Pages       │
//! │                 │ │                 │ │                 │
//! │ • Router        │ │ • Field reducer │ │ • Login         │
//! │ • Toasts        │ │ • Mount / load  │ │ • Cadastro      │
//! │                 │ │ • Submit        │ │ • Listings      │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │    Session      │ │       API       │ │     Models      │
//! │                 │ │                 │ │                 │
//! │ • Logged user   │ │ • Service       │ │ • Postagem      │
//! │ • Login/logout  │ │ • BlogApi trait │ │ • Tema          │
//! │ • 403 handling  │ │ • BlogClient    │ │ • Usuario       │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: REST helpers and the backend client
//! - [`app`]: TUI application state and event loop
//! - [`chrome`]: Navbar entries and footer content
//! - [`config`]: Configuration management
//! - [`error`]: Backend error type
//! - [`form`]: The create/edit post form
//! - [`models`]: Data models (Postagem, Tema, Usuario)
//! - [`pages`]: Login, registration and listing screens
//! - [`router`]: Routes and the current screen
//! - [`session`]: The logged-in user
//! - [`shell`]: Router plus notices shared by every screen
//! - [`theme`]: Theme support via ratatui-themes
//! - [`toast`]: Transient notices
//!
//! ## Example
//!
//! ```no_run
//! use blog_pessoal::{Route, app};
//!
//! fn main() -> anyhow::Result<()> {
//!     app::run(Route::Root)
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/blog-pessoal/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::use_self)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::similar_names)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod app;
pub mod chrome;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod pages;
pub mod paths;
pub mod router;
pub mod session;
pub mod shell;
pub mod theme;
pub mod toast;

// Re-export main types for convenience
pub use api::{BlogApi, BlogClient};
pub use app::AppState;
pub use config::Config;
pub use error::ApiError;
pub use form::{Field, FieldUpdate, FormPostagem, SubmitKind};
pub use models::{Postagem, Tema, Usuario, UsuarioLogin};
pub use router::{Route, Router};
pub use session::Session;
pub use shell::Shell;
pub use theme::{Theme, ThemeColors};
pub use toast::{Toast, ToastKind, Toasts};

// Re-export theme types from ratatui-themes crate
pub use ratatui_themes::{ThemeName, ThemePalette};

/// ASCII logo for the application
pub const LOGO: &str = r"
    ____  __               ____                               __
   / __ )/ /___  ____ _   / __ \___  ______________  ____ _/ /
  / __  / / __ \/ __ `/  / /_/ / _ \/ ___/ ___/ __ \/ __ `/ /
 / /_/ / / /_/ / /_/ /  / ____/  __(__  |__  ) /_/ / /_/ / /
/_____/_/\____/\__, /  /_/    \___/____/____/\____/\__,_/_/
              /____/
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
