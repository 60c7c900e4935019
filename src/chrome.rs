//! Navbar and footer content

use chrono::{Datelike, Local};

use crate::router::Route;

/// A navbar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Caption
    pub label: &'static str,
    /// Key that activates it outside text inputs
    pub key: char,
    /// Where it leads; `None` means "log out"
    pub route: Option<Route>,
}

const NAV_LOGGED_IN: &[NavItem] = &[
    NavItem {
        label: "Home",
        key: '1',
        route: Some(Route::Home),
    },
    NavItem {
        label: "Postagens",
        key: '2',
        route: Some(Route::Postagens),
    },
    NavItem {
        label: "Temas",
        key: '3',
        route: Some(Route::Temas),
    },
    NavItem {
        label: "Cadastrar postagem",
        key: '4',
        route: Some(Route::NovaPostagem),
    },
    NavItem {
        label: "Sair",
        key: 'x',
        route: None,
    },
];

const NAV_ANONYMOUS: &[NavItem] = &[
    NavItem {
        label: "Login",
        key: '1',
        route: Some(Route::Login),
    },
    NavItem {
        label: "Cadastro",
        key: '2',
        route: Some(Route::Cadastro),
    },
];

/// Navbar entries for the current session
pub const fn nav_items(logged_in: bool) -> &'static [NavItem] {
    if logged_in { NAV_LOGGED_IN } else { NAV_ANONYMOUS }
}

/// Index of the navbar entry matching `route`, if any
pub fn active_nav(route: Route, logged_in: bool) -> Option<usize> {
    nav_items(logged_in).iter().position(|item| match item.route {
        Some(r) if r.is_login() => route.is_login(),
        Some(Route::NovaPostagem) => route.is_form(),
        Some(r) => r == route,
        None => false,
    })
}

/// An author social link shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Network name
    pub name: &'static str,
    /// Profile URL
    pub url: &'static str,
    /// Key that opens it in the browser
    pub key: char,
}

/// The author's social links
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/lucas-daniel-souza-dias/",
        key: 'L',
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/Lucas300",
        key: 'G',
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/lucas.kardashiann/",
        key: 'I',
    },
];

/// Footer link bound to `key`
pub fn social_link(key: char) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|l| l.key == key)
}

/// Footer headline for `year`
pub fn copyright(year: i32) -> String {
    format!("Blog Pessoal Generation | Copyright: {year}")
}

/// Footer headline for the current year
pub fn copyright_now() -> String {
    copyright(Local::now().year())
}
