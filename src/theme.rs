//! Theme configuration and colors.
//!
//! Palettes come from the `ratatui-themes` crate; [`ThemeColors`] derives the
//! styles the screens use from them.

use ratatui::style::{Color, Modifier, Style};
use ratatui_themes::{ThemeName, ThemePalette};
use serde::{Deserialize, Serialize};

use crate::toast::ToastKind;

/// Theme wrapper around `ThemeName` from ratatui-themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(pub ThemeName);

impl Theme {
    /// Get all available theme names.
    #[must_use]
    pub const fn all() -> &'static [ThemeName] {
        ThemeName::all()
    }

    /// Get the display name for the theme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0.display_name()
    }

    /// Get the color palette for this theme
    #[must_use]
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_palette(self.0.palette())
    }

    /// Get the inner `ThemeName`
    #[must_use]
    pub const fn inner(&self) -> ThemeName {
        self.0
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Colors for the navbar, screens, footer and notices.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Primary background color
    pub bg: Color,
    /// Background of the navbar, footer and popups
    pub bg_secondary: Color,
    /// Primary foreground/text color
    pub fg: Color,
    /// Muted text color
    pub fg_muted: Color,
    /// Primary accent color
    pub primary: Color,
    /// Secondary accent color
    pub secondary: Color,
    /// Success state color
    pub success: Color,
    /// Error state color
    pub error: Color,
    /// Info state color
    pub info: Color,
    /// Border color (unfocused)
    pub border: Color,
    /// Border color (focused)
    pub border_focus: Color,
    /// Selection/highlight background
    pub selection: Color,
}

impl ThemeColors {
    /// Create `ThemeColors` from a `ThemePalette`
    #[must_use]
    pub fn from_palette(p: ThemePalette) -> Self {
        Self {
            bg: p.bg,
            bg_secondary: Self::lighten(p.bg, 10),
            fg: p.fg,
            fg_muted: p.muted,
            primary: p.accent,
            secondary: p.secondary,
            success: p.success,
            error: p.error,
            info: p.info,
            border: p.muted,
            border_focus: p.accent,
            selection: p.selection,
        }
    }

    fn lighten(color: Color, amount: u8) -> Color {
        if let Color::Rgb(r, g, b) = color {
            Color::Rgb(
                r.saturating_add(amount),
                g.saturating_add(amount),
                b.saturating_add(amount),
            )
        } else {
            color
        }
    }

    /// Default text style
    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Muted text style
    #[must_use]
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Primary accent style
    #[must_use]
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Secondary accent style
    #[must_use]
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Block border style
    #[must_use]
    pub fn block(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Focused block border style
    #[must_use]
    pub fn block_focus(&self) -> Style {
        Style::default().fg(self.border_focus)
    }

    /// Selected item style
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Navbar link style
    #[must_use]
    pub fn tab(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Active navbar link style
    #[must_use]
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for shortcuts)
    #[must_use]
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Brand style used for the navbar title and footer headline
    #[must_use]
    pub fn brand(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Notice style by severity
    #[must_use]
    pub fn toast(&self, kind: ToastKind) -> Style {
        let fg = match kind {
            ToastKind::Info => self.info,
            ToastKind::Sucesso => self.success,
            ToastKind::Erro => self.error,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Submit control style; dimmed while disabled
    #[must_use]
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .bg(self.primary)
                .fg(self.bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.bg_secondary).fg(self.fg_muted)
        }
    }
}
