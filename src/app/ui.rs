//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};

use super::state::{AppState, FormFocus, Mode};
use crate::chrome::{SOCIAL_LINKS, active_nav, copyright_now, nav_items};
use crate::form::{Field, FormPostagem};
use crate::pages::{CadastroField, LoginField};
use crate::router::Route;
use crate::theme::{Theme, ThemeColors};

/// Blog Pessoal icon
const ICON: &str = "✎";

/// Spinner animation frames
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main render function
pub fn render(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();

    // Set background
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_navbar(frame, state, chunks[0]);
    render_main(frame, state, chunks[1]);
    render_footer(frame, state, chunks[2]);
    render_status_bar(frame, state, chunks[3]);

    // Render modal dialogs
    match state.mode {
        Mode::Help => render_help_popup(frame, state),
        Mode::ThemePicker => render_theme_picker(frame, state),
        Mode::Normal => {}
    }
}

fn render_navbar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let logged_in = state.session.is_authenticated();

    let titles: Vec<Line> = nav_items(logged_in)
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(format!("{} ", item.key), colors.key_hint()),
                Span::raw(item.label),
            ])
        })
        .collect();

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(colors.block())
                .title(format!(" {ICON} Blog Pessoal "))
                .title_style(colors.brand()),
        )
        .style(colors.tab())
        .highlight_style(colors.tab_active())
        .divider(Span::styled(" │ ", colors.text_muted()));

    if let Some(selected) = active_nav(state.route(), logged_in) {
        tabs = tabs.select(selected);
    }

    frame.render_widget(tabs, area);
}

fn render_main(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.route() {
        Route::Root | Route::Login => render_login(frame, state, area),
        Route::Cadastro => render_cadastro(frame, state, area),
        Route::Home => render_home(frame, state, area),
        Route::Postagens => render_postagens(frame, state, area),
        Route::Temas => render_temas(frame, state, area),
        Route::NovaPostagem | Route::EditarPostagem(_) => match state.form.as_ref() {
            Some(form) => render_form(frame, state, form, area),
            None => render_loading(frame, state, area),
        },
    }
}

fn titled_block<'a>(colors: &ThemeColors, title: String, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            colors.block_focus()
        } else {
            colors.block()
        })
        .title(title)
        .title_style(colors.text_primary())
}

/// One labelled single-line input
fn input_line<'a>(
    colors: &ThemeColors,
    label: &'a str,
    value: &str,
    secret: bool,
    focused: bool,
) -> Line<'a> {
    let shown = if secret {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▏" } else { "" };
    let label_style = if focused {
        colors.text_primary().add_modifier(Modifier::BOLD)
    } else {
        colors.text_muted()
    };

    Line::from(vec![
        Span::styled(format!("  {label:<22}"), label_style),
        Span::styled(format!("{shown}{cursor}"), colors.text()),
    ])
}

fn button_line<'a>(colors: &ThemeColors, label: &str, enabled: bool, focused: bool) -> Line<'a> {
    let marker = if focused { "▸" } else { " " };
    Line::from(vec![
        Span::styled(format!("  {marker} "), colors.text_primary()),
        Span::styled(format!(" {label} "), colors.button(enabled)),
    ])
}

fn hint_line<'a>(colors: &ThemeColors, hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::raw("  ")];
    for (key, what) in hints {
        spans.push(Span::styled(*key, colors.key_hint()));
        spans.push(Span::styled(format!(" {what}  "), colors.text_muted()));
    }
    Line::from(spans)
}

fn render_login(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let page = &state.login;
    let popup_area = centered_rect(60, 60, area);

    let content = vec![
        Line::from(""),
        input_line(
            &colors,
            "Usuário",
            &page.usuario,
            false,
            page.focus == LoginField::Usuario,
        ),
        Line::from(""),
        input_line(
            &colors,
            "Senha",
            &page.senha,
            true,
            page.focus == LoginField::Senha,
        ),
        Line::from(""),
        button_line(&colors, "Entrar", !state.session.is_loading(), false),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Ainda não tem uma conta? ", colors.text_muted()),
            Span::styled("Ctrl+N", colors.key_hint()),
            Span::styled(" Cadastre-se", colors.text_secondary()),
        ]),
        Line::from(""),
        hint_line(&colors, &[("Tab", "trocar campo"), ("Enter", "entrar")]),
    ];

    let login = Paragraph::new(content).block(titled_block(&colors, " Entrar ".to_string(), true));
    frame.render_widget(login, popup_area);
}

fn render_cadastro(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let page = &state.cadastro;
    let popup_area = centered_rect(70, 80, area);

    let mut content = vec![Line::from("")];
    for field in CadastroField::all() {
        content.push(input_line(
            &colors,
            field.label(),
            page.value(*field),
            field.secret(),
            page.focus == *field,
        ));
        content.push(Line::from(""));
    }
    content.push(button_line(&colors, "Cadastrar", !page.is_loading(), false));
    content.push(Line::from(""));
    content.push(hint_line(
        &colors,
        &[("Tab", "próximo campo"), ("Enter", "cadastrar"), ("Esc", "cancelar")],
    ));

    let cadastro =
        Paragraph::new(content).block(titled_block(&colors, " Cadastrar ".to_string(), true));
    frame.render_widget(cadastro, popup_area);
}

fn render_home(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let nome = &state.session.usuario().nome;

    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::styled(
            format!("Seja Bem Vindo, {nome}!"),
            colors.brand(),
        )
        .alignment(Alignment::Center),
        Line::from(""),
        Line::styled(
            "Expresse aqui os seus pensamentos e opniões",
            colors.text(),
        )
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("2", colors.key_hint()),
            Span::styled(" ver postagens   ", colors.text_muted()),
            Span::styled("4", colors.key_hint()),
            Span::styled(" nova postagem", colors.text_muted()),
        ])
        .alignment(Alignment::Center),
    ];

    let home = Paragraph::new(content).block(titled_block(&colors, " Home ".to_string(), false));
    frame.render_widget(home, area);
}

fn render_loading(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let frame_idx = (state.current_tick() / 2) as usize % SPINNER.len();
    let loading = Paragraph::new(Line::styled(
        format!("{} Carregando...", SPINNER[frame_idx]),
        colors.text_secondary(),
    ))
    .alignment(Alignment::Center)
    .block(titled_block(&colors, String::new(), false));
    frame.render_widget(loading, area);
}

fn render_empty(frame: &mut Frame, colors: &ThemeColors, title: String, message: &str, area: Rect) {
    let empty = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::styled(format!("  {message}"), colors.text_muted()),
    ])
    .block(titled_block(colors, title, true));
    frame.render_widget(empty, area);
}

fn render_postagens(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let lista = &state.postagens;

    if lista.items().is_empty() {
        if lista.is_loading() {
            render_loading(frame, state, area);
        } else {
            render_empty(
                frame,
                &colors,
                " Postagens ".to_string(),
                "Nenhuma postagem ainda. Pressione n para escrever a primeira.",
                area,
            );
        }
        return;
    }

    // Calculate width for full-line selection
    let content_width = area.width.saturating_sub(2) as usize;
    let wrap_width = content_width.saturating_sub(6).max(10);

    let items: Vec<ListItem> = lista
        .items()
        .iter()
        .enumerate()
        .map(|(i, postagem)| {
            let is_selected = i == lista.selected_index();
            let cursor = if is_selected { "▸" } else { " " };

            let bg_style = if is_selected {
                colors.selected()
            } else {
                Style::default()
            };
            let title_style = colors.text_primary().add_modifier(Modifier::BOLD);
            let muted_style = colors.text_muted();

            let header = format!(" {cursor} {}", postagem.titulo);
            let mut lines = vec![Line::from(Span::styled(
                format!("{header:content_width$}"),
                title_style.patch(bg_style),
            ))];

            for wrapped in textwrap::wrap(&postagem.texto, wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("     {wrapped}"),
                    colors.text(),
                )));
            }

            let mut meta = vec![Span::styled("     ", muted_style)];
            if !postagem.tema_descricao().is_empty() {
                meta.push(Span::styled(
                    format!("#{} ", postagem.tema_descricao()),
                    colors.text_secondary(),
                ));
            }
            if !postagem.autor().is_empty() {
                meta.push(Span::styled(format!("por {} ", postagem.autor()), muted_style));
            }
            let data = postagem.data_formatada();
            if !data.is_empty() {
                meta.push(Span::styled(format!("· {data}"), muted_style));
            }
            lines.push(Line::from(meta));

            for link in [&postagem.imagem, &postagem.github, &postagem.linkedin]
                .into_iter()
                .flatten()
            {
                lines.push(Line::from(Span::styled(
                    format!("     ↗ {link}"),
                    colors.text_muted().add_modifier(Modifier::UNDERLINED),
                )));
            }
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let list = List::new(items).block(titled_block(
        &colors,
        format!(" Postagens ({}) ", lista.items().len()),
        true,
    ));

    // Keep the selection in view
    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(lista.selected_index()));
    frame.render_stateful_widget(list, layout[0], &mut list_state);

    let action_bar = Paragraph::new(hint_line(
        &colors,
        &[
            ("j/k", "navegar"),
            ("Enter", "editar"),
            ("n", "nova"),
            ("r", "atualizar"),
        ],
    ))
    .style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(action_bar, layout[1]);
}

fn render_temas(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let lista = &state.temas;

    if lista.items().is_empty() {
        if lista.is_loading() {
            render_loading(frame, state, area);
        } else {
            render_empty(
                frame,
                &colors,
                " Temas ".to_string(),
                "Nenhum tema cadastrado.",
                area,
            );
        }
        return;
    }

    let items: Vec<ListItem> = lista
        .items()
        .iter()
        .enumerate()
        .map(|(i, tema)| {
            let is_selected = i == lista.selected_index();
            let style = if is_selected {
                colors.selected()
            } else {
                colors.text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(if is_selected { " ▸ " } else { "   " }, style),
                Span::styled(format!("{:>4}  ", tema.id), colors.text_muted()),
                Span::styled(tema.descricao.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(titled_block(
        &colors,
        format!(" Temas ({}) ", lista.items().len()),
        true,
    ));
    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(lista.selected_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_form(frame: &mut Frame, state: &AppState, form: &FormPostagem, area: Rect) {
    let colors = state.theme.colors();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    // Fields
    let mut content = vec![Line::from("")];
    for field in Field::all() {
        let focused = state.form_focus == FormFocus::Field(*field);
        let value = field.value(form.postagem());
        let label = if field.required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let label_style = if focused {
            colors.text_primary().add_modifier(Modifier::BOLD)
        } else {
            colors.text_muted()
        };
        content.push(Line::styled(format!("  {label}"), label_style));

        if value.is_empty() && !focused {
            content.push(Line::styled(
                format!("    {}", field.placeholder()),
                colors.text_muted().add_modifier(Modifier::ITALIC),
            ));
        } else {
            let cursor = if focused { "▏" } else { "" };
            let mut lines: Vec<&str> = value.split('\n').collect();
            let last = lines.pop().unwrap_or_default();
            for line in lines {
                content.push(Line::styled(format!("    {line}"), colors.text()));
            }
            content.push(Line::styled(format!("    {last}{cursor}"), colors.text()));
        }
        content.push(Line::from(""));
    }

    let tema_label = if form.tema().is_loaded() {
        form.tema().descricao.clone()
    } else {
        "nenhum".to_string()
    };
    content.push(Line::from(vec![
        Span::styled("  Tema: ", colors.text_muted()),
        Span::styled(tema_label, colors.text_secondary()),
    ]));
    content.push(Line::from(""));

    let rotulo = if form.is_loading() {
        format!("{}...", form.rotulo_botao())
    } else {
        form.rotulo_botao().to_string()
    };
    content.push(button_line(
        &colors,
        &rotulo,
        !form.submit_disabled() && !form.is_loading(),
        state.form_focus == FormFocus::Enviar,
    ));

    let fields = Paragraph::new(content)
        .block(titled_block(&colors, format!(" {} ", form.titulo()), true))
        .wrap(Wrap { trim: false });
    frame.render_widget(fields, chunks[0]);

    // Theme selector
    let selector_focused = state.form_focus == FormFocus::Tema;
    let items: Vec<ListItem> = if form.temas().is_empty() {
        vec![ListItem::new(Line::styled(
            "  Carregando temas...",
            colors.text_muted(),
        ))]
    } else {
        form.temas()
            .iter()
            .enumerate()
            .map(|(i, tema)| {
                let chosen = tema.id == form.tema().id && form.tema().is_loaded();
                let under_cursor = selector_focused && i == state.tema_cursor;
                let style = if under_cursor {
                    colors.selected()
                } else if chosen {
                    colors.text_primary()
                } else {
                    colors.text()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(if chosen { " ● " } else { " ○ " }, style),
                    Span::styled(tema.descricao.clone(), style),
                ]))
            })
            .collect()
    };

    let selector = List::new(items).block(
        titled_block(&colors, " Tema ".to_string(), selector_focused)
            .title_bottom(Line::from(" ↑↓ escolher │ ↵ selecionar ").centered()),
    );
    frame.render_widget(selector, chunks[1]);
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let mut links = vec![Span::styled("  ", colors.text_muted())];
    for link in SOCIAL_LINKS {
        links.push(Span::styled(link.key.to_string(), colors.key_hint()));
        links.push(Span::styled(format!(" {}   ", link.name), colors.text_secondary()));
    }

    let footer = Paragraph::new(vec![
        Line::styled(copyright_now(), colors.brand()).alignment(Alignment::Center),
        Line::from(links).alignment(Alignment::Center),
    ])
    .style(Style::default().bg(colors.bg_secondary))
    .block(Block::default().borders(Borders::TOP).border_style(colors.block()));

    frame.render_widget(footer, area);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let loading_indicator = if state.is_busy() {
        let frame_idx = (state.current_tick() / 2) as usize % SPINNER.len();
        format!("{} ", SPINNER[frame_idx])
    } else {
        String::new()
    };

    let content = if let Some(toast) = state.shell.toasts.current() {
        let style = colors.toast(toast.kind);
        vec![
            Span::styled(" ", Style::default()),
            Span::styled(loading_indicator, colors.text_secondary()),
            Span::styled(format!("{} ", toast.kind.icon()), style),
            Span::styled(toast.message.clone(), style),
        ]
    } else {
        vec![
            Span::styled(" ", Style::default()),
            Span::styled(loading_indicator, colors.text_secondary()),
            Span::styled("F1", colors.key_hint()),
            Span::styled(": ajuda  ", colors.text_muted()),
            Span::styled("F2", colors.key_hint()),
            Span::styled(": tema visual  ", colors.text_muted()),
            Span::styled("Alt+n", colors.key_hint()),
            Span::styled(": menu  ", colors.text_muted()),
            Span::styled("Ctrl+C", colors.key_hint()),
            Span::styled(": sair", colors.text_muted()),
        ]
    };

    let status =
        Paragraph::new(Line::from(content)).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(status, area);
}

fn help_section<'a>(colors: &ThemeColors, title: &'a str) -> Line<'a> {
    Line::from(vec![Span::styled(
        format!("  {title}"),
        colors.text_primary().add_modifier(Modifier::BOLD),
    )])
}

fn help_entry<'a>(colors: &ThemeColors, key: &'a str, what: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<17}"), colors.key_hint()),
        Span::styled(what, colors.text()),
    ])
}

fn render_help_popup(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = frame.area();

    let popup_area = centered_rect(50, 70, area);

    // First render a solid background block to cover everything underneath
    let bg_block = Block::default().style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(bg_block, popup_area);

    let help_content = vec![
        Line::from(""),
        help_section(&colors, "Menu"),
        help_entry(&colors, "1-4", "Home / Postagens / Temas / Cadastrar postagem"),
        help_entry(&colors, "x", "Sair da conta"),
        help_entry(&colors, "Alt+tecla", "Menu a partir de qualquer tela"),
        Line::from(""),
        help_section(&colors, "Listas"),
        help_entry(&colors, "j/k or ↑/↓", "Navegar"),
        help_entry(&colors, "g / End", "Primeiro / último item"),
        help_entry(&colors, "Enter", "Editar postagem"),
        help_entry(&colors, "n", "Nova postagem"),
        help_entry(&colors, "r", "Atualizar"),
        Line::from(""),
        help_section(&colors, "Formulários"),
        help_entry(&colors, "Tab / Shift+Tab", "Próximo / anterior campo"),
        help_entry(&colors, "Enter", "Confirmar / nova linha no texto"),
        help_entry(&colors, "Ctrl+S", "Enviar postagem"),
        help_entry(&colors, "Ctrl+N", "Cadastre-se (na tela de login)"),
        help_entry(&colors, "Esc", "Voltar"),
        Line::from(""),
        help_section(&colors, "Geral"),
        help_entry(&colors, "L / G / I", "Abrir LinkedIn / GitHub / Instagram"),
        help_entry(&colors, "t or F2", "Escolher tema visual"),
        help_entry(&colors, "? or F1", "Mostrar esta ajuda"),
        help_entry(&colors, "q / Ctrl+C", "Sair do programa"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Pressione ", colors.text_muted()),
            Span::styled("Esc", colors.key_hint()),
            Span::styled(" para fechar", colors.text_muted()),
        ]),
    ];

    let help = Paragraph::new(help_content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(colors.block_focus())
                .style(Style::default().bg(colors.bg_secondary))
                .title(" ⌨ Atalhos ")
                .title_style(colors.text_primary()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}

fn render_theme_picker(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = frame.area();

    let popup_area = centered_rect(50, 70, area);

    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(bg_block, popup_area);

    let themes = Theme::all();
    let items: Vec<ListItem> = themes
        .iter()
        .enumerate()
        .map(|(i, theme_name)| {
            let palette = theme_name.palette();
            let selected = i == state.theme_picker_index;

            let preview = format!(
                "  {} {} ",
                if selected { "▸" } else { " " },
                theme_name.display_name()
            );

            let style = if selected {
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg).bg(colors.bg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(preview, style),
                Span::styled("█", Style::default().fg(palette.accent).bg(colors.bg)),
                Span::styled("█", Style::default().fg(palette.secondary).bg(colors.bg)),
                Span::styled("█", Style::default().fg(palette.success).bg(colors.bg)),
                Span::styled("█", Style::default().fg(palette.error).bg(colors.bg)),
            ]))
        })
        .collect();

    let theme_list = List::new(items)
        .style(Style::default().bg(colors.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.primary))
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(colors.bg))
                .title(format!(
                    " 🎨 Tema visual ({}/{}) ",
                    state.theme_picker_index + 1,
                    themes.len()
                ))
                .title_bottom(Line::from(" ↑↓ navegar │ ↵ aplicar │ Esc cancelar ").centered()),
        );

    frame.render_widget(theme_list, popup_area);
}

/// Helper function to create a centered rect
const fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = r.width * percent_x / 100;
    let popup_height = r.height * percent_y / 100;
    Rect {
        x: r.x + (r.width.saturating_sub(popup_width)) / 2,
        y: r.y + (r.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner, Rect::new(25, 10, 50, 20));
    }
}
