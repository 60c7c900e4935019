//! Editable post fields and the reducer that applies edits

use crate::models::{Postagem, Tema, Usuario, UsuarioLogin};

/// A field of the post form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Post title (required)
    Titulo,
    /// Post body (required)
    Texto,
    /// Image URL
    Imagem,
    /// GitHub link
    Github,
    /// LinkedIn link
    Linkedin,
}

impl Field {
    /// Fields in form order
    pub const fn all() -> &'static [Self] {
        &[
            Self::Titulo,
            Self::Texto,
            Self::Imagem,
            Self::Github,
            Self::Linkedin,
        ]
    }

    /// Label shown above the input
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Titulo => "Título da Postagem",
            Self::Texto => "Texto da Postagem",
            Self::Imagem => "Link da Imagem",
            Self::Github => "Link do GitHub",
            Self::Linkedin => "Link do LinkedIn",
        }
    }

    /// Placeholder shown while empty
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Titulo => "Título",
            Self::Texto => "Texto",
            Self::Imagem => "URL da imagem",
            Self::Github => "URL do GitHub",
            Self::Linkedin => "URL do LinkedIn",
        }
    }

    /// Whether the form refuses to submit while this field is empty
    pub const fn required(&self) -> bool {
        matches!(self, Self::Titulo | Self::Texto)
    }

    /// Whether the input spans several lines
    pub const fn multiline(&self) -> bool {
        matches!(self, Self::Texto)
    }

    /// Current value of this field in `postagem`
    pub fn value<'a>(&self, postagem: &'a Postagem) -> &'a str {
        match self {
            Self::Titulo => &postagem.titulo,
            Self::Texto => &postagem.texto,
            Self::Imagem => postagem.imagem.as_deref().unwrap_or(""),
            Self::Github => postagem.github.as_deref().unwrap_or(""),
            Self::Linkedin => postagem.linkedin.as_deref().unwrap_or(""),
        }
    }

    /// Build the update setting this field to `value`
    pub fn update(self, value: impl Into<String>) -> FieldUpdate {
        let value = value.into();
        match self {
            Self::Titulo => FieldUpdate::Titulo(value),
            Self::Texto => FieldUpdate::Texto(value),
            Self::Imagem => FieldUpdate::Imagem(value),
            Self::Github => FieldUpdate::Github(value),
            Self::Linkedin => FieldUpdate::Linkedin(value),
        }
    }

    /// Next field, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// A change to a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// New title
    Titulo(String),
    /// New body
    Texto(String),
    /// New image URL
    Imagem(String),
    /// New GitHub link
    Github(String),
    /// New LinkedIn link
    Linkedin(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub const fn field(&self) -> Field {
        match self {
            Self::Titulo(_) => Field::Titulo,
            Self::Texto(_) => Field::Texto,
            Self::Imagem(_) => Field::Imagem,
            Self::Github(_) => Field::Github,
            Self::Linkedin(_) => Field::Linkedin,
        }
    }
}

/// Apply `update` to `postagem`.
///
/// Only the targeted field changes; `tema` and `usuario` are always reset to
/// the currently selected theme and the session user.
pub fn reduce(
    postagem: &Postagem,
    update: FieldUpdate,
    tema: &Tema,
    usuario: &UsuarioLogin,
) -> Postagem {
    let mut next = postagem.clone();

    match update {
        FieldUpdate::Titulo(v) => next.titulo = v,
        FieldUpdate::Texto(v) => next.texto = v,
        FieldUpdate::Imagem(v) => next.imagem = non_empty(v),
        FieldUpdate::Github(v) => next.github = non_empty(v),
        FieldUpdate::Linkedin(v) => next.linkedin = non_empty(v),
    }

    next.tema = Some(tema.clone());
    next.usuario = Some(Usuario::from(usuario));
    next
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Postagem {
        Postagem {
            id: Some(5),
            titulo: "Antigo".to_string(),
            texto: "Corpo".to_string(),
            imagem: Some("https://img/1.png".to_string()),
            github: Some("https://github.com/Lucas300".to_string()),
            ..Postagem::default()
        }
    }

    fn usuario() -> UsuarioLogin {
        UsuarioLogin {
            id: 9,
            nome: "Lucas".to_string(),
            token: "Bearer t".to_string(),
            ..UsuarioLogin::default()
        }
    }

    #[test]
    fn test_only_named_field_changes() {
        let before = sample();
        let tema = Tema::new(2, "Java");
        let after = reduce(&before, FieldUpdate::Titulo("Novo".to_string()), &tema, &usuario());

        assert_eq!(after.titulo, "Novo");
        assert_eq!(after.texto, before.texto);
        assert_eq!(after.imagem, before.imagem);
        assert_eq!(after.github, before.github);
        assert_eq!(after.linkedin, before.linkedin);
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn test_tema_and_usuario_are_reasserted() {
        let mut before = sample();
        before.tema = Some(Tema::new(1, "Velho"));
        let tema = Tema::new(2, "Java");

        for field in Field::all() {
            let after = reduce(&before, field.update("x"), &tema, &usuario());
            assert_eq!(after.tema, Some(tema.clone()));
            assert_eq!(after.usuario.as_ref().and_then(|u| u.id), Some(9));
        }
    }

    #[test]
    fn test_clearing_optional_link_unsets_it() {
        let after = reduce(
            &sample(),
            FieldUpdate::Github(String::new()),
            &Tema::default(),
            &usuario(),
        );
        assert_eq!(after.github, None);
        assert_eq!(Field::Github.value(&after), "");
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(Field::Linkedin.next(), Field::Titulo);
        assert_eq!(Field::Titulo.prev(), Field::Linkedin);
        assert_eq!(Field::Imagem.update("u").field(), Field::Imagem);
    }
}
