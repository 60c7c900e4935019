//! Post model

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::{Tema, Usuario};

/// A blog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postagem {
    /// Backend identifier, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Title
    #[serde(default)]
    pub titulo: String,
    /// Body text
    #[serde(default)]
    pub texto: String,
    /// Last modification time, set by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DateTime<Utc>>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagem: Option<String>,
    /// Author's GitHub link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Author's LinkedIn link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Theme the post is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tema: Option<Tema>,
    /// Owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<Usuario>,
}

impl Postagem {
    /// Theme description, or an empty string when the post has no theme
    pub fn tema_descricao(&self) -> &str {
        self.tema.as_ref().map_or("", |t| t.descricao.as_str())
    }

    /// Author name, or an empty string when the post has no owner
    pub fn autor(&self) -> &str {
        self.usuario.as_ref().map_or("", |u| u.nome.as_str())
    }

    /// Local date in the `dd/mm/yyyy hh:mm` form used by the listing
    pub fn data_formatada(&self) -> String {
        self.data.map_or_else(String::new, |d| {
            d.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
        })
    }
}
