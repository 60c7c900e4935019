//! Theme model

use serde::{Deserialize, Serialize};

/// A named category a post is filed under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tema {
    /// Backend identifier (0 while nothing is selected)
    #[serde(default)]
    pub id: i64,
    /// Human readable description, e.g. "Java"
    #[serde(default)]
    pub descricao: String,
}

impl Tema {
    /// Create a theme from its parts
    pub fn new(id: i64, descricao: impl Into<String>) -> Self {
        Self {
            id,
            descricao: descricao.into(),
        }
    }

    /// Whether the description has been filled in.
    ///
    /// The post form uses this as its readiness gate.
    pub fn is_loaded(&self) -> bool {
        !self.descricao.is_empty()
    }
}

impl std::fmt::Display for Tema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descricao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_loaded() {
        assert!(!Tema::default().is_loaded());
        assert!(Tema::new(2, "Java").is_loaded());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let tema: Tema = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(tema, Tema::new(7, ""));
    }
}
