//! Screen state that is not the post form

mod cadastro;
mod lista;
mod login;

pub use cadastro::{CadastroField, CadastroPage, MIN_SENHA};
pub use lista::Lista;
pub use login::{LoginField, LoginPage};

use crate::models::{Postagem, Tema};

/// Post listing (`/postagens`)
pub type ListaPostagens = Lista<Postagem>;

/// Theme listing (`/temas`)
pub type ListaTemas = Lista<Tema>;

/// Empty post listing
pub const fn lista_postagens() -> ListaPostagens {
    Lista::new("Erro ao buscar as postagens")
}

/// Empty theme listing
pub const fn lista_temas() -> ListaTemas {
    Lista::new("Erro ao buscar os temas")
}
