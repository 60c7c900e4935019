//! Data models for Blog Pessoal

mod postagem;
mod tema;
mod usuario;

pub use postagem::Postagem;
pub use tema::Tema;
pub use usuario::{Usuario, UsuarioLogin};
