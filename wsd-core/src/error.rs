//! # Erros da Base Lexical e da Configuração
//!
//! A desambiguação distingue dois desfechos que **não** podem ser confundidos:
//!
//! - **Ausência**: a palavra não tem sentidos (ou nenhum sentido foi escolhido).
//!   Isso é representado por `Option::None` e nunca passa por aqui.
//! - **Falha**: a base lexical não pôde ser carregada ou está inconsistente.
//!   Isso é um [`LexiconError`] e sobe até quem chamou `disambiguate`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

/// Falhas na fronteira com a base lexical.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("base lexical indisponível: {0}")]
    Unavailable(String),

    #[error("falha de leitura da base lexical: {0}")]
    Io(#[from] std::io::Error),

    #[error("base lexical malformada: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("sentido duplicado na base lexical: {0}")]
    DuplicateSense(String),

    #[error("relação aponta para sentido inexistente: {from} -> {to}")]
    DanglingRelation { from: String, to: String },

    #[error("sentido não encontrado: {0}")]
    SenseNotFound(String),
}

/// Falhas ao carregar a [`crate::config::WsdConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("falha de leitura da configuração: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuração malformada: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuração inválida: {0}")]
    Invalid(String),
}
