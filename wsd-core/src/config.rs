//! # Configuração
//!
//! Todos os campos têm valor padrão, então um JSON vazio (`{}`) é válido.
//!
//! ```json
//! {
//!   "normalization_cache_size": 1000,
//!   "lookup_cache_size": 5000,
//!   "categories": ["noun", "verb"],
//!   "signature_scope": "extended",
//!   "tokenizer_mode": "standard",
//!   "lexicon_path": "data/wordnet.json"
//! }
//! ```
//!
//! ## Variáveis de ambiente
//!
//! - `WSD_CONFIG`: caminho de um arquivo JSON como o acima.
//! - `WSD_LEXICON`: sobrescreve `lexicon_path`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LexiconError};
use crate::lexicon::{demo_lexicon, InMemoryLexicon, LexicalDatabase};
use crate::lookup::DEFAULT_LOOKUP_CACHE_SIZE;
use crate::normalizer::DEFAULT_NORMALIZATION_CACHE_SIZE;
use crate::sense::Category;
use crate::signature::SignatureScope;
use crate::tokenizer::TokenizerMode;

pub const CONFIG_ENV: &str = "WSD_CONFIG";
pub const LEXICON_ENV: &str = "WSD_LEXICON";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WsdConfig {
    /// Capacidade do cache de normalização (0 desliga).
    pub normalization_cache_size: usize,
    /// Capacidade do cache de consultas (palavra, categoria) (0 desliga).
    pub lookup_cache_size: usize,
    /// Categorias consultadas pela desambiguação, nesta ordem.
    pub categories: Vec<Category>,
    pub signature_scope: SignatureScope,
    pub tokenizer_mode: TokenizerMode,
    /// Base lexical em JSON; ausente → inventário de demonstração embutido.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for WsdConfig {
    fn default() -> Self {
        Self {
            normalization_cache_size: DEFAULT_NORMALIZATION_CACHE_SIZE,
            lookup_cache_size: DEFAULT_LOOKUP_CACHE_SIZE,
            categories: Category::DISAMBIGUATION.to_vec(),
            signature_scope: SignatureScope::default(),
            tokenizer_mode: TokenizerMode::default(),
            lexicon_path: None,
        }
    }
}

impl WsdConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Lê `WSD_CONFIG` (se definido) e aplica `WSD_LEXICON` por cima.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        if let Some(path) = std::env::var_os(LEXICON_ENV) {
            config.lexicon_path = Some(PathBuf::from(path));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid(
                "a lista de categorias não pode ser vazia".to_string(),
            ));
        }
        Ok(())
    }

    /// Carrega a base lexical configurada.
    ///
    /// Falha aqui é "base indisponível", distinta de "palavra sem sentidos".
    pub fn load_lexicon(&self) -> Result<Arc<dyn LexicalDatabase>, LexiconError> {
        let lexicon = match &self.lexicon_path {
            Some(path) => InMemoryLexicon::from_path(path)?,
            None => demo_lexicon()?,
        };
        Ok(Arc::new(lexicon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = WsdConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WsdConfig::default());
        assert_eq!(config.normalization_cache_size, 1000);
        assert_eq!(config.lookup_cache_size, 5000);
        assert_eq!(config.categories, [Category::Noun, Category::Verb]);
        assert_eq!(config.signature_scope, SignatureScope::Extended);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = WsdConfig::from_json_str(
            r#"{"signature_scope": "gloss_only", "categories": ["verb"], "tokenizer_mode": "unsplit"}"#,
        )
        .unwrap();
        assert_eq!(config.signature_scope, SignatureScope::GlossOnly);
        assert_eq!(config.categories, [Category::Verb]);
        assert_eq!(config.tokenizer_mode, TokenizerMode::Unsplit);
        assert_eq!(config.lookup_cache_size, 5000);
    }

    #[test]
    fn test_empty_categories_rejected() {
        let result = WsdConfig::from_json_str(r#"{"categories": []}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_scope_is_parse_error() {
        let result = WsdConfig::from_json_str(r#"{"signature_scope": "everything"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_lexicon_file_is_reported() {
        let config = WsdConfig {
            lexicon_path: Some(PathBuf::from("/nonexistent/wordnet.json")),
            ..WsdConfig::default()
        };
        assert!(matches!(config.load_lexicon(), Err(LexiconError::Io(_))));
    }

    #[test]
    fn test_default_loads_demo_lexicon() {
        let db = WsdConfig::default().load_lexicon().unwrap();
        assert!(!db.senses_of("bank", Category::Noun).unwrap().is_empty());
    }
}
