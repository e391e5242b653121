//! # Acesso à Base Lexical com Cache
//!
//! Envolve um [`LexicalDatabase`] e memoriza as consultas por
//! `(palavra, categoria)`. É aqui que a política de categorias da
//! desambiguação é aplicada: os candidatos são os sentidos de cada categoria
//! pedida, concatenados na ordem das categorias.
//!
//! Erros da base **não** são memorizados nem tratados: sobem intactos.

use std::sync::Arc;

use crate::cache::{BoundedCache, CacheStats};
use crate::error::Result;
use crate::lexicon::LexicalDatabase;
use crate::sense::{Category, Sense};

/// Capacidade padrão do cache de consultas.
pub const DEFAULT_LOOKUP_CACHE_SIZE: usize = 5000;

type SenseList = Arc<Vec<Arc<Sense>>>;

/// Acesso memorizado à base lexical, injetado via `Arc<dyn LexicalDatabase>`.
pub struct SenseLookup {
    db: Arc<dyn LexicalDatabase>,
    cache: BoundedCache<(String, Category), SenseList>,
}

impl SenseLookup {
    pub fn new(db: Arc<dyn LexicalDatabase>) -> Self {
        Self::with_capacity(db, DEFAULT_LOOKUP_CACHE_SIZE)
    }

    pub fn with_capacity(db: Arc<dyn LexicalDatabase>, capacity: usize) -> Self {
        Self {
            db,
            cache: BoundedCache::new(capacity),
        }
    }

    /// Sentidos de `word` numa única categoria (memorizado).
    pub fn senses(&self, word: &str, category: Category) -> Result<SenseList> {
        self.cache
            .get_or_try_insert_with((word.to_string(), category), |(word, category)| {
                tracing::debug!("Consulta à base lexical: '{}' ({})", word, category.name());
                self.db.senses_of(word, *category).map(Arc::new)
            })
    }

    /// Candidatos de `word` nas categorias dadas, concatenados na ordem das
    /// categorias e, dentro de cada uma, na ordem da base.
    pub fn candidate_senses(&self, word: &str, categories: &[Category]) -> Result<Vec<Arc<Sense>>> {
        let mut candidates = Vec::new();
        for &category in categories {
            candidates.extend(self.senses(word, category)?.iter().cloned());
        }
        Ok(candidates)
    }

    /// Todos os sentidos de `word`, sem restrição de categoria.
    ///
    /// Usado pela avaliação e pelos relatórios, não pela desambiguação.
    pub fn all_senses(&self, word: &str) -> Result<Vec<Arc<Sense>>> {
        self.candidate_senses(word, &Category::ALL)
    }

    pub fn database(&self) -> &Arc<dyn LexicalDatabase> {
        &self.db
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
