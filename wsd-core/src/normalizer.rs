//! # Normalizador de Texto
//!
//! Transforma texto livre em um conjunto comparável de palavras de conteúdo
//! (o "saco de palavras" do contexto, [`ContextBag`]).
//!
//! ## Passos
//!
//! 1. **Minúsculas**: `"The Dog"` → `"the dog"`.
//! 2. **Tokenização** ([`crate::tokenizer`]): fronteiras de palavra UAX #29.
//! 3. **Filtro alfabético**: só sobrevivem tokens formados apenas por letras
//!    (números, "3.14" e restos com apóstrofo saem).
//! 4. **Stop words** ([`crate::stopwords`]): palavras funcionais saem.
//!
//! A saída é um conjunto ordenado: a ordem e as repetições do texto de entrada
//! não importam para a comparação por sobreposição.
//!
//! ## Memorização
//!
//! A normalização é uma função pura do texto, então o [`Normalizer`] guarda os
//! resultados num cache LRU chaveado pelo texto exato. Com ou sem cache, a
//! saída é idêntica.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::cache::{BoundedCache, CacheStats};
use crate::stopwords::english_stop_words;
use crate::tokenizer::{tokenize_with_mode, TokenizerMode};

/// Conjunto de palavras normalizadas de um texto.
pub type ContextBag = BTreeSet<String>;

/// Capacidade padrão do cache de normalização.
pub const DEFAULT_NORMALIZATION_CACHE_SIZE: usize = 1000;

/// Normalizador com lista de stop words fixa e cache LRU.
pub struct Normalizer {
    stop_words: HashSet<String>,
    mode: TokenizerMode,
    cache: BoundedCache<String, Arc<ContextBag>>,
}

impl Normalizer {
    /// Normalizador para o inglês com o cache padrão.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NORMALIZATION_CACHE_SIZE)
    }

    /// Normalizador para o inglês com cache de `capacity` entradas (0 desliga).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_stop_words(english_stop_words(), TokenizerMode::Standard, capacity)
    }

    pub fn with_stop_words(
        stop_words: HashSet<String>,
        mode: TokenizerMode,
        capacity: usize,
    ) -> Self {
        Self {
            stop_words,
            mode,
            cache: BoundedCache::new(capacity),
        }
    }

    /// Normaliza `text` (consultando o cache).
    pub fn normalize(&self, text: &str) -> Arc<ContextBag> {
        self.cache.get_or_insert_with(text.to_string(), |text| {
            Arc::new(normalize_with(text, &self.stop_words, self.mode))
        })
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn mode(&self) -> TokenizerMode {
        self.mode
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalização sem cache. Determinística: mesma entrada, mesmo conjunto.
pub fn normalize_with(text: &str, stop_words: &HashSet<String>, mode: TokenizerMode) -> ContextBag {
    let lower = text.to_lowercase();
    tokenize_with_mode(&lower, mode)
        .into_iter()
        .map(|token| token.text)
        .filter(|word| word.chars().all(char::is_alphabetic))
        .filter(|word| !stop_words.contains(word))
        .collect()
}

/// Junta as palavras de um [`ContextBag`] separadas por espaço.
pub fn bag_to_text(bag: &ContextBag) -> String {
    bag.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}
