//! # Cache Limitado (LRU)
//!
//! Normalização de texto e consulta de sentidos são funções puras das suas
//! entradas, então podem ser memorizadas sem alterar o resultado. Este módulo
//! oferece um cache associativo com capacidade fixa e descarte do item usado
//! há mais tempo (LRU), compartilhável entre threads.
//!
//! ## Disciplina de concorrência
//!
//! O lock **não** é mantido durante o cálculo do valor: duas threads podem
//! calcular a mesma chave ao mesmo tempo, e a segunda escrita apenas repete a
//! primeira (o valor é idêntico). Consultas à base lexical nunca ficam
//! serializadas atrás do cache.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Estatísticas de uso de um cache, para diagnóstico.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entradas atualmente armazenadas.
    pub len: usize,
    /// Capacidade máxima (0 = cache desligado).
    pub capacity: usize,
}

/// Cache LRU com capacidade limitada. Capacidade 0 desliga o cache.
pub struct BoundedCache<K: Hash + Eq, V> {
    entries: Option<Mutex<LruCache<K, V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Hash + Eq, V: Clone> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Retorna o valor da chave, calculando-o com `compute` quando ausente.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        match self.get_or_try_insert_with(key, |k| Ok::<V, std::convert::Infallible>(compute(k))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Igual a [`Self::get_or_insert_with`], mas para cálculos falíveis.
    /// Erros não são armazenados: a próxima chamada tenta de novo.
    pub fn get_or_try_insert_with<F, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        let Some(entries) = &self.entries else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return compute(&key);
        };

        if let Some(value) = entries.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(value.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute(&key)?;
        entries.lock().put(key, value.clone());
        Ok(value)
    }

    /// Esvazia o cache e zera as estatísticas.
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.lock().clear();
        }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.lock().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: self.len(),
            capacity: self.entries.as_ref().map_or(0, |e| e.lock().cap().get()),
        }
    }
}
