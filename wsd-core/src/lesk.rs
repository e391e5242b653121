//! # Algoritmo de Lesk — Seleção do Sentido com Eventos Observáveis
//!
//! O [`SimpleLesk`] coordena os módulos (normalizador, consulta à base,
//! assinatura, sobreposição) e escolhe o sentido cuja assinatura mais
//! compartilha palavras com o contexto.
//!
//! ## Fluxo
//!
//! 1. Normaliza o contexto **uma vez** → [`ContextBag`].
//! 2. Busca os candidatos da palavra (substantivos, depois verbos).
//!    Nenhum candidato → "nenhum sentido" (`None`), não é erro.
//! 3. Para cada candidato, na ordem: monta a assinatura e pontua.
//! 4. O melhor só é trocado por score **estritamente maior**: em empate,
//!    vence o candidato visto primeiro.
//!
//! Assim como o pipeline, o algoritmo emite eventos em cada passo via canal
//! `mpsc`, permitindo que o servidor WebSocket mostre o raciocínio ao vivo.
//!
//! ## Exemplo
//!
//! ```rust
//! use std::sync::Arc;
//! use wsd_core::{InMemoryLexicon, SimpleLesk};
//!
//! let lesk = SimpleLesk::new(Arc::new(InMemoryLexicon::demo()?));
//! let sense = lesk.disambiguate("bark", "the dog started to bark loudly at the mailman")?;
//! assert_eq!(sense.map(|s| s.id.clone()).as_deref(), Some("bark.v.02"));
//! # Ok::<(), wsd_core::LexiconError>(())
//! ```

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::config::WsdConfig;
use crate::error::Result;
use crate::lexicon::LexicalDatabase;
use crate::lookup::SenseLookup;
use crate::normalizer::{ContextBag, Normalizer};
use crate::overlap;
use crate::sense::{Category, Sense};
use crate::signature::{build_signature_with_scope, SignatureScope};

/// Um candidato pontuado numa consulta.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub sense: Arc<Sense>,
    pub score: usize,
    /// Palavras da assinatura presentes no contexto.
    pub shared_words: Vec<String>,
}

/// Resultado completo de uma desambiguação, com todos os candidatos.
#[derive(Debug, Clone, Serialize)]
pub struct Disambiguation {
    pub word: String,
    /// Palavras do contexto normalizado.
    pub context: Vec<String>,
    /// Candidatos na ordem da base.
    pub candidates: Vec<ScoredCandidate>,
    /// Índice do vencedor em `candidates`.
    pub best: Option<usize>,
}

impl Disambiguation {
    /// O sentido escolhido, se houver.
    pub fn sense(&self) -> Option<&Arc<Sense>> {
        self.best_candidate().map(|c| &c.sense)
    }

    pub fn best_candidate(&self) -> Option<&ScoredCandidate> {
        self.best.and_then(|i| self.candidates.get(i))
    }
}

/// Eventos emitidos durante a desambiguação.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LeskEvent {
    /// **Passo 1**: Contexto normalizado.
    ContextNormalized {
        tokens: Vec<String>,
        total: usize,
    },
    /// **Passo 2**: Candidatos obtidos da base lexical.
    CandidatesFound {
        word: String,
        senses: Vec<String>,
        total: usize,
    },
    /// **Passo 3**: Um candidato foi pontuado.
    CandidateScored {
        index: usize,
        sense_id: String,
        gloss: String,
        signature: String,
        score: usize,
        shared_words: Vec<String>,
    },
    /// **Passo 4**: O candidato superou o melhor anterior.
    BestUpdated {
        index: usize,
        sense_id: String,
        score: usize,
    },
    /// **Conclusão**: `sense_id` ausente significa "nenhum sentido".
    Done {
        word: String,
        sense_id: Option<String>,
        gloss: Option<String>,
        score: Option<usize>,
        candidates_total: usize,
        processing_ms: u64,
    },
    /// **Falha**: A base lexical falhou.
    Error {
        message: String,
    },
}

/// O desambiguador de Lesk simplificado (com expansão por relações).
///
/// A base lexical é injetada na construção; os caches pertencem à instância.
/// `SimpleLesk` é `Send + Sync`, então pode ser compartilhado entre threads
/// para consultas independentes.
pub struct SimpleLesk {
    lookup: SenseLookup,
    normalizer: Normalizer,
    categories: Vec<Category>,
    scope: SignatureScope,
}

/// Estatísticas dos dois caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachesReport {
    pub normalization: CacheStats,
    pub lookup: CacheStats,
}

impl SimpleLesk {
    /// Cria o desambiguador com a configuração padrão.
    pub fn new(db: Arc<dyn LexicalDatabase>) -> Self {
        Self::with_config(db, &WsdConfig::default())
    }

    pub fn with_config(db: Arc<dyn LexicalDatabase>, config: &WsdConfig) -> Self {
        let stop_words = crate::stopwords::english_stop_words();
        Self {
            lookup: SenseLookup::with_capacity(db, config.lookup_cache_size),
            normalizer: Normalizer::with_stop_words(
                stop_words,
                config.tokenizer_mode,
                config.normalization_cache_size,
            ),
            categories: config.categories.clone(),
            scope: config.signature_scope,
        }
    }

    /// Escolhe o sentido de `word` mais compatível com `context`.
    ///
    /// `Ok(None)`: a palavra não tem candidatos. `Err`: a base lexical falhou.
    pub fn disambiguate(&self, word: &str, context: &str) -> Result<Option<Arc<Sense>>> {
        let result = self.disambiguate_scored(word, context)?;
        Ok(result.sense().cloned())
    }

    /// Como [`Self::disambiguate`], mas devolve todos os candidatos pontuados.
    pub fn disambiguate_scored(&self, word: &str, context: &str) -> Result<Disambiguation> {
        self.run(word, context, |_| {})
    }

    /// Executa a desambiguação enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos
    /// 1. `ContextNormalized`
    /// 2. `CandidatesFound`
    /// 3. `CandidateScored` / `BestUpdated` (Loop)
    /// 4. `Done`, ou `Error` se a base falhar
    pub fn disambiguate_streaming(&self, word: &str, context: &str, tx: mpsc::Sender<LeskEvent>) {
        let start = Instant::now();
        let outcome = self.run(word, context, |event| {
            let _ = tx.send(event);
        });

        match outcome {
            Ok(result) => {
                let best = result.best_candidate();
                let _ = tx.send(LeskEvent::Done {
                    word: result.word.clone(),
                    sense_id: best.map(|c| c.sense.id.clone()),
                    gloss: best.map(|c| c.sense.gloss.clone()),
                    score: best.map(|c| c.score),
                    candidates_total: result.candidates.len(),
                    processing_ms: start.elapsed().as_millis() as u64,
                });
            }
            Err(err) => {
                let _ = tx.send(LeskEvent::Error {
                    message: err.to_string(),
                });
            }
        }
    }

    fn run<F>(&self, word: &str, context: &str, mut emit: F) -> Result<Disambiguation>
    where
        F: FnMut(LeskEvent),
    {
        // === Passo 1: Contexto ===
        let context_bag: Arc<ContextBag> = self.normalizer.normalize(context);
        let context_words: Vec<String> = context_bag.iter().cloned().collect();
        emit(LeskEvent::ContextNormalized {
            tokens: context_words.clone(),
            total: context_words.len(),
        });

        // === Passo 2: Candidatos ===
        let senses = self.lookup.candidate_senses(word, &self.categories)?;
        emit(LeskEvent::CandidatesFound {
            word: word.to_string(),
            senses: senses.iter().map(|s| s.id.clone()).collect(),
            total: senses.len(),
        });

        // === Passo 3: Pontuação ===
        let db: &dyn LexicalDatabase = &**self.lookup.database();
        let mut candidates = Vec::with_capacity(senses.len());
        let mut best: Option<(usize, usize)> = None;

        for (index, sense) in senses.into_iter().enumerate() {
            let signature = build_signature_with_scope(&sense, db, self.scope)?;
            let shared_words = overlap::shared_words(&signature, &context_bag, &self.normalizer);
            let score = shared_words.len();

            emit(LeskEvent::CandidateScored {
                index,
                sense_id: sense.id.clone(),
                gloss: sense.gloss.clone(),
                signature,
                score,
                shared_words: shared_words.clone(),
            });

            // === Passo 4: Melhor até agora (empate mantém o primeiro) ===
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
                emit(LeskEvent::BestUpdated {
                    index,
                    sense_id: sense.id.clone(),
                    score,
                });
            }

            candidates.push(ScoredCandidate {
                sense,
                score,
                shared_words,
            });
        }

        match best {
            Some((index, score)) => tracing::debug!(
                "'{}' desambiguada como {} (score {})",
                word,
                candidates[index].sense.id,
                score
            ),
            None => tracing::debug!("'{}' não tem sentidos candidatos", word),
        }

        Ok(Disambiguation {
            word: word.to_string(),
            context: context_words,
            candidates,
            best: best.map(|(index, _)| index),
        })
    }

    /// Candidatos de `word` nas categorias configuradas.
    pub fn candidate_senses(&self, word: &str) -> Result<Vec<Arc<Sense>>> {
        self.lookup.candidate_senses(word, &self.categories)
    }

    /// Todos os sentidos de `word`, sem restrição de categoria.
    pub fn all_senses(&self, word: &str) -> Result<Vec<Arc<Sense>>> {
        self.lookup.all_senses(word)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn signature_scope(&self) -> SignatureScope {
        self.scope
    }

    /// Esvazia os dois caches (entre rodadas de avaliação independentes).
    pub fn clear_caches(&self) {
        self.normalizer.clear_cache();
        self.lookup.clear_cache();
    }

    pub fn cache_stats(&self) -> CachesReport {
        CachesReport {
            normalization: self.normalizer.cache_stats(),
            lookup: self.lookup.cache_stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;
    use crate::lexicon::InMemoryLexicon;

    fn demo_lesk() -> SimpleLesk {
        SimpleLesk::new(Arc::new(InMemoryLexicon::demo().unwrap()))
    }

    fn twin(id: &str, category: Category) -> Sense {
        Sense {
            id: id.to_string(),
            lemmas: vec!["twin".to_string()],
            category,
            gloss: "one of two offspring born at the same time".to_string(),
            examples: vec![],
            broader: vec![],
            narrower: vec![],
        }
    }

    /// Base que sempre falha, como uma base não carregada.
    struct OfflineDb;

    impl LexicalDatabase for OfflineDb {
        fn senses_of(&self, _word: &str, _category: Category) -> Result<Vec<Arc<Sense>>> {
            Err(LexiconError::Unavailable("wordnet não carregada".to_string()))
        }

        fn sense(&self, id: &str) -> Result<Arc<Sense>> {
            Err(LexiconError::SenseNotFound(id.to_string()))
        }
    }

    #[test]
    fn test_bark_picks_verb_sense() {
        let lesk = demo_lesk();
        let result = lesk
            .disambiguate_scored("bark", "the dog started to bark loudly at the mailman")
            .unwrap();

        assert_eq!(result.context, ["bark", "dog", "loudly", "mailman", "started"]);
        let scores: Vec<(&str, usize)> = result
            .candidates
            .iter()
            .map(|c| (c.sense.id.as_str(), c.score))
            .collect();
        assert_eq!(
            scores,
            [
                ("bark.n.01", 1),
                ("bark.n.02", 1),
                ("bark.n.03", 0),
                ("bark.v.01", 0),
                ("bark.v.02", 3),
            ]
        );
        assert_eq!(result.sense().unwrap().id, "bark.v.02");
    }

    #[test]
    fn test_unknown_word_yields_no_sense() {
        let lesk = demo_lesk();
        assert!(lesk.disambiguate("zzznotaword", "anything").unwrap().is_none());
        assert!(lesk.disambiguate("zzznotaword", "").unwrap().is_none());
    }

    #[test]
    fn test_empty_context_picks_first_candidate() {
        let lesk = demo_lesk();
        let sense = lesk.disambiguate("bank", "").unwrap().unwrap();
        assert_eq!(sense.id, "bank.n.01");
    }

    #[test]
    fn test_tie_keeps_first_seen_candidate() {
        let lexicon = InMemoryLexicon::from_senses(vec![
            twin("twin.n.01", Category::Noun),
            twin("twin.n.02", Category::Noun),
            twin("twin.v.01", Category::Verb),
        ])
        .unwrap();
        let lesk = SimpleLesk::new(Arc::new(lexicon));
        for _ in 0..5 {
            let result = lesk.disambiguate_scored("twin", "two offspring were born").unwrap();
            assert!(result.candidates.iter().all(|c| c.score == 3));
            assert_eq!(result.sense().unwrap().id, "twin.n.01");
        }
    }

    #[test]
    fn test_adjectives_are_not_candidates() {
        let lesk = demo_lesk();
        let candidates = lesk.candidate_senses("bass").unwrap();
        assert!(candidates.iter().all(|s| s.category != Category::Adjective));
        assert!(lesk.all_senses("bass").unwrap().iter().any(|s| s.category == Category::Adjective));
    }

    #[test]
    fn test_repeated_lemma_is_one_candidate() {
        let mut bark = twin("bark.n.01", Category::Noun);
        bark.lemmas = vec!["bark".to_string(), "Bark".to_string()];
        let lesk = SimpleLesk::new(Arc::new(InMemoryLexicon::from_senses(vec![bark]).unwrap()));

        let ids: Vec<String> = lesk.all_senses("bark").unwrap().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["bark.n.01"]);
        assert_eq!(lesk.disambiguate_scored("bark", "").unwrap().candidates.len(), 1);
    }

    #[test]
    fn test_signature_scope_follows_config() {
        let config = WsdConfig {
            signature_scope: SignatureScope::GlossOnly,
            ..WsdConfig::default()
        };
        let lesk = SimpleLesk::with_config(Arc::new(InMemoryLexicon::demo().unwrap()), &config);
        assert_eq!(lesk.signature_scope(), SignatureScope::GlossOnly);
        assert_eq!(demo_lesk().signature_scope(), SignatureScope::Extended);
    }

    #[test]
    fn test_adverb_only_word_has_no_candidates() {
        let lesk = demo_lesk();
        assert!(lesk.disambiguate("loudly", "the band played loudly").unwrap().is_none());
    }

    #[test]
    fn test_database_failure_is_not_absence() {
        let lesk = SimpleLesk::new(Arc::new(OfflineDb));
        let result = lesk.disambiguate("bark", "the dog barked");
        assert!(matches!(result, Err(LexiconError::Unavailable(_))));
    }

    #[test]
    fn test_configured_categories_are_used() {
        let config = WsdConfig {
            categories: vec![Category::Verb],
            ..WsdConfig::default()
        };
        let lesk = SimpleLesk::with_config(Arc::new(InMemoryLexicon::demo().unwrap()), &config);
        let sense = lesk.disambiguate("bank", "").unwrap().unwrap();
        assert_eq!(sense.id, "bank.v.01");
    }

    #[test]
    fn test_streaming_events_order() {
        let lesk = demo_lesk();
        let (tx, rx) = mpsc::channel();
        lesk.disambiguate_streaming("bark", "the dog started to bark loudly at the mailman", tx);
        let events: Vec<LeskEvent> = rx.try_iter().collect();

        assert!(matches!(&events[0], LeskEvent::ContextNormalized { total: 5, .. }));
        assert!(matches!(&events[1], LeskEvent::CandidatesFound { total: 5, .. }));
        let scored = events
            .iter()
            .filter(|e| matches!(e, LeskEvent::CandidateScored { .. }))
            .count();
        assert_eq!(scored, 5);
        match events.last().unwrap() {
            LeskEvent::Done { sense_id, score, .. } => {
                assert_eq!(sense_id.as_deref(), Some("bark.v.02"));
                assert_eq!(*score, Some(3));
            }
            other => panic!("Último evento deve ser Done, veio {:?}", other),
        }
    }

    #[test]
    fn test_streaming_reports_database_error() {
        let lesk = SimpleLesk::new(Arc::new(OfflineDb));
        let (tx, rx) = mpsc::channel();
        lesk.disambiguate_streaming("bark", "dog", tx);
        let events: Vec<LeskEvent> = rx.try_iter().collect();
        assert!(matches!(events.last(), Some(LeskEvent::Error { .. })));
    }

    #[test]
    fn test_clear_caches() {
        let lesk = demo_lesk();
        lesk.disambiguate("bark", "dog").unwrap();
        let stats = lesk.cache_stats();
        assert!(stats.normalization.len > 0);
        assert!(stats.lookup.len > 0);

        lesk.clear_caches();
        let stats = lesk.cache_stats();
        assert_eq!(stats.normalization.len, 0);
        assert_eq!(stats.lookup.len, 0);
    }

    #[test]
    fn test_simple_lesk_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimpleLesk>();
    }
}
