//! # wsd-core — Desambiguação Lexical de Sentido (WSD) pelo Algoritmo de Lesk
//!
//! Dada uma palavra ambígua e o texto em volta, este crate escolhe o sentido
//! mais plausível da palavra num inventário fixo de sentidos (estilo WordNet),
//! comparando o vocabulário do contexto com a "assinatura" de cada sentido.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: Palavra-alvo + contexto (String).
//! 2.  **Normalização** ([`normalizer`]): minúsculas, tokenização ([`tokenizer`]),
//!     filtro alfabético e remoção de stop words ([`stopwords`]).
//! 3.  **Consulta** ([`lookup`]): sentidos candidatos na base lexical
//!     ([`lexicon`]), substantivos e depois verbos.
//! 4.  **Assinatura** ([`signature`]): gloss + exemplos + glosses dos vizinhos.
//! 5.  **Pontuação** ([`overlap`]): tamanho da interseção com o contexto.
//! 6.  **Seleção** ([`lesk`]): maior score; em empate, o primeiro candidato.
//! 7.  **Saída**: `Some(sentido)` ou `None` quando a palavra não tem candidatos.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::sync::Arc;
//! use wsd_core::{InMemoryLexicon, SimpleLesk};
//!
//! // 1. Carrega a base lexical (aqui, o inventário de demonstração embutido)
//! let lesk = SimpleLesk::new(Arc::new(InMemoryLexicon::demo()?));
//!
//! // 2. Desambigua
//! let result = lesk.disambiguate_scored("bark", "The dog started to bark loudly at the mailman")?;
//!
//! // 3. Exibe os candidatos e o vencedor
//! for candidate in &result.candidates {
//!     println!("{} -> {}", candidate.sense.id, candidate.score);
//! }
//! assert_eq!(result.sense().map(|s| s.id.as_str()), Some("bark.v.02"));
//! # Ok::<(), wsd_core::LexiconError>(())
//! ```
//!
//! ## Módulos Principais
//!
//! - [`lesk`]: Orquestrador que conecta todos os estágios.
//! - [`lexicon`]: Fronteira com a base lexical e a implementação em memória.
//! - [`evaluate`]: Avaliação sobre o [`corpus`] anotado.
//! - [`config`]: Configuração por JSON e variáveis de ambiente.

pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluate;
pub mod lesk;
pub mod lexicon;
pub mod lookup;
pub mod normalizer;
pub mod overlap;
pub mod sense;
pub mod signature;
pub mod stopwords;
pub mod tokenizer;

pub use cache::{BoundedCache, CacheStats};
pub use config::WsdConfig;
pub use error::{ConfigError, LexiconError};
pub use evaluate::{EvaluationReport, PhraseOutcome, SamplePhrase};
pub use lesk::{CachesReport, Disambiguation, LeskEvent, ScoredCandidate, SimpleLesk};
pub use lexicon::{demo_lexicon, InMemoryLexicon, LexicalDatabase};
pub use normalizer::{ContextBag, Normalizer};
pub use sense::{Category, Relation, Sense};
pub use signature::{build_signature, SignatureScope};
pub use tokenizer::{Token, TokenizerMode};
