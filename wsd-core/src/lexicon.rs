//! # Base Lexical (fronteira com o inventário de sentidos)
//!
//! A desambiguação consome a base lexical apenas através do trait
//! [`LexicalDatabase`]. Isso permite trocar a base real por um dublê de teste
//! com meia dúzia de sentidos fixos.
//!
//! [`InMemoryLexicon`] é a implementação padrão: um inventário no estilo
//! WordNet carregado de um documento JSON, inteiramente em memória antes da
//! primeira consulta.
//!
//! ## Formato JSON
//!
//! ```json
//! { "language": "en",
//!   "senses": [ { "id": "bark.n.01", "lemmas": ["bark"], "category": "noun",
//!                 "gloss": "...", "examples": ["..."],
//!                 "broader": ["covering.n.02"], "narrower": ["phloem.n.01"] } ] }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};
use crate::sense::{Category, Relation, Sense};

/// Inventário de demonstração embutido no binário.
const DEMO_LEXICON_JSON: &str = include_str!("../data/demo_lexicon.json");

/// Capacidade somente-leitura de consulta a uma base lexical.
///
/// Implementações devem ser puras do ponto de vista do chamador: a mesma
/// consulta devolve os mesmos sentidos, na mesma ordem.
pub trait LexicalDatabase: Send + Sync {
    /// Sentidos de `word` restritos a `category`, na ordem nativa da base.
    ///
    /// Palavra desconhecida → `Ok(vec![])`. `Err` significa base quebrada.
    fn senses_of(&self, word: &str, category: Category) -> Result<Vec<Arc<Sense>>>;

    /// Resolve um sentido pelo identificador.
    fn sense(&self, id: &str) -> Result<Arc<Sense>>;

    /// Vizinhos de `sense` por uma relação, na ordem nativa da base.
    fn related(&self, sense: &Sense, relation: Relation) -> Result<Vec<Arc<Sense>>> {
        sense
            .related_ids(relation)
            .iter()
            .map(|id| self.sense(id))
            .collect()
    }
}

/// Documento JSON serializado de um inventário.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

/// Base lexical em memória, indexada por (lema, categoria).
#[derive(Debug, Clone, Default)]
pub struct InMemoryLexicon {
    language: Option<String>,
    by_id: HashMap<String, Arc<Sense>>,
    by_lemma: HashMap<(String, Category), Vec<Arc<Sense>>>,
}

impl InMemoryLexicon {
    /// Cria uma base vazia (toda consulta devolve zero sentidos).
    pub fn new() -> Self {
        Self::default()
    }

    /// Monta a base a partir de sentidos já construídos.
    ///
    /// Valida ids duplicados e relações que apontam para sentidos inexistentes.
    pub fn from_senses(senses: impl IntoIterator<Item = Sense>) -> Result<Self> {
        let mut lexicon = Self::new();

        for sense in senses {
            if lexicon.by_id.contains_key(&sense.id) {
                return Err(LexiconError::DuplicateSense(sense.id));
            }
            let sense = Arc::new(sense);
            // Lemas que colapsam na mesma chave ("bark", "Bark") indexam o sentido uma vez só
            let mut keys = HashSet::new();
            for lemma in &sense.lemmas {
                let key = lemma_key(lemma);
                if !keys.insert(key.clone()) {
                    continue;
                }
                lexicon
                    .by_lemma
                    .entry((key, sense.category))
                    .or_default()
                    .push(Arc::clone(&sense));
            }
            lexicon.by_id.insert(sense.id.clone(), sense);
        }

        lexicon.validate_relations()?;
        Ok(lexicon)
    }

    /// Carrega a base de um documento JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: LexiconDocument = serde_json::from_str(json)?;
        let language = document.language.clone();
        let mut lexicon = Self::from_senses(document.senses)?;
        lexicon.language = language;
        Ok(lexicon)
    }

    /// Carrega a base de um arquivo JSON no disco.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&json)?;
        tracing::info!(
            "Base lexical carregada de {}: {} sentidos",
            path.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    /// Inventário de demonstração embutido (bark, bank, bass, plant, mouse...).
    pub fn demo() -> Result<Self> {
        Self::from_json_str(DEMO_LEXICON_JSON)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Número de sentidos distintos.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn validate_relations(&self) -> Result<()> {
        for sense in self.by_id.values() {
            for relation in Relation::ALL {
                for target in sense.related_ids(relation) {
                    if !self.by_id.contains_key(target) {
                        return Err(LexiconError::DanglingRelation {
                            from: sense.id.clone(),
                            to: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl LexicalDatabase for InMemoryLexicon {
    fn senses_of(&self, word: &str, category: Category) -> Result<Vec<Arc<Sense>>> {
        Ok(self
            .by_lemma
            .get(&(lemma_key(word), category))
            .cloned()
            .unwrap_or_default())
    }

    fn sense(&self, id: &str) -> Result<Arc<Sense>> {
        self.by_id
            .get(id)
            .cloned()
            .ok_or_else(|| LexiconError::SenseNotFound(id.to_string()))
    }
}

/// Atalho para [`InMemoryLexicon::demo`].
pub fn demo_lexicon() -> Result<InMemoryLexicon> {
    InMemoryLexicon::demo()
}

/// Forma canônica de um lema para indexação: sem espaços nas bordas,
/// minúsculo, espaços internos viram `_` (como em "sea_bass").
pub fn lemma_key(word: &str) -> String {
    word.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(id: &str, lemma: &str, category: Category, gloss: &str) -> Sense {
        Sense {
            id: id.to_string(),
            lemmas: vec![lemma.to_string()],
            category,
            gloss: gloss.to_string(),
            examples: vec![],
            broader: vec![],
            narrower: vec![],
        }
    }

    #[test]
    fn test_senses_keep_insertion_order_per_category() {
        let lexicon = InMemoryLexicon::from_senses(vec![
            sense("bark.n.01", "bark", Category::Noun, "tree covering"),
            sense("bark.v.01", "bark", Category::Verb, "speak sharply"),
            sense("bark.n.02", "bark", Category::Noun, "dog sound"),
        ])
        .unwrap();

        let nouns: Vec<String> = lexicon
            .senses_of("bark", Category::Noun)
            .unwrap()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(nouns, ["bark.n.01", "bark.n.02"]);
        assert_eq!(lexicon.senses_of("bark", Category::Verb).unwrap().len(), 1);
        assert!(lexicon.senses_of("bark", Category::Adverb).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_word_is_empty_not_error() {
        let lexicon = InMemoryLexicon::new();
        assert!(lexicon.senses_of("zzznotaword", Category::Noun).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon =
            InMemoryLexicon::from_senses(vec![sense("bass.n.02", "sea_bass", Category::Noun, "fish")])
                .unwrap();
        assert_eq!(lexicon.senses_of("  Sea Bass ", Category::Noun).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_lemma_indexed_once() {
        let mut bark = sense("bark.n.01", "bark", Category::Noun, "tree covering");
        bark.lemmas = vec!["bark".to_string(), "Bark".to_string(), " bark ".to_string()];
        let lexicon = InMemoryLexicon::from_senses(vec![
            bark,
            sense("bark.n.02", "bark", Category::Noun, "dog sound"),
        ])
        .unwrap();

        let ids: Vec<String> = lexicon
            .senses_of("bark", Category::Noun)
            .unwrap()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids, ["bark.n.01", "bark.n.02"]);
    }

    #[test]
    fn test_duplicate_sense_rejected() {
        let result = InMemoryLexicon::from_senses(vec![
            sense("bank.n.01", "bank", Category::Noun, "a"),
            sense("bank.n.01", "bank", Category::Noun, "b"),
        ]);
        assert!(matches!(result, Err(LexiconError::DuplicateSense(id)) if id == "bank.n.01"));
    }

    #[test]
    fn test_dangling_relation_rejected() {
        let mut s = sense("bank.n.01", "bank", Category::Noun, "sloping land");
        s.broader.push("slope.n.01".to_string());
        let result = InMemoryLexicon::from_senses(vec![s]);
        assert!(matches!(result, Err(LexiconError::DanglingRelation { to, .. }) if to == "slope.n.01"));
    }

    #[test]
    fn test_related_resolves_in_order() {
        let mut bark = sense("bark.v.02", "bark", Category::Verb, "cry of a dog");
        bark.narrower = vec!["yap.v.01".to_string(), "bay.v.01".to_string()];
        let lexicon = InMemoryLexicon::from_senses(vec![
            bark.clone(),
            sense("bay.v.01", "bay", Category::Verb, "utter in deep prolonged tones"),
            sense("yap.v.01", "yap", Category::Verb, "bark in a high-pitched tone"),
        ])
        .unwrap();

        let related = lexicon.related(&bark, Relation::Narrower).unwrap();
        let ids: Vec<&str> = related.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["yap.v.01", "bay.v.01"]);
        assert!(lexicon.related(&bark, Relation::Broader).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = InMemoryLexicon::from_json_str("{ not json");
        assert!(matches!(result, Err(LexiconError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = InMemoryLexicon::from_path("/nonexistent/lexicon.json");
        assert!(matches!(result, Err(LexiconError::Io(_))));
    }

    #[test]
    fn test_demo_lexicon_loads() {
        let lexicon = demo_lexicon().unwrap();
        assert_eq!(lexicon.language(), Some("en"));
        assert!(lexicon.len() > 20);
        assert!(!lexicon.senses_of("bark", Category::Verb).unwrap().is_empty());
    }
}
