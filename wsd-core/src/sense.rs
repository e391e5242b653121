//! # Sentidos e Categorias Gramaticais
//!
//! Modelo de dados de um inventário de sentidos no estilo WordNet.
//!
//! ## Categorias Gramaticais
//!
//! | Código | Categoria  | Exemplos                     |
//! |--------|------------|------------------------------|
//! | n      | Substantivo| bark (casca), bank (banco)   |
//! | v      | Verbo      | bark (latir), plant (plantar)|
//! | a      | Adjetivo   | bass (grave)                 |
//! | r      | Advérbio   | loudly                       |
//!
//! ## Relações
//!
//! Cada sentido aponta para sentidos vizinhos por duas relações fixas:
//! - **Broader** (hiperônimos): sentidos mais genéricos. Ex: "casca" → "cobertura".
//! - **Narrower** (hipônimos): sentidos mais específicos. Ex: "latir" → "ganir".

use serde::{Deserialize, Serialize};

/// Categoria gramatical (part-of-speech) usada para filtrar os sentidos candidatos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// **Substantivo**. Ex: "the bark of the tree".
    Noun,
    /// **Verbo**. Ex: "dogs bark".
    Verb,
    /// **Adjetivo**. Ex: "a bass voice".
    Adjective,
    /// **Advérbio**. Ex: "loudly".
    Adverb,
}

impl Category {
    /// Todas as categorias, na ordem canônica do WordNet (n, v, a, r).
    pub const ALL: [Category; 4] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
    ];

    /// Categorias consultadas pela desambiguação: apenas substantivos e verbos.
    pub const DISAMBIGUATION: [Category; 2] = [Category::Noun, Category::Verb];

    /// Nome da categoria (para serialização e UI)
    pub fn name(&self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
        }
    }
}

/// As duas relações seguidas na expansão da assinatura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Hiperônimos
    Broader,
    /// Hipônimos
    Narrower,
}

impl Relation {
    /// Ordem de expansão: sempre broader antes de narrower.
    pub const ALL: [Relation; 2] = [Relation::Broader, Relation::Narrower];
}

/// Um sentido (significado) de uma palavra no inventário lexical.
///
/// O `Sense` pertence à base lexical e é compartilhado via `Arc<Sense>`; o núcleo
/// da desambiguação apenas o lê. As relações guardam identificadores, que a
/// base resolve sob demanda em [`crate::lexicon::LexicalDatabase::related`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Identificador estável (ex: "bark.v.02").
    pub id: String,
    /// Formas (lemas) que expressam este sentido.
    #[serde(default)]
    pub lemmas: Vec<String>,
    pub category: Category,
    /// Definição em estilo dicionário.
    #[serde(default)]
    pub gloss: String,
    /// Frases de uso, na ordem da base.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Ids dos hiperônimos.
    #[serde(default)]
    pub broader: Vec<String>,
    /// Ids dos hipônimos.
    #[serde(default)]
    pub narrower: Vec<String>,
}

impl Sense {
    /// Ids dos vizinhos por uma relação, na ordem nativa da base.
    pub fn related_ids(&self, relation: Relation) -> &[String] {
        match relation {
            Relation::Broader => &self.broader,
            Relation::Narrower => &self.narrower,
        }
    }

    /// Gloss truncada em `max_chars` caracteres (seguro para UTF-8), com "..." ao final quando cortada.
    pub fn short_gloss(&self, max_chars: usize) -> String {
        truncate_chars(&self.gloss, max_chars)
    }
}

/// Corta `text` em no máximo `max_chars` caracteres, acrescentando "..." se houve corte.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_pos, _)) => format!("{}...", &text[..byte_pos]),
        None => text.to_string(),
    }
}
