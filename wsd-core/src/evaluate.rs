//! # Avaliação sobre Corpus Anotado
//!
//! Roda o [`SimpleLesk`] sobre uma amostra de frases e produz um relatório
//! por frase e agregado.
//!
//! ## Etapas
//!
//! 1. **Extração** ([`extract_phrases`]): escolhe a palavra-alvo de cada frase.
//!    Se o alvo anotado não tem sentidos na base, usa a primeira palavra de
//!    conteúdo da frase que tenha; sem nenhuma, a frase é descartada.
//! 2. **Desambiguação** ([`evaluate`]): as frases rodam em paralelo com
//!    `rayon`, compartilhando os caches do desambiguador. O relatório mantém
//!    a ordem de entrada.
//!
//! ## Métricas
//!
//! - **Taxa de sucesso**: frases em que algum sentido foi escolhido.
//! - **Acurácia**: acertos entre as frases com sentido gold anotado.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::AnnotatedSentence;
use crate::error::Result;
use crate::lesk::SimpleLesk;
use crate::sense::truncate_chars;
use crate::tokenizer::tokenize_with_mode;

/// Quantidade padrão de frases amostradas.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

const PHRASE_PREVIEW_CHARS: usize = 100;
const GLOSS_PREVIEW_CHARS: usize = 60;

/// Uma frase pronta para avaliação.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePhrase {
    pub text: String,
    pub target: String,
    /// Só presente quando o alvo é o anotado no corpus.
    pub gold: Option<String>,
}

/// Resultado de uma frase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseOutcome {
    pub index: usize,
    pub phrase_preview: String,
    pub target: String,
    /// Número de sentidos da palavra em todas as categorias.
    pub senses_available: usize,
    pub selected: Option<String>,
    pub gloss_preview: Option<String>,
    pub gold: Option<String>,
    /// `None` quando não há gold para comparar.
    pub correct: Option<bool>,
}

impl PhraseOutcome {
    /// Linha de status no formato do relatório.
    pub fn status(&self) -> String {
        match (&self.selected, &self.gloss_preview) {
            (Some(id), Some(gloss)) => format!("{}: {}", id, gloss),
            (Some(id), None) => id.clone(),
            _ if self.senses_available == 0 => "no senses found".to_string(),
            _ => "no sense selected".to_string(),
        }
    }
}

/// Relatório agregado de uma rodada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total: usize,
    /// Frases em que um sentido foi escolhido.
    pub successful: usize,
    /// Frases com sentido gold.
    pub with_gold: usize,
    pub correct: usize,
    pub outcomes: Vec<PhraseOutcome>,
    pub processing_ms: u64,
}

impl EvaluationReport {
    /// Percentual de frases com sentido escolhido (0 quando vazio).
    pub fn success_rate(&self) -> f64 {
        percentage(self.successful, self.total)
    }

    /// Percentual de acertos entre as frases com gold (0 quando não há gold).
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.with_gold)
    }

    pub fn summary(&self) -> String {
        format!(
            "{}/{} frases com sentido ({:.1}%), acurácia {}/{} ({:.1}%)",
            self.successful,
            self.total,
            self.success_rate(),
            self.correct,
            self.with_gold,
            self.accuracy()
        )
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Seleciona até `limit` frases do corpus, na ordem do corpus.
///
/// Erros da base lexical interrompem a extração.
pub fn extract_phrases(
    corpus: &[AnnotatedSentence],
    lesk: &SimpleLesk,
    limit: usize,
) -> Result<Vec<SamplePhrase>> {
    let mut phrases = Vec::with_capacity(limit.min(corpus.len()));

    for sentence in corpus {
        if phrases.len() >= limit {
            break;
        }

        if !lesk.all_senses(sentence.target)?.is_empty() {
            phrases.push(SamplePhrase {
                text: sentence.text.to_string(),
                target: sentence.target.to_string(),
                gold: sentence.gold.map(str::to_string),
            });
            continue;
        }

        match first_word_with_senses(sentence.text, lesk)? {
            Some(word) => {
                tracing::debug!(
                    "alvo '{}' sem sentidos, usando '{}'",
                    sentence.target,
                    word
                );
                phrases.push(SamplePhrase {
                    text: sentence.text.to_string(),
                    target: word,
                    gold: None,
                });
            }
            None => tracing::warn!("frase sem palavras com sentidos: '{}'", sentence.text),
        }
    }

    Ok(phrases)
}

/// Primeira palavra de conteúdo de `text`, na ordem do texto, com sentidos.
fn first_word_with_senses(text: &str, lesk: &SimpleLesk) -> Result<Option<String>> {
    let normalizer = lesk.normalizer();
    let lower = text.to_lowercase();
    for token in tokenize_with_mode(&lower, normalizer.mode()) {
        let word = token.text;
        if !word.chars().all(char::is_alphabetic) || normalizer.is_stop_word(&word) {
            continue;
        }
        if !lesk.all_senses(&word)?.is_empty() {
            return Ok(Some(word));
        }
    }
    Ok(None)
}

/// Desambigua cada frase e agrega os resultados.
pub fn evaluate(lesk: &SimpleLesk, phrases: &[SamplePhrase]) -> Result<EvaluationReport> {
    let start = Instant::now();

    let outcomes = phrases
        .par_iter()
        .enumerate()
        .map(|(index, phrase)| evaluate_phrase(lesk, index, phrase))
        .collect::<Result<Vec<_>>>()?;

    let successful = outcomes.iter().filter(|o| o.selected.is_some()).count();
    let with_gold = outcomes.iter().filter(|o| o.correct.is_some()).count();
    let correct = outcomes.iter().filter(|o| o.correct == Some(true)).count();

    let report = EvaluationReport {
        total: outcomes.len(),
        successful,
        with_gold,
        correct,
        outcomes,
        processing_ms: start.elapsed().as_millis() as u64,
    };
    tracing::info!("avaliação concluída: {}", report.summary());
    Ok(report)
}

fn evaluate_phrase(lesk: &SimpleLesk, index: usize, phrase: &SamplePhrase) -> Result<PhraseOutcome> {
    let senses_available = lesk.all_senses(&phrase.target)?.len();
    let sense = lesk.disambiguate(&phrase.target, &phrase.text)?;
    if sense.is_none() {
        tracing::warn!("nenhum sentido escolhido para '{}'", phrase.target);
    }

    let selected = sense.as_ref().map(|s| s.id.clone());
    let correct = phrase
        .gold
        .as_ref()
        .map(|gold| selected.as_deref() == Some(gold.as_str()));

    Ok(PhraseOutcome {
        index,
        phrase_preview: truncate_chars(&phrase.text, PHRASE_PREVIEW_CHARS),
        target: phrase.target.clone(),
        senses_available,
        gloss_preview: sense.map(|s| s.short_gloss(GLOSS_PREVIEW_CHARS)),
        selected,
        gold: phrase.gold.clone(),
        correct,
    })
}
