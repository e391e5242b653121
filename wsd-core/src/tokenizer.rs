//! # Tokenizador de Palavras (UAX #29)
//!
//! Divide o texto bruto em palavras usando as regras de fronteira de palavra do
//! Unicode (UAX #29, via `unicode-segmentation`). Espaços e pontuação isolada
//! nunca viram tokens. Cada token preserva sua posição original no texto
//! (offset), o que permite destacar as palavras na interface web.
//!
//! ## Esquema de Tokenização
//!
//! - **Standard**: Palavras UAX #29, com contrações separadas no apóstrofo
//!   ("dog's" -> "dog", "s"; "don't" -> "don", "t").
//! - **Unsplit**: Palavras UAX #29 sem pós-processamento ("dog's" fica inteiro).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use wsd_core::tokenizer::{tokenize_with_mode, TokenizerMode};
//!
//! let tokens = tokenize_with_mode("The dog's bark.", TokenizerMode::Standard);
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["The", "dog", "s", "bark"]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "dog", "bark").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Estratégias de tokenização disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    /// **Padrão**: fronteiras UAX #29 e contrações separadas no apóstrofo.
    /// Aproxima o tokenizador Treebank, em que "dog's" vira "dog" + "'s".
    #[default]
    Standard,
    /// **Sem separação**: fronteiras UAX #29 puras. Palavras com apóstrofo
    /// deixam de ser alfabéticas e são descartadas pelo normalizador.
    Unsplit,
}

/// Apóstrofo reto e tipográfico
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Tokeniza um texto usando o modo padrão.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_mode(text, TokenizerMode::Standard)
}

/// Tokeniza um texto com o modo especificado.
pub fn tokenize_with_mode(text: &str, mode: TokenizerMode) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (start, word) in text.unicode_word_indices() {
        match mode {
            TokenizerMode::Unsplit => push_token(&mut tokens, word, start),
            TokenizerMode::Standard => split_clitics(&mut tokens, word, start),
        }
    }

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Separa a palavra nos apóstrofos, descartando os próprios apóstrofos.
fn split_clitics(tokens: &mut Vec<Token>, word: &str, start: usize) {
    let mut offset = 0;
    for piece in word.split(APOSTROPHES) {
        if !piece.is_empty() {
            push_token(tokens, piece, start + offset);
        }
        // O apóstrofo tem 1 byte (') ou 3 bytes (’)
        let sep_len = word[offset + piece.len()..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        offset += piece.len() + sep_len;
    }
}

fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize) {
    tokens.push(Token {
        text: text.to_string(),
        start,
        end: start + text.len(),
        index: 0, // será atribuído depois
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_drops_punctuation_and_spaces() {
        let tokens = tokenize("The dog started to bark, loudly!");
        assert_eq!(texts(&tokens), ["The", "dog", "started", "to", "bark", "loudly"]);
    }

    #[test]
    fn test_tokenize_offsets_point_into_text() {
        let text = "Sea bass, grilled.";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        let tokens = tokenize("don't touch the dog’s bone");
        assert_eq!(texts(&tokens), ["don", "t", "touch", "the", "dog", "s", "bone"]);
        let text = "don't touch the dog’s bone";
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_tokenize_unsplit_keeps_contractions() {
        let tokens = tokenize_with_mode("the dog's bone", TokenizerMode::Unsplit);
        assert_eq!(texts(&tokens), ["the", "dog's", "bone"]);
    }

    #[test]
    fn test_tokenize_indices_are_sequential() {
        let tokens = tokenize("it's a bank");
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!").is_empty());
    }
}
