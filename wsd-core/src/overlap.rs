//! # Pontuação por Sobreposição
//!
//! A pontuação de um sentido é o número de palavras **distintas** que a sua
//! assinatura normalizada compartilha com o contexto normalizado:
//!
//! $$ \text{score} = | \text{norm}(\text{assinatura}) \cap \text{contexto} | $$
//!
//! Semântica de conjunto: repetir uma palavra, de qualquer lado, não aumenta o
//! score, e a ordem das palavras é irrelevante.

use crate::normalizer::{ContextBag, Normalizer};

/// Score de sobreposição entre uma assinatura e o contexto. Sempre >= 0.
pub fn score(signature: &str, context: &ContextBag, normalizer: &Normalizer) -> usize {
    normalizer.normalize(signature).intersection(context).count()
}

/// Palavras compartilhadas, em ordem alfabética (pistas para a UI).
pub fn shared_words(signature: &str, context: &ContextBag, normalizer: &Normalizer) -> Vec<String> {
    normalizer
        .normalize(signature)
        .intersection(context)
        .cloned()
        .collect()
}
