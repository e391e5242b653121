//! # Corpus de Avaliação com Sentidos Anotados
//!
//! Pequeno corpus em inglês, no espírito do SemCor: cada frase traz uma
//! palavra-alvo ambígua e, quando conhecido, o sentido correto (gold) no
//! inventário de demonstração.
//!
//! ## Palavras Cobertas
//! - **bark**: casca de árvore, latido, barco, latir
//! - **bank**: margem de rio, banco financeiro, inclinar (avião)
//! - **bass**: tom grave, peixe, cantor baixo
//! - **plant**: fábrica, planta, plantar
//! - **mouse**: roedor, mouse de computador

/// Uma frase anotada com a palavra-alvo e o sentido esperado.
pub struct AnnotatedSentence {
    /// O texto completo da frase.
    pub text: &'static str,
    /// Domínio temático (utilizado para análises por área).
    pub domain: &'static str,
    /// Palavra a desambiguar.
    pub target: &'static str,
    /// Id do sentido correto, quando anotado.
    pub gold: Option<&'static str>,
}

/// Retorna o corpus completo
pub fn get_corpus() -> Vec<AnnotatedSentence> {
    vec![
        // ===== ANIMAIS =====
        AnnotatedSentence {
            text: "The dog started to bark loudly at the mailman",
            domain: "animais",
            target: "bark",
            gold: Some("bark.v.02"),
        },
        AnnotatedSentence {
            text: "The mouse ran across the kitchen floor to hide from the cat",
            domain: "animais",
            target: "mouse",
            gold: Some("mouse.n.01"),
        },

        // ===== NATUREZA =====
        AnnotatedSentence {
            text: "The bark of the old oak tree was rough and covered in moss",
            domain: "natureza",
            target: "bark",
            gold: Some("bark.n.01"),
        },
        AnnotatedSentence {
            text: "They pulled the canoe up on the bank of the river",
            domain: "natureza",
            target: "bank",
            gold: Some("bank.n.01"),
        },
        AnnotatedSentence {
            text: "She decided to plant flowers in the garden this spring",
            domain: "natureza",
            target: "plant",
            gold: Some("plant.v.01"),
        },

        // ===== ECONOMIA =====
        AnnotatedSentence {
            text: "He cashed a check and deposited the money at the bank downtown",
            domain: "economia",
            target: "bank",
            gold: Some("bank.n.02"),
        },
        AnnotatedSentence {
            // Alvo sem sentidos: a extração escolhe outra palavra da frase
            text: "Investors lined up outside the savings bank",
            domain: "economia",
            target: "investors",
            gold: None,
        },
        AnnotatedSentence {
            text: "Workers at the automobile plant went on strike",
            domain: "economia",
            target: "plant",
            gold: Some("plant.n.01"),
        },

        // ===== TRANSPORTE =====
        AnnotatedSentence {
            text: "The pilot had to bank the aircraft sharply to avoid the storm",
            domain: "transporte",
            target: "bank",
            gold: Some("bank.v.01"),
        },
        AnnotatedSentence {
            text: "The old sailing ship was a barque with three masts",
            domain: "transporte",
            target: "barque",
            gold: Some("bark.n.03"),
        },

        // ===== MÚSICA =====
        AnnotatedSentence {
            text: "The choir needed a singer with a deep bass voice",
            domain: "música",
            target: "bass",
            gold: Some("bass.n.03"),
        },

        // ===== CULINÁRIA =====
        AnnotatedSentence {
            text: "We grilled the sea bass caught that morning for dinner",
            domain: "culinária",
            target: "bass",
            gold: Some("bass.n.02"),
        },

        // ===== TECNOLOGIA =====
        AnnotatedSentence {
            text: "Move the mouse to place the cursor on the computer screen",
            domain: "tecnologia",
            target: "mouse",
            gold: Some("mouse.n.04"),
        },

        // ===== FORA DO INVENTÁRIO =====
        AnnotatedSentence {
            // Nenhuma palavra com sentidos: a frase é descartada na extração
            text: "The zebra grazed peacefully near the waterhole",
            domain: "animais",
            target: "zebra",
            gold: None,
        },
    ]
}

/// Textos de demonstração para a interface web: (domínio, palavra, frase)
pub fn demo_texts() -> Vec<(&'static str, &'static str, &'static str)> {
    get_corpus()
        .into_iter()
        .filter(|s| s.gold.is_some())
        .map(|s| (s.domain, s.target, s.text))
        .collect()
}
