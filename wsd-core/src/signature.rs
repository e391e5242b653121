//! # Assinatura de um Sentido
//!
//! A assinatura é o "perfil textual" de um sentido, comparado com o contexto
//! da frase. Na versão estendida ([`SignatureScope::Extended`]) ela junta:
//!
//! 1. a gloss do próprio sentido;
//! 2. todos os seus exemplos de uso;
//! 3. a gloss de cada hiperônimo (broader), na ordem da base;
//! 4. a gloss de cada hipônimo (narrower), na ordem da base.
//!
//! A expansão de um nível pelas relações aumenta o vocabulário disponível para
//! sobreposição, já que glosses costumam ser curtas.
//!
//! ## Exemplo
//!
//! Para `bark.v.02` ("to make the sharp explosive cry of a dog"):
//!
//! ```text
//! to make the sharp explosive cry of a dog      <- gloss
//! the dog barked loudly all night               <- exemplo
//! utter a characteristic sound                  <- broader (cry.v.04)
//! bark in a high-pitched tone                   <- narrower (yap.v.01)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::LexicalDatabase;
use crate::sense::{Relation, Sense};

/// Quanto do sentido entra na assinatura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureScope {
    /// Apenas a gloss (Lesk simplificado clássico).
    GlossOnly,
    /// Gloss + exemplos de uso.
    GlossAndExamples,
    /// Gloss + exemplos + glosses dos vizinhos broader/narrower.
    #[default]
    Extended,
}

/// Constrói a assinatura estendida de `sense`.
pub fn build_signature(sense: &Sense, db: &dyn LexicalDatabase) -> Result<String> {
    build_signature_with_scope(sense, db, SignatureScope::Extended)
}

/// Constrói a assinatura de `sense` no escopo pedido.
///
/// As partes são separadas por um único espaço; partes vazias são puladas,
/// então um sentido sem texto algum gera `""`.
pub fn build_signature_with_scope(
    sense: &Sense,
    db: &dyn LexicalDatabase,
    scope: SignatureScope,
) -> Result<String> {
    let mut signature = String::new();
    push_part(&mut signature, &sense.gloss);

    if scope == SignatureScope::GlossOnly {
        return Ok(signature);
    }
    for example in &sense.examples {
        push_part(&mut signature, example);
    }

    if scope == SignatureScope::Extended {
        for relation in Relation::ALL {
            for related in db.related(sense, relation)? {
                push_part(&mut signature, &related.gloss);
            }
        }
    }

    Ok(signature)
}

fn push_part(signature: &mut String, part: &str) {
    if part.is_empty() {
        return;
    }
    if !signature.is_empty() {
        signature.push(' ');
    }
    signature.push_str(part);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;
    use crate::lexicon::InMemoryLexicon;
    use crate::sense::Category;

    fn blank(id: &str) -> Sense {
        Sense {
            id: id.to_string(),
            lemmas: vec!["blank".to_string()],
            category: Category::Noun,
            gloss: String::new(),
            examples: vec![],
            broader: vec![],
            narrower: vec![],
        }
    }

    #[test]
    fn test_extended_signature_order() {
        let lexicon = InMemoryLexicon::demo().unwrap();
        let sense = lexicon.sense("bark.v.02").unwrap();
        let signature = build_signature(&sense, &lexicon).unwrap();
        assert_eq!(
            signature,
            "to make the sharp explosive cry of a dog \
             the dog barked loudly all night \
             utter a characteristic sound \
             bark in a high-pitched tone"
        );
    }

    #[test]
    fn test_broader_comes_before_narrower() {
        let lexicon = InMemoryLexicon::demo().unwrap();
        let sense = lexicon.sense("bark.n.01").unwrap();
        let signature = build_signature(&sense, &lexicon).unwrap();
        let broader = signature.find("natural object").unwrap();
        let narrower = signature.find("tissue").unwrap();
        assert!(broader < narrower);
    }

    #[test]
    fn test_scopes() {
        let lexicon = InMemoryLexicon::demo().unwrap();
        let sense = lexicon.sense("bark.v.02").unwrap();
        assert_eq!(
            build_signature_with_scope(&sense, &lexicon, SignatureScope::GlossOnly).unwrap(),
            "to make the sharp explosive cry of a dog"
        );
        assert_eq!(
            build_signature_with_scope(&sense, &lexicon, SignatureScope::GlossAndExamples).unwrap(),
            "to make the sharp explosive cry of a dog the dog barked loudly all night"
        );
    }

    #[test]
    fn test_empty_sense_yields_empty_signature() {
        let mut empty = blank("blank.n.01");
        empty.examples = vec![String::new()];
        empty.broader = vec!["blank.n.02".to_string()];
        empty.narrower = vec!["blank.n.03".to_string()];
        let lexicon = InMemoryLexicon::from_senses(vec![
            empty.clone(),
            blank("blank.n.02"),
            blank("blank.n.03"),
        ])
        .unwrap();
        assert_eq!(build_signature(&empty, &lexicon).unwrap(), "");
    }

    #[test]
    fn test_missing_related_sense_is_an_error() {
        let mut orphan = blank("orphan.n.01");
        orphan.broader = vec!["ghost.n.01".to_string()];
        let lexicon = InMemoryLexicon::new();
        let result = build_signature(&orphan, &lexicon);
        assert!(matches!(result, Err(LexiconError::SenseNotFound(id)) if id == "ghost.n.01"));
    }
}
