//! Hit-to-context resolution.
//!
//! Places a hit's pivot token inside its sentence and splits the sentence
//! into left context, pivot form and right context.
//!
//! There are two kinds of failure and they are handled differently:
//!
//! - the hit's sentence is not in the store: [`Resolution::UnknownSentence`],
//!   which the caller drops without output
//! - the pivot cannot be located: a [`ContextRecord::Diagnostic`] row, so the
//!   problem shows up in the table itself

use crate::conllu::SentenceStore;
use crate::models::{node_token_id, ContextRecord, Hit};

pub const PIVOT_NOT_IN_JSON: &str = "Pivot not in JSON";
pub const PIVOT_ID_NOT_IN_TEXT: &str = "Pivot ID not in text";

/// Outcome of resolving one hit against one sentence store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Row(ContextRecord),
    UnknownSentence,
}

/// Resolves hits for one pivot node name.
#[derive(Debug, Clone)]
pub struct HitResolver<'a> {
    pivot: &'a str,
}

impl<'a> HitResolver<'a> {
    pub fn new(pivot: &'a str) -> Self {
        Self { pivot }
    }

    /// Resolve `hit` against `store`. A non-empty `id_prefix` is joined to
    /// the sentence id with `_`.
    pub fn resolve(&self, hit: &Hit, store: &SentenceStore, id_prefix: &str) -> Resolution {
        let Some(sent_id) = hit.sent_id.as_deref() else {
            return Resolution::UnknownSentence;
        };
        let Some(sentence) = store.get(sent_id) else {
            return Resolution::UnknownSentence;
        };

        let id = compose_id(id_prefix, sent_id);

        let Some(node) = hit.node(self.pivot) else {
            return Resolution::Row(ContextRecord::Diagnostic {
                id,
                message: PIVOT_NOT_IN_JSON,
            });
        };

        let position = node_token_id(node).and_then(|token_id| sentence.position(token_id));
        let Some(ix) = position else {
            return Resolution::Row(ContextRecord::Diagnostic {
                id,
                message: PIVOT_ID_NOT_IN_TEXT,
            });
        };

        Resolution::Row(ContextRecord::Context {
            id,
            left: sentence.join_forms(0..ix),
            pivot: sentence.tokens()[ix].form.clone(),
            right: sentence.join_forms(ix + 1..sentence.len()),
        })
    }
}

pub fn compose_id(id_prefix: &str, sent_id: &str) -> String {
    if id_prefix.is_empty() {
        sent_id.to_string()
    } else {
        format!("{}_{}", id_prefix, sent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "# sent_id = s1\n\
                        1\tLe\t_\n\
                        2\tchat\t_\n\
                        3-4\tdu\t_\n\
                        3\tde\t_\n\
                        4\tle\t_\n\
                        5\tvoisin\t_\n\n";

    fn store() -> SentenceStore {
        SentenceStore::parse_str("t.conllu", TEXT)
    }

    fn hit(json: serde_json::Value) -> Hit {
        serde_json::from_value(json).unwrap()
    }

    fn row(r: Resolution) -> ContextRecord {
        match r {
            Resolution::Row(rec) => rec,
            Resolution::UnknownSentence => panic!("expected a row"),
        }
    }

    #[test]
    fn test_splits_around_pivot() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": "2"}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", "Le", "chat", "du de le voisin"]);
    }

    #[test]
    fn test_multiword_range_is_a_pivot_like_any_other() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": "3-4"}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", "Le chat", "du", "de le voisin"]);
    }

    #[test]
    fn test_first_token_has_empty_left_context() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": "1"}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", "", "Le", "chat du de le voisin"]);
    }

    #[test]
    fn test_last_token_has_empty_right_context() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": "5"}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", "Le chat du de le", "voisin", ""]);
    }

    #[test]
    fn test_missing_pivot_name() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"V": "2"}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", PIVOT_NOT_IN_JSON]);
    }

    #[test]
    fn test_missing_matching_block() {
        let h = hit(serde_json::json!({"sent_id": "s1"}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", PIVOT_NOT_IN_JSON]);
    }

    #[test]
    fn test_pivot_id_not_in_sentence() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": "42"}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", PIVOT_ID_NOT_IN_TEXT]);
    }

    #[test]
    fn test_non_string_pivot_is_not_in_text() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": ["2"]}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", PIVOT_ID_NOT_IN_TEXT]);
    }

    #[test]
    fn test_numeric_pivot_is_not_in_text() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {"N": 2}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), ""));
        assert_eq!(rec.fields(), vec!["s1", PIVOT_ID_NOT_IN_TEXT]);
    }

    #[test]
    fn test_unknown_sentence_is_not_a_row() {
        let h = hit(serde_json::json!({"sent_id": "nope", "matching": {"nodes": {}}}));
        assert_eq!(
            HitResolver::new("N").resolve(&h, &store(), ""),
            Resolution::UnknownSentence
        );
        let no_id = hit(serde_json::json!({"matching": {"nodes": {"N": "1"}}}));
        assert_eq!(
            HitResolver::new("N").resolve(&no_id, &store(), ""),
            Resolution::UnknownSentence
        );
    }

    #[test]
    fn test_prefix_applies_to_diagnostics_too() {
        let h = hit(serde_json::json!({"sent_id": "s1", "matching": {"nodes": {}}}));
        let rec = row(HitResolver::new("N").resolve(&h, &store(), "corpA/t.conllu"));
        assert_eq!(rec.id(), "corpA/t.conllu_s1");
    }

    #[test]
    fn test_compose_id() {
        assert_eq!(compose_id("", "s1"), "s1");
        assert_eq!(compose_id("c/f", "s1"), "c/f_s1");
    }
}
