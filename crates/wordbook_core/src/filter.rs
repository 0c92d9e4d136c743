//! Pure computation of the visible word subset.

use crate::models::{FilterCriteria, Word};

/// Apply search and type criteria to a collection, preserving input order.
///
/// An empty search term matches everything; otherwise the term must appear
/// in the `word` field as a case-insensitive substring. Callers recompute
/// this whenever the collection or criteria change; for fixed criteria the
/// result is idempotent.
pub fn visible<'a>(words: &'a [Word], criteria: &FilterCriteria) -> Vec<&'a Word> {
    let needle = if criteria.search_term.is_empty() {
        None
    } else {
        Some(criteria.search_term.to_lowercase())
    };

    words
        .iter()
        .filter(|word| match needle.as_deref() {
            Some(needle) => word.word.to_lowercase().contains(needle),
            None => true,
        })
        .filter(|word| criteria.selected_type.matches(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TypeFilter, WordType};

    fn word(id: i64, text: &str, word_type: &str) -> Word {
        Word {
            id,
            word: text.to_string(),
            word_type: WordType::new(word_type),
        }
    }

    fn sample() -> Vec<Word> {
        vec![
            word(1, "Cat", "Noun"),
            word(2, "run", "Verb"),
            word(3, "catastrophe", "Noun"),
            word(4, "Curious", "Adjective"),
        ]
    }

    fn criteria(search: &str, selected: &str) -> FilterCriteria {
        FilterCriteria {
            search_term: search.to_string(),
            selected_type: TypeFilter::from_selection(selected),
        }
    }

    #[test]
    fn no_criteria_is_the_identity() {
        let words = sample();
        let out = visible(&words, &criteria("", "All"));
        assert_eq!(out.len(), words.len());
        assert!(out.iter().zip(&words).all(|(a, b)| *a == b));
    }

    #[test]
    fn search_is_case_insensitive_and_order_preserving() {
        let words = sample();
        let out = visible(&words, &criteria("CAT", "All"));
        let ids: Vec<i64> = out.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn type_filter_keeps_only_matching_words() {
        let words = sample();
        let out = visible(&words, &criteria("", "Verb"));
        let ids: Vec<i64> = out.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn search_and_type_combine() {
        let words = sample();
        let out = visible(&words, &criteria("c", "Noun"));
        let ids: Vec<i64> = out.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn refiltering_with_same_criteria_is_idempotent() {
        let words = sample();
        let crit = criteria("cat", "Noun");
        let once: Vec<Word> = visible(&words, &crit).into_iter().cloned().collect();
        let twice: Vec<Word> = visible(&once, &crit).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_yields_empty() {
        let words = sample();
        assert!(visible(&words, &criteria("zebra", "All")).is_empty());
        assert!(visible(&words, &criteria("", "Pronoun")).is_empty());
    }
}
