/// Dense `order_rank` assignment for ordered child collections.
use std::collections::HashSet;

use crate::errors::{CmsError, CmsResult};
use crate::models::FunFactInput;

/// Clean up submitted fun facts and assign dense ranks.
///
/// Facts are trimmed and blank ones dropped. The rest are stably sorted by
/// their submitted rank, where a missing rank falls back to the fact's
/// position among the kept facts, then renumbered `1..=N`.
pub fn normalize_fun_facts(facts: Vec<FunFactInput>) -> Vec<(String, i64)> {
    let mut kept: Vec<(i64, String)> = facts
        .into_iter()
        .filter_map(|input| {
            let fact = input.fact.trim();
            if fact.is_empty() {
                None
            } else {
                Some((input.order_rank, fact.to_string()))
            }
        })
        .enumerate()
        .map(|(index, (rank, fact))| (rank.unwrap_or(index as i64 + 1), fact))
        .collect();

    kept.sort_by_key(|(rank, _)| *rank);

    kept.into_iter()
        .enumerate()
        .map(|(index, (_, fact))| (fact, index as i64 + 1))
        .collect()
}

/// Pair each id with its 1-based position. Rejects empty and repeated ids.
pub fn dense_ranks(ids: &[String]) -> CmsResult<Vec<(String, i64)>> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(CmsError::Validation("empty id in ordering".to_string()));
        }
        if !seen.insert(id.as_str()) {
            return Err(CmsError::Validation(format!("id {} listed twice", id)));
        }
    }

    Ok(ids
        .iter()
        .enumerate()
        .map(|(index, id)| (id.clone(), index as i64 + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(text: &str, rank: Option<i64>) -> FunFactInput {
        FunFactInput {
            id: None,
            fact: text.to_string(),
            order_rank: rank,
        }
    }

    #[test]
    fn test_blank_facts_dropped_and_ranks_dense() {
        let result = normalize_fun_facts(vec![
            fact("  Owns 500 vinyl records ", None),
            fact("   ", None),
            fact("Played drums", None),
        ]);
        assert_eq!(
            result,
            vec![
                ("Owns 500 vinyl records".to_string(), 1),
                ("Played drums".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_submitted_ranks_reorder() {
        let result = normalize_fun_facts(vec![
            fact("third", Some(30)),
            fact("first", Some(1)),
            fact("second", Some(7)),
        ]);
        let ranks: Vec<_> = result.iter().map(|(f, r)| (f.as_str(), *r)).collect();
        assert_eq!(ranks, vec![("first", 1), ("second", 2), ("third", 3)]);
    }

    #[test]
    fn test_blank_entries_do_not_shift_unranked_positions() {
        let result = normalize_fun_facts(vec![
            fact("   ", None),
            fact("", None),
            fact("unranked", None),
            fact("ranked second", Some(2)),
            fact("unranked tail", None),
        ]);
        let order: Vec<_> = result.iter().map(|(f, r)| (f.as_str(), *r)).collect();
        assert_eq!(
            order,
            vec![("unranked", 1), ("ranked second", 2), ("unranked tail", 3)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_fun_facts(Vec::new()).is_empty());
    }

    #[test]
    fn test_dense_ranks() {
        let ids = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let ranks = dense_ranks(&ids).unwrap();
        assert_eq!(ranks[0], ("c".to_string(), 1));
        assert_eq!(ranks[2], ("b".to_string(), 3));
    }

    #[test]
    fn test_dense_ranks_rejects_duplicates() {
        let ids = vec!["a".to_string(), "a".to_string()];
        assert!(matches!(dense_ranks(&ids), Err(CmsError::Validation(_))));
    }
}
