//! Per-author candidate sampling.

use rand::Rng;

use super::types::CandidateArticle;

/// Cap an author's candidate list.
///
/// Lists at or under the cap are returned unchanged. Over the cap,
/// exactly `cap` articles are drawn uniformly without replacement;
/// selection order is not stable.
pub fn sample_candidates(
    mut candidates: Vec<CandidateArticle>,
    cap: usize,
) -> Vec<CandidateArticle> {
    if candidates.len() <= cap {
        return candidates;
    }

    let mut rng = rand::thread_rng();
    let mut selected = Vec::with_capacity(cap);
    for _ in 0..cap {
        let idx = rng.gen_range(0..candidates.len());
        selected.push(candidates.swap_remove(idx));
    }
    selected
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Utc;

    use super::*;

    fn article(id: i64) -> CandidateArticle {
        CandidateArticle {
            id,
            title: format!("Article {}", id),
            html_url: format!("https://acme.zendesk.com/hc/en-us/articles/{}", id),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_under_cap_keeps_all() {
        let selected = sample_candidates(vec![article(1), article(2)], 2);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_at_cap_keeps_all_in_order() {
        let selected = sample_candidates(vec![article(1)], 2);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, 1);
    }

    #[test]
    fn test_over_cap_selects_exactly_cap_distinct_originals() {
        // Repeat to cover different random draws.
        for _ in 0..50 {
            let pool: Vec<_> = (1..=5).map(article).collect();
            let selected = sample_candidates(pool, 2);
            assert_eq!(selected.len(), 2);

            let ids: HashSet<i64> = selected.iter().map(|a| a.id).collect();
            assert_eq!(ids.len(), 2, "no article selected twice");
            assert!(ids.iter().all(|id| (1..=5).contains(id)));
        }
    }

    #[test]
    fn test_every_candidate_can_be_drawn() {
        // With enough draws of 1-of-3, all three ids should show up.
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let pool: Vec<_> = (1..=3).map(article).collect();
            let selected = sample_candidates(pool, 1);
            seen.insert(selected[0].id);
        }
        assert_eq!(seen, (1..=3).collect::<HashSet<i64>>());
    }
}
