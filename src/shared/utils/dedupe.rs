use crate::modules::provider::AnimeRecord;
use std::collections::HashSet;

/// Remove entries sharing an id, keeping the first occurrence.
///
/// Overlapping paginated queries can return the same entry more than once;
/// every list a section or browse path assembles goes through here so the
/// "no two entries share an id" invariant holds in one place.
pub fn dedupe_by_id<T, F>(items: Vec<T>, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> i64,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(id_of(item)))
        .collect()
}

pub fn dedupe(items: Vec<AnimeRecord>) -> Vec<AnimeRecord> {
    dedupe_by_id(items, |record| record.mal_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mal_id: i64) -> AnimeRecord {
        AnimeRecord {
            mal_id,
            payload: serde_json::Map::new(),
        }
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let input = vec![record(1), record(2), record(2), record(3), record(1)];
        let out = dedupe(input);
        let ids: Vec<i64> = out.iter().map(|r| r.mal_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn idempotent_on_deduplicated_input() {
        let once = dedupe(vec![record(5), record(6), record(5)]);
        let ids_once: Vec<i64> = once.iter().map(|r| r.mal_id).collect();
        let twice = dedupe(once);
        let ids_twice: Vec<i64> = twice.iter().map(|r| r.mal_id).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn generic_key_extraction() {
        let out = dedupe_by_id(vec![(1, "a"), (1, "b"), (2, "c")], |pair| pair.0);
        assert_eq!(out, vec![(1, "a"), (2, "c")]);
    }
}
