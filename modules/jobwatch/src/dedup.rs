use std::collections::HashSet;

use crate::posting::Posting;

/// Candidates split by membership in the seen set.
#[derive(Debug, Default)]
pub struct Dedup {
    /// Postings never recorded before, in extraction order.
    pub fresh: Vec<Posting>,
    pub already_seen: Vec<Posting>,
}

/// Partition candidates into fresh and already seen postings.
///
/// Order of `fresh` follows `candidates`. A repeated id within the same
/// page counts as seen after its first occurrence, so a page that lists a
/// posting twice raises one alert rather than two.
pub fn partition_new(candidates: Vec<Posting>, seen: &HashSet<String>) -> Dedup {
    let mut accepted: HashSet<String> = HashSet::new();
    let mut dedup = Dedup::default();

    for posting in candidates {
        if seen.contains(&posting.id) || !accepted.insert(posting.id.clone()) {
            dedup.already_seen.push(posting);
        } else {
            dedup.fresh.push(posting);
        }
    }

    dedup
}
