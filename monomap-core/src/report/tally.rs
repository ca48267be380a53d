//! Insertion-ordered counters

use indexmap::IndexMap;
use serde::Serialize;

use crate::plan::PRIORITY_BUCKETS;

/// Counts keyed by label, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: IndexMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tally with the given keys present at zero
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counts: keys.into_iter().map(|k| (k.into(), 0)).collect(),
        }
    }

    /// Priority tally: the four buckets always present, others appended
    pub fn priorities() -> Self {
        Self::with_keys(PRIORITY_BUCKETS)
    }

    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    /// Count for `key`, zero when never seen
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut tally = Tally::new();
        for key in ["rewrite", "copy", "rewrite", "archive", "copy", "rewrite"] {
            tally.increment(key);
        }

        let entries: Vec<(&str, usize)> = tally.iter().collect();
        assert_eq!(entries, vec![("rewrite", 3), ("copy", 2), ("archive", 1)]);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn test_priority_buckets_start_at_zero() {
        let tally = Tally::priorities();
        let entries: Vec<(&str, usize)> = tally.iter().collect();
        assert_eq!(
            entries,
            vec![("high", 0), ("medium", 0), ("low", 0), ("archive", 0)]
        );
        assert!(!tally.is_empty());
    }

    #[test]
    fn test_non_standard_priority_appended() {
        let mut tally = Tally::priorities();
        tally.increment("urgent");
        tally.increment("low");
        tally.increment("someday");
        tally.increment("urgent");

        let keys: Vec<&str> = tally.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["high", "medium", "low", "archive", "urgent", "someday"]
        );
        assert_eq!(tally.get("urgent"), 2);
        assert_eq!(tally.get("low"), 1);
        assert_eq!(tally.get("high"), 0);
        assert_eq!(tally.get("missing"), 0);
        assert_eq!(tally.len(), 6);
    }
}
