// src/models/frequency.rs
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by token. Keys are unique; display order comes from
/// [`FrequencyTable::sorted_by_count`].
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, usize>,
}

pub type WordFrequencyTable = FrequencyTable<String>;
pub type CharacterFrequencyTable = FrequencyTable<char>;

/// A single row of a sorted frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry<K> {
    pub value: K,
    pub count: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Eq + Hash> Eq for FrequencyTable<K> {}

impl<K: Eq + Hash> FrequencyTable<K> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

impl<K: Eq + Hash + Ord + Clone> FrequencyTable<K> {
    /// Entries ordered by descending count, ties broken by ascending key.
    #[must_use]
    pub fn sorted_by_count(&self) -> Vec<FrequencyEntry<K>> {
        let mut entries: Vec<FrequencyEntry<K>> = self
            .counts
            .iter()
            .map(|(value, count)| FrequencyEntry {
                value: value.clone(),
                count: *count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        entries
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

impl<K: Eq + Hash + Ord + Clone + Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted_by_count())
    }
}
