use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Occurrence count per value for a single test case
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<T> {
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash + Copy> FrequencyTable<T> {
    pub fn from_values(values: &[T]) -> Self {
        let mut counts = HashMap::with_capacity(values.len());
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Stops at the first value seen at least twice
    pub fn has_repeat(&self) -> bool {
        #[expect(clippy::iter_over_hash_type)]
        for &count in self.counts.values() {
            if count >= 2 {
                return true;
            }
        }
        false
    }
}

/// Count every value, then scan the counts
pub fn has_duplicates_frequency<T>(data: &[T]) -> bool
where
    T: Eq + Hash + Copy,
{
    FrequencyTable::from_values(data).has_repeat()
}

/// Returns on the first failed insert
pub fn has_duplicates_hashset<T>(data: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(data.len());
    for item in data {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Sort a copy and compare neighbours, the input is left untouched
pub fn has_duplicates_sort_copy<T>(data: &[T]) -> bool
where
    T: Ord + Clone,
{
    let mut v = data.to_vec();
    has_duplicates_sort_in_place(&mut v)
}

/// In-place variant of [`has_duplicates_sort_copy`], reorders `v`
pub fn has_duplicates_sort_in_place<T>(v: &mut [T]) -> bool
where
    T: Ord,
{
    v.sort_unstable();
    v.windows(2).any(|w| w[0] == w[1])
}

pub fn has_duplicates_btree<T>(data: &[T]) -> bool
where
    T: Ord,
{
    let mut seen = BTreeSet::new();
    data.iter().any(|item| !seen.insert(item))
}

/// Interchangeable duplicate detection strategies, all of them give the same answer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    #[default]
    Frequency,
    HashSet,
    Sort,
    BTree,
}

impl Strategy {
    pub fn check<T>(self, values: &[T]) -> bool
    where
        T: Ord + Hash + Copy,
    {
        match self {
            Self::Frequency => has_duplicates_frequency(values),
            Self::HashSet => has_duplicates_hashset(values),
            Self::Sort => has_duplicates_sort_copy(values),
            Self::BTree => has_duplicates_btree(values),
        }
    }
}
