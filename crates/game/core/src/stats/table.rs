//! Partial stat mapping used for floors, caps and base stats.

use std::collections::BTreeMap;

use super::schema::Stat;
use super::vector::StatVector;

/// A sparse `stat -> value` table. Stats without an entry are unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StatTable(BTreeMap<Stat, u8>);

impl StatTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> Option<u8> {
        self.0.get(&stat).copied()
    }

    pub fn insert(&mut self, stat: Stat, value: u8) -> Option<u8> {
        self.0.insert(stat, value)
    }

    pub fn contains(&self, stat: Stat) -> bool {
        self.0.contains_key(&stat)
    }

    /// Entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        self.0.iter().map(|(&stat, &value)| (stat, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expands into a total vector, filling absent stats with `fallback`.
    pub fn resolve(&self, fallback: u8) -> StatVector {
        let mut vector = StatVector::filled(fallback);
        for (stat, value) in self.iter() {
            vector.set(stat, value);
        }
        vector
    }
}

impl FromIterator<(Stat, u8)> for StatTable {
    fn from_iter<I: IntoIterator<Item = (Stat, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(Stat, u8); N]> for StatTable {
    fn from(pairs: [(Stat, u8); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_absent_stats() {
        let table = StatTable::from([(Stat::Endurance, 7), (Stat::Athletics, 7)]);
        let vector = table.resolve(9);
        assert_eq!(vector[Stat::Endurance], 7);
        assert_eq!(vector[Stat::Athletics], 7);
        assert_eq!(vector[Stat::Wisdom], 9);
    }

    #[test]
    fn iteration_follows_schema_order() {
        let table = StatTable::from([(Stat::Wisdom, 3), (Stat::Agility, 4)]);
        let stats: Vec<_> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(stats, vec![Stat::Agility, Stat::Wisdom]);
    }
}
