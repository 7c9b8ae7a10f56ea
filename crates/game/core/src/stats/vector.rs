//! Total stat vector - one value per schema stat.

use std::collections::BTreeMap;

use super::schema::{DEFAULT_STAT_VALUE, STAT_COUNT, Stat};

/// A value for every stat in the schema.
///
/// Indexed by [`Stat`], so a vector can never be missing a stat or carry an
/// extra one. When deserialized from a keyed map every stat must be present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<Stat, u8>",
        into = "BTreeMap<Stat, u8>"
    )
)]
pub struct StatVector([u8; STAT_COUNT]);

impl StatVector {
    /// Vector with every stat set to `value`.
    pub const fn filled(value: u8) -> Self {
        Self([value; STAT_COUNT])
    }

    /// Builds a vector from values listed in schema order.
    pub const fn from_array(values: [u8; STAT_COUNT]) -> Self {
        Self(values)
    }

    /// Starts at the default value and overrides the listed stats.
    pub fn with_values<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Stat, u8)>,
    {
        let mut vector = Self::default();
        for (stat, value) in pairs {
            vector.set(stat, value);
        }
        vector
    }

    pub fn get(&self, stat: Stat) -> u8 {
        self.0[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        self.0[stat.index()] = value;
    }

    /// Builder-style [`StatVector::set`].
    #[must_use]
    pub fn with(mut self, stat: Stat, value: u8) -> Self {
        self.set(stat, value);
        self
    }

    /// Iterates `(stat, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Values in schema order.
    pub const fn as_array(&self) -> &[u8; STAT_COUNT] {
        &self.0
    }

    /// Number of entries, always [`STAT_COUNT`].
    pub const fn len(&self) -> usize {
        STAT_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Sum of points above `baseline` across all stats.
    pub fn points_above(&self, baseline: &StatVector) -> u32 {
        self.iter()
            .map(|(stat, value)| u32::from(value.saturating_sub(baseline.get(stat))))
            .sum()
    }
}

impl Default for StatVector {
    /// Every stat at [`DEFAULT_STAT_VALUE`].
    fn default() -> Self {
        Self::filled(DEFAULT_STAT_VALUE)
    }
}

impl core::ops::Index<Stat> for StatVector {
    type Output = u8;

    fn index(&self, stat: Stat) -> &u8 {
        &self.0[stat.index()]
    }
}

/// A keyed map could not be turned into a [`StatVector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("stat vector is missing '{0}'")]
pub struct MissingStat(pub Stat);

impl TryFrom<BTreeMap<Stat, u8>> for StatVector {
    type Error = MissingStat;

    fn try_from(map: BTreeMap<Stat, u8>) -> Result<Self, Self::Error> {
        let mut values = [0; STAT_COUNT];
        for stat in Stat::ALL {
            values[stat.index()] = *map.get(&stat).ok_or(MissingStat(stat))?;
        }
        Ok(Self(values))
    }
}

impl From<StatVector> for BTreeMap<Stat, u8> {
    fn from(vector: StatVector) -> Self {
        vector.iter().collect()
    }
}
