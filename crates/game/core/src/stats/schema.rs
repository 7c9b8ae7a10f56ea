//! Stat schema - the fixed, ordered set of character attributes.
//!
//! Every stat vector, cap string and requirement table in the system is keyed
//! against this ordering. Class caps are stored as positional pipe-delimited
//! strings, so the order of [`Stat::ALL`] must never change.

/// Number of stats in the schema.
pub const STAT_COUNT: usize = 20;

/// Value every stat starts at before species base stats are applied.
pub const DEFAULT_STAT_VALUE: u8 = 2;

/// Lowest value any stat may hold when no floor is declared.
pub const STAT_FLOOR: u8 = 1;

/// Highest value any stat may hold when no cap is declared.
pub const STAT_CEILING: u8 = 9;

/// One of the 20 fixed character attributes.
///
/// Identifiers render and parse as snake_case (`animal_handling`), matching the
/// keys used by the catalog data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    Agility,
    AnimalHandling,
    Athletics,
    Awareness,
    Crafting,
    Deception,
    Endurance,
    Entertaining,
    Fighting,
    Healing,
    Influence,
    Intelligence,
    Knowledge,
    Marksmanship,
    Persuasion,
    Stealth,
    Survival,
    Thievery,
    Will,
    Wisdom,
}

impl Stat {
    /// All stats in schema order.
    pub const ALL: [Stat; STAT_COUNT] = [
        Stat::Agility,
        Stat::AnimalHandling,
        Stat::Athletics,
        Stat::Awareness,
        Stat::Crafting,
        Stat::Deception,
        Stat::Endurance,
        Stat::Entertaining,
        Stat::Fighting,
        Stat::Healing,
        Stat::Influence,
        Stat::Intelligence,
        Stat::Knowledge,
        Stat::Marksmanship,
        Stat::Persuasion,
        Stat::Stealth,
        Stat::Survival,
        Stat::Thievery,
        Stat::Will,
        Stat::Wisdom,
    ];

    /// Position of this stat in schema order.
    ///
    /// Variants are declared in schema order, so the discriminant is the index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the stat at `index` in schema order.
    pub const fn from_index(index: usize) -> Option<Stat> {
        if index < STAT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Human-readable label with each word capitalized ("Animal Handling").
    pub fn label(self) -> String {
        self.as_ref()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Stat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Stat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StatVisitor;

        impl serde::de::Visitor<'_> for StatVisitor {
            type Value = Stat;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a snake_case stat identifier")
            }

            fn visit_str<E>(self, value: &str) -> Result<Stat, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse()
                    .map_err(|_| E::custom(format_args!("unknown stat '{value}'")))
            }
        }

        deserializer.deserialize_str(StatVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_matches_indices() {
        for (i, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
            assert_eq!(Stat::from_index(i), Some(*stat));
        }
        assert_eq!(Stat::from_index(STAT_COUNT), None);
    }

    #[test]
    fn identifiers_round_trip_as_snake_case() {
        assert_eq!(Stat::AnimalHandling.to_string(), "animal_handling");
        assert_eq!("animal_handling".parse::<Stat>(), Ok(Stat::AnimalHandling));
        assert_eq!("Wisdom".parse::<Stat>(), Ok(Stat::Wisdom));
        assert!("charisma".parse::<Stat>().is_err());
    }

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(Stat::AnimalHandling.label(), "Animal Handling");
        assert_eq!(Stat::Will.label(), "Will");
    }
}
