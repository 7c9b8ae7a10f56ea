//! Class catalog loader.
//!
//! Classes come from two files: `classes.ron` holds presentation data, caps
//! and minimums, `advancement.ron` holds the prerequisite, free advances and
//! XP cost keyed by class id. A class missing from `advancement.ron` is a
//! beginner class.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::bail;
use feudal_core::{CapsPolicy, CharacterClass, StatTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One entry of `classes.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSpec {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub vocation: String,
    /// Positional pipe-delimited caps in stat schema order.
    pub caps: String,
    #[serde(default)]
    pub stat_minimums: StatTable,
}

/// One entry of `advancement.ron`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementSpec {
    #[serde(default)]
    pub prerequisite: Option<String>,
    #[serde(default)]
    pub free_advances: Vec<String>,
    #[serde(default)]
    pub xp_cost: u32,
}

/// Loader for class definitions from RON files.
pub struct ClassLoader;

impl ClassLoader {
    pub fn load(
        classes_path: &Path,
        advancement_path: &Path,
        policy: CapsPolicy,
    ) -> LoadResult<Vec<CharacterClass>> {
        let classes = read_file(classes_path)?;
        let advancement = read_file(advancement_path)?;
        Self::parse(&classes, &advancement, policy)
    }

    pub fn parse(
        classes: &str,
        advancement: &str,
        policy: CapsPolicy,
    ) -> LoadResult<Vec<CharacterClass>> {
        let specs: Vec<ClassSpec> = ron::from_str(classes)
            .map_err(|e| anyhow::anyhow!("Failed to parse class RON: {}", e))?;
        let advancement: BTreeMap<String, AdvancementSpec> = ron::from_str(advancement)
            .map_err(|e| anyhow::anyhow!("Failed to parse advancement RON: {}", e))?;

        let classes = Self::assemble(specs, advancement, policy)?;
        tracing::debug!(count = classes.len(), ?policy, "parsed classes");
        Ok(classes)
    }

    /// Joins class specs with their advancement entries, parsing caps once.
    pub fn assemble(
        specs: Vec<ClassSpec>,
        mut advancement: BTreeMap<String, AdvancementSpec>,
        policy: CapsPolicy,
    ) -> LoadResult<Vec<CharacterClass>> {
        let mut classes = Vec::with_capacity(specs.len());
        for spec in specs {
            let AdvancementSpec {
                prerequisite,
                free_advances,
                xp_cost,
            } = advancement.remove(&spec.id).unwrap_or_default();

            let mut class = CharacterClass::from_caps(spec.id, &spec.caps, policy)?
                .with_description(spec.description, spec.icon)
                .with_vocation(spec.vocation)
                .with_minimums(spec.stat_minimums)
                .with_free_advances(free_advances);
            class.prerequisite = prerequisite;
            class.xp_cost = xp_cost;
            classes.push(class);
        }

        if let Some(orphan) = advancement.keys().next() {
            bail!("advancement entry for unknown class '{orphan}'");
        }
        Ok(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feudal_core::{CatalogError, FALLBACK_CAP, Stat};

    const CLASSES: &str = r#"[
        (id: "peasant", caps: "3|4|4|3|3|2|4|2|2|2|2|2|2|2|2|2|4|2|3|2"),
        (
            id: "farmer",
            description: "Works the land.",
            icon: "🌾",
            vocation: "labor",
            caps: "4|5|5|4|4|2|5|2|3|3|2|3|3|3|2|2|5|2|4|3",
            stat_minimums: { "endurance": 3 },
        ),
    ]"#;

    const ADVANCEMENT: &str = r#"{
        "farmer": (prerequisite: Some("peasant"), free_advances: [], xp_cost: 0),
    }"#;

    #[test]
    fn merges_advancement_and_defaults_beginners() {
        let classes = ClassLoader::parse(CLASSES, ADVANCEMENT, CapsPolicy::Strict).unwrap();
        let peasant = &classes[0];
        assert!(peasant.is_beginner());
        assert_eq!(peasant.xp_cost, 0);
        assert!(peasant.free_advances.is_empty());

        let farmer = &classes[1];
        assert_eq!(farmer.prerequisite.as_deref(), Some("peasant"));
        assert_eq!(farmer.name, "Farmer");
        assert_eq!(farmer.vocation, "labor");
        assert_eq!(farmer.cap(Stat::Survival), 5);
        assert_eq!(farmer.floor(Stat::Endurance), 3);
    }

    #[test]
    fn strict_policy_surfaces_malformed_caps() {
        let err = ClassLoader::parse(
            r#"[(id: "odd", caps: "4|4")]"#,
            "{}",
            CapsPolicy::Strict,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::MalformedCaps { .. })
        ));

        let lenient = ClassLoader::parse(r#"[(id: "odd", caps: "4|4")]"#, "{}", CapsPolicy::Lenient)
            .unwrap();
        assert_eq!(lenient[0].cap(Stat::Wisdom), FALLBACK_CAP);
    }

    #[test]
    fn orphan_advancement_entry_fails() {
        let err = ClassLoader::parse(
            CLASSES,
            r#"{ "gladiator": (prerequisite: Some("slave"), xp_cost: 1000) }"#,
            CapsPolicy::Lenient,
        )
        .unwrap_err();
        assert!(err.to_string().contains("gladiator"));
    }
}
