//! Species catalog loader.

use std::path::Path;

use feudal_core::Species;

use crate::loaders::{LoadResult, read_file};

/// Loader for species definitions from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load species from a RON file holding a list of entries.
    pub fn load(path: &Path) -> LoadResult<Vec<Species>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Species>> {
        let mut species: Vec<Species> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species RON: {}", e))?;

        for entry in &mut species {
            if entry.image.is_empty() {
                entry.image = format!("species/{}.png", entry.id);
            }
        }

        tracing::debug!(count = species.len(), "parsed species");
        Ok(species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feudal_core::Stat;

    #[test]
    fn parses_flat_pools_and_sparse_tables() {
        let species = SpeciesLoader::parse(
            r#"[
                (
                    id: "orc",
                    name: "Orc",
                    stat_maximums: { "intelligence": 6 },
                    base_stats: { "fighting": 4 },
                    health: 140,
                    stamina: 130,
                    mana: 20,
                ),
            ]"#,
        )
        .unwrap();

        let orc = &species[0];
        assert_eq!(orc.image, "species/orc.png");
        assert_eq!(orc.pools().health, 140);
        assert_eq!(orc.resolve_caps()[Stat::Intelligence], 6);
        assert_eq!(orc.resolve_base_stats()[Stat::Fighting], 4);
        assert!(orc.stat_minimums.is_empty());
    }

    #[test]
    fn unknown_stat_is_rejected() {
        let result = SpeciesLoader::parse(
            r#"[(id: "orc", name: "Orc", base_stats: { "luck": 4 }, health: 1, stamina: 1, mana: 1)]"#,
        );
        assert!(result.is_err());
    }
}
