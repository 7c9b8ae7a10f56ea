//! Gender list loader.

use std::path::Path;

use feudal_core::Gender;

use crate::loaders::{LoadResult, read_file};

pub struct GenderLoader;

impl GenderLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Gender>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Gender>> {
        let mut genders: Vec<Gender> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gender RON: {}", e))?;

        for gender in &mut genders {
            if gender.image.is_empty() {
                gender.image = format!("genders/{}.png", gender.id);
            }
        }

        tracing::debug!(count = genders.len(), "parsed genders");
        Ok(genders)
    }
}
