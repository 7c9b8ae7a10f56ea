//! Gender options. Membership only; genders carry no stat rules.

use super::registry::{CatalogEntry, EntryKind, Registry};

pub type GenderCatalog = Registry<Gender>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gender {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
}

impl Gender {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            image: format!("genders/{id}.png"),
            id,
            name: name.into(),
            icon: String::new(),
            description: String::new(),
        }
    }
}

impl CatalogEntry for Gender {
    const KIND: EntryKind = EntryKind::Gender;

    fn id(&self) -> &str {
        &self.id
    }
}
