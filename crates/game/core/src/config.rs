use crate::stats::{CapsPolicy, DEFAULT_STAT_VALUE, STAT_CEILING, STAT_COUNT, STAT_FLOOR};

/// Catalog construction settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogConfig {
    /// How class cap strings are parsed.
    pub caps_policy: CapsPolicy,
    /// Accept species/class pairs whose combined floor exceeds the combined
    /// ceiling. Such pairs are still recorded and rejected at validation.
    pub allow_incompatible_pairs: bool,
}

impl CatalogConfig {
    // ===== schema constants =====
    pub const STAT_COUNT: usize = STAT_COUNT;
    pub const DEFAULT_STAT_VALUE: u8 = DEFAULT_STAT_VALUE;
    pub const STAT_FLOOR: u8 = STAT_FLOOR;
    pub const STAT_CEILING: u8 = STAT_CEILING;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ALLOW_INCOMPATIBLE_PAIRS: bool = true;

    pub fn new() -> Self {
        Self {
            caps_policy: CapsPolicy::default(),
            allow_incompatible_pairs: Self::DEFAULT_ALLOW_INCOMPATIBLE_PAIRS,
        }
    }

    /// Strict caps parsing and no incompatible pairs.
    pub fn strict() -> Self {
        Self {
            caps_policy: CapsPolicy::Strict,
            allow_incompatible_pairs: false,
        }
    }

    #[must_use]
    pub fn with_caps_policy(mut self, caps_policy: CapsPolicy) -> Self {
        self.caps_policy = caps_policy;
        self
    }

    #[must_use]
    pub fn with_incompatible_pairs(mut self, allow: bool) -> Self {
        self.allow_incompatible_pairs = allow;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient_and_tolerant() {
        let config = CatalogConfig::default();
        assert_eq!(config.caps_policy, CapsPolicy::Lenient);
        assert!(config.allow_incompatible_pairs);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"caps_policy":"strict"}"#).unwrap();
        assert_eq!(config.caps_policy, CapsPolicy::Strict);
        assert!(config.allow_incompatible_pairs);
    }
}
