//! Positional cap strings.
//!
//! Class caps are stored as 20 pipe-delimited integers in schema order, e.g.
//! `"4|5|3|7|5|5|3|4|2|7|6|7|7|2|6|3|6|3|6|7"`. The token at position `i`
//! belongs to `Stat::ALL[i]`; nothing in the string names the stat.

use super::schema::{STAT_CEILING, STAT_COUNT, STAT_FLOOR, Stat};
use super::vector::StatVector;

/// Cap substituted for a missing or unusable token under the lenient policy.
pub const FALLBACK_CAP: u8 = 5;

/// Delimiter between cap tokens.
pub const CAPS_DELIMITER: char = '|';

/// How malformed cap strings are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CapsPolicy {
    /// Missing or unusable tokens become [`FALLBACK_CAP`]. Never fails.
    #[default]
    Lenient,
    /// Any malformed token or a wrong token count is an error.
    Strict,
}

/// A cap string that could not be parsed under [`CapsPolicy::Strict`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MalformedCapsData {
    #[error("expected 20 cap tokens, found {found}")]
    TokenCount { found: usize },

    #[error("cap token '{token}' for {stat} is not an integer in 1..=9")]
    BadToken { stat: Stat, token: String },
}

/// Parses a positional cap string into a full cap vector.
///
/// A token is usable when it parses as an integer in `1..=9`. Under the
/// lenient policy every unusable or missing token resolves to
/// [`FALLBACK_CAP`] and surplus tokens are ignored.
pub fn parse_caps(caps: &str, policy: CapsPolicy) -> Result<StatVector, MalformedCapsData> {
    let tokens: Vec<&str> = caps.split(CAPS_DELIMITER).collect();

    if policy == CapsPolicy::Strict && tokens.len() != STAT_COUNT {
        return Err(MalformedCapsData::TokenCount {
            found: tokens.len(),
        });
    }

    let mut vector = StatVector::filled(FALLBACK_CAP);
    for (stat, token) in Stat::ALL.into_iter().zip(tokens) {
        match parse_token(token) {
            Some(value) => vector.set(stat, value),
            None if policy == CapsPolicy::Strict => {
                return Err(MalformedCapsData::BadToken {
                    stat,
                    token: token.to_string(),
                });
            }
            None => {}
        }
    }

    Ok(vector)
}

/// Renders a cap vector back into the positional string form.
pub fn format_caps(caps: &StatVector) -> String {
    caps.iter()
        .map(|(_, value)| value.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

fn parse_token(token: &str) -> Option<u8> {
    token
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|value| (STAT_FLOOR..=STAT_CEILING).contains(value))
}
