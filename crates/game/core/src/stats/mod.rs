//! Stat system.
//!
//! ```text
//! [ Schema ]        fixed order of the 20 stats, default / floor / ceiling
//!      ↓
//! [ StatVector ]    one value per stat (characters, resolved caps)
//! [ StatTable ]     sparse stat -> value (floors, species caps, base stats)
//!      ↓
//! [ Caps ]          positional pipe strings parsed into a StatVector
//! ```

pub mod caps;
pub mod schema;
pub mod table;
pub mod vector;

pub use caps::{CAPS_DELIMITER, CapsPolicy, FALLBACK_CAP, MalformedCapsData, format_caps, parse_caps};
pub use schema::{DEFAULT_STAT_VALUE, STAT_CEILING, STAT_COUNT, STAT_FLOOR, Stat};
pub use table::StatTable;
pub use vector::{MissingStat, StatVector};
