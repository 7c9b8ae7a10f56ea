//! Check a single class transition.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use super::reject;
use crate::config::XtaskConfig;

/// Check a single class transition
#[derive(Parser)]
pub struct CheckTransition {
    /// Current class id
    #[arg(value_name = "FROM")]
    from: String,

    /// Target class id
    #[arg(value_name = "TO")]
    to: String,

    /// Available XP
    #[arg(short, long, default_value_t = 0)]
    xp: u32,

    /// Catalog data directory (defaults to FEUDAL_DATA_DIR, then embedded data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl CheckTransition {
    pub fn execute(self) -> Result<()> {
        let catalog = XtaskConfig::resolve(self.data_dir).load_catalog()?;

        match catalog
            .validator()
            .check_transition(&self.from, &self.to, self.xp)
        {
            Ok(0) => println!(
                "{} {} -> {} is free",
                style("OK").bold().green(),
                self.from,
                self.to
            ),
            Ok(cost) => println!(
                "{} {} -> {} costs {} xp, {} left",
                style("OK").bold().green(),
                self.from,
                self.to,
                cost,
                self.xp - cost
            ),
            Err(err) => return Err(reject(&err)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stock_data_dir;

    fn check(from: &str, to: &str, xp: u32) -> CheckTransition {
        CheckTransition {
            from: from.into(),
            to: to.into(),
            xp,
            data_dir: Some(stock_data_dir()),
        }
    }

    #[test]
    fn accepted_transition_succeeds() {
        assert!(check("peasant", "farmer", 0).execute().is_ok());
        assert!(check("soldier", "warrior", 1000).execute().is_ok());
    }

    #[test]
    fn rejected_transition_fails_the_command() {
        let err = check("thief", "assassin", 9999).execute().unwrap_err();
        assert_eq!(err.to_string(), "check failed: VALIDATION_INELIGIBLE");

        let err = check("soldier", "warrior", 500).execute().unwrap_err();
        assert!(err.to_string().starts_with("check failed: "));
    }

    #[test]
    fn unknown_class_fails_the_command() {
        assert!(check("peasant", "dragon", 0).execute().is_err());
    }
}
