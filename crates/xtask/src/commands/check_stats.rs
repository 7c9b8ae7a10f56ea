//! Check a stat vector against a species/class pair.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use feudal_core::{Stat, StatBounds};

use super::{print_rejection, reject};
use crate::config::XtaskConfig;

/// Check a stat vector against a species/class pair
#[derive(Parser)]
pub struct CheckStats {
    /// Species id (e.g., elf)
    #[arg(value_name = "SPECIES")]
    species: String,

    /// Class id (e.g., mage)
    #[arg(value_name = "CLASS")]
    class: String,

    /// Stat overrides on top of the species starting stats (e.g., endurance=6)
    #[arg(short, long = "set", value_name = "STAT=VALUE", value_parser = parse_assignment)]
    overrides: Vec<(Stat, u8)>,

    /// Catalog data directory (defaults to FEUDAL_DATA_DIR, then embedded data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl CheckStats {
    pub fn execute(self) -> Result<()> {
        let catalog = XtaskConfig::resolve(self.data_dir).load_catalog()?;
        let validator = catalog.validator();

        let species = catalog.species().get(&self.species)?;
        let mut stats = species.resolve_base_stats();
        for (stat, value) in self.overrides {
            stats.set(stat, value);
        }

        let bounds = validator.effective_bounds(&self.species, &self.class)?;
        println!(
            "{} {} / {}",
            style("Build:").bold().cyan(),
            species.name,
            catalog.classes().get(&self.class)?.name
        );
        for (stat, value) in stats.iter() {
            let StatBounds { floor, ceiling } = bounds[stat.index()];
            let line = format!("  {:<16} {value}  [{floor}..={ceiling}]", stat.label());
            if floor > ceiling || !(floor..=ceiling).contains(&value) {
                println!("{}", style(line).red());
            } else {
                println!("{line}");
            }
        }
        println!();

        let bounds = validator.check_stat_bounds(&self.species, &self.class, &stats);
        let requirements = validator.check_class_requirements(&self.class, &stats);
        match (bounds, requirements) {
            (Ok(()), Ok(())) => {
                println!("{}", style("OK").bold().green());
                Ok(())
            }
            (Err(bounds_err), requirements) => {
                let err = reject(&bounds_err);
                if let Err(requirements_err) = requirements {
                    print_rejection(&requirements_err);
                }
                Err(err)
            }
            (Ok(()), Err(requirements_err)) => Err(reject(&requirements_err)),
        }
    }
}

fn parse_assignment(raw: &str) -> Result<(Stat, u8), String> {
    let (stat, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected STAT=VALUE, got '{raw}'"))?;
    let stat: Stat = stat
        .trim()
        .parse()
        .map_err(|_| format!("unknown stat '{}'", stat.trim()))?;
    let value: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid value '{}'", value.trim()))?;
    Ok((stat, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stock_data_dir;

    #[test]
    fn parses_stat_assignments() {
        assert_eq!(parse_assignment("endurance=6"), Ok((Stat::Endurance, 6)));
        assert_eq!(parse_assignment(" Will = 3 "), Ok((Stat::Will, 3)));
        assert!(parse_assignment("endurance").is_err());
        assert!(parse_assignment("luck=3").is_err());
        assert!(parse_assignment("will=high").is_err());
    }

    #[test]
    fn out_of_bounds_stats_fail_the_command() {
        let check = CheckStats {
            species: "elf".into(),
            class: "mage".into(),
            overrides: vec![(Stat::Endurance, 6)],
            data_dir: Some(stock_data_dir()),
        };
        let err = check.execute().unwrap_err();
        assert!(err.to_string().starts_with("check failed: VALIDATION_"));
    }
}
