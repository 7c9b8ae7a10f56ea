//! Build the catalog and report data problems.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use crate::config::XtaskConfig;

/// Build the catalog and report data problems
#[derive(Parser)]
pub struct Lint {
    /// Catalog data directory (defaults to FEUDAL_DATA_DIR, then embedded data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print every incompatible species/class pair
    #[arg(long)]
    pairs: bool,

    /// Fail when any incompatible pair exists
    #[arg(long)]
    deny_incompatible: bool,
}

impl Lint {
    pub fn execute(self) -> Result<()> {
        let config = XtaskConfig::resolve(self.data_dir);
        let catalog = config.load_catalog()?;
        let graph = catalog.advancement();

        println!("{}", style("=== Catalog ===").bold().green());
        println!("  Species:     {}", catalog.species().len());
        println!("  Classes:     {}", catalog.classes().len());
        println!("  Beginners:   {}", graph.roots().count());
        println!("  Paid edges:  {}", graph.paid_edges().count());
        println!("  Free edges:  {}", graph.free_edges().count());
        println!("  Genders:     {}", catalog.genders().len());
        println!(
            "  Caps policy: {:?}{}",
            catalog.config().caps_policy,
            if config.strict_caps { " (forced)" } else { "" }
        );
        println!();

        let pairs = catalog.incompatible_pairs();
        if pairs.is_empty() {
            println!("{}", style("No incompatible species/class pairs").green());
            return Ok(());
        }

        let mut per_species: BTreeMap<&str, usize> = BTreeMap::new();
        for pair in pairs {
            *per_species.entry(pair.species.as_str()).or_default() += 1;
        }

        println!(
            "{} {} incompatible species/class pairs",
            style("warning:").bold().yellow(),
            pairs.len()
        );
        for (species, count) in &per_species {
            println!("  {species:<12} {count}");
        }

        if self.pairs {
            println!();
            for pair in pairs {
                println!(
                    "  {} / {}: {} floor {} > ceiling {}",
                    pair.species,
                    pair.class,
                    pair.stat.label(),
                    pair.floor,
                    pair.ceiling
                );
            }
        }

        if self.deny_incompatible {
            bail!("{} incompatible species/class pairs", pairs.len());
        }
        Ok(())
    }
}
