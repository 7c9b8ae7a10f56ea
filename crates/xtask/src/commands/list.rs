//! List catalog entries.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use feudal_core::{Catalog, DEFAULT_STAT_VALUE, Stat, format_caps};

use crate::config::XtaskConfig;

/// List catalog entries
#[derive(Parser)]
pub struct List {
    /// What to list
    #[arg(value_enum)]
    kind: ListKind,

    /// Only beginner classes (classes only)
    #[arg(long)]
    beginners: bool,

    /// Only classes with this vocation (classes only)
    #[arg(long, value_name = "VOCATION")]
    vocation: Option<String>,

    /// Catalog data directory (defaults to FEUDAL_DATA_DIR, then embedded data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ListKind {
    Species,
    Classes,
    Genders,
    Vocations,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per entry
    Summary,
    /// Full JSON output
    Json,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let catalog = XtaskConfig::resolve(self.data_dir.clone()).load_catalog()?;

        match (self.kind, self.format) {
            (ListKind::Species, OutputFormat::Summary) => print_species(&catalog),
            (ListKind::Species, OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(catalog.species().list())?)
            }
            (ListKind::Classes, format) => {
                let classes: Vec<_> = catalog
                    .classes()
                    .iter()
                    .filter(|class| !self.beginners || class.is_beginner())
                    .filter(|class| {
                        self.vocation
                            .as_deref()
                            .is_none_or(|vocation| class.vocation == vocation)
                    })
                    .collect();
                match format {
                    OutputFormat::Summary => {
                        for class in &classes {
                            let origin = match &class.prerequisite {
                                Some(parent) => format!("{parent} +{} xp", class.xp_cost),
                                None => "beginner".to_string(),
                            };
                            println!(
                                "{} {:<16} {:<16} {:<22} {}",
                                class.icon,
                                style(&class.id).bold(),
                                class.vocation,
                                origin,
                                style(format_caps(&class.stat_maximums)).dim()
                            );
                        }
                        println!();
                        println!("{} classes", classes.len());
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&classes)?),
                }
            }
            (ListKind::Genders, OutputFormat::Summary) => {
                for gender in catalog.genders().iter() {
                    println!("{} {:<14} {}", gender.icon, style(&gender.id).bold(), gender.description);
                }
            }
            (ListKind::Genders, OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(catalog.genders().list())?)
            }
            (ListKind::Vocations, OutputFormat::Summary) => {
                for (vocation, ids) in catalog.classes().vocations() {
                    println!("{} {}", style(vocation).bold().yellow(), ids.join(", "));
                }
            }
            (ListKind::Vocations, OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(&catalog.classes().vocations())?)
            }
        }

        Ok(())
    }
}

fn print_species(catalog: &Catalog) {
    for species in catalog.species().iter() {
        let pools = species.pools();
        println!(
            "{} {} {}",
            species.icon,
            style(&species.name).bold().cyan(),
            style(format!(
                "(hp {} / st {} / mp {})",
                pools.health, pools.stamina, pools.mana
            ))
            .dim()
        );

        let bonuses: Vec<String> = species
            .stat_bonuses()
            .map(|(stat, bonus)| format!("{} +{bonus}", stat.label()))
            .collect();
        if !bonuses.is_empty() {
            println!("    bonuses: {}", bonuses.join(", "));
        }

        let limits: Vec<String> = Stat::ALL
            .into_iter()
            .filter_map(|stat| {
                let floor = species.stat_minimums.get(stat);
                let cap = species.stat_maximums.get(stat);
                match (floor, cap) {
                    (None, None) => None,
                    (Some(floor), None) => Some(format!("{} >= {floor}", stat.label())),
                    (None, Some(cap)) => Some(format!("{} <= {cap}", stat.label())),
                    (Some(floor), Some(cap)) => Some(format!("{floor} <= {} <= {cap}", stat.label())),
                }
            })
            .collect();
        if !limits.is_empty() {
            println!("    limits:  {}", limits.join(", "));
        }
    }
    println!();
    println!(
        "{} species, stats start at {DEFAULT_STAT_VALUE} unless listed",
        catalog.species().len()
    );
}
