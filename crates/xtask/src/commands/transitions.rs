//! Show where a class can go next and how it was reached.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use feudal_core::EdgeKind;

use crate::config::XtaskConfig;

/// Show where a class can go next and how it was reached
#[derive(Parser)]
pub struct Transitions {
    /// Class id
    #[arg(value_name = "CLASS")]
    class: String,

    /// Catalog data directory (defaults to FEUDAL_DATA_DIR, then embedded data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Transitions {
    pub fn execute(self) -> Result<()> {
        let catalog = XtaskConfig::resolve(self.data_dir).load_catalog()?;
        let graph = catalog.advancement();

        let chain = graph.prerequisite_chain(&self.class)?;
        let path: Vec<&str> = chain.iter().rev().copied().collect();
        println!("{} {}", style("Path:").bold().cyan(), path.join(" -> "));
        println!();

        let transitions = graph.transitions_from(&self.class)?;
        if transitions.is_empty() {
            println!("{}", style("No transitions").dim());
            return Ok(());
        }

        println!("{}", style("Next:").bold().yellow());
        for transition in transitions {
            let class = catalog.classes().get(transition.target)?;
            let cost = match transition.kind {
                EdgeKind::Free => style("free".to_string()).green(),
                EdgeKind::Paid { cost } => style(format!("{cost} xp")).yellow(),
            };
            println!("  {} {:<16} {}", class.icon, class.id, cost);
        }
        Ok(())
    }
}
