//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_stats;
mod check_transition;
mod lint;
mod list;
mod transitions;

pub use check_stats::CheckStats;
pub use check_transition::CheckTransition;
pub use lint::Lint;
pub use list::List;
pub use transitions::Transitions;

use anyhow::anyhow;
use console::style;
use feudal_core::{ErrorSeverity, FeudalError};

/// Prints a rejected check with its stable code and returns the error that
/// makes the command exit non-zero.
pub(crate) fn reject<E: FeudalError>(err: &E) -> anyhow::Error {
    print_rejection(err);
    anyhow!("check failed: {}", err.error_code())
}

fn print_rejection<E: FeudalError>(err: &E) {
    let label = match err.severity() {
        ErrorSeverity::Validation => style("REJECTED").bold().red(),
        ErrorSeverity::Integrity | ErrorSeverity::Internal => style("DATA ERROR").bold().magenta(),
    };
    println!("{} {}", label, err);
    println!("  {} {}", style("code:").dim(), err.error_code());
}

#[cfg(test)]
pub(crate) fn stock_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}
