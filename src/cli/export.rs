//! Handler for the `export` command.

use crate::cli::output;
use crate::cli::ExportArgs;
use crate::error::Result;
use crate::port::BetStore;

/// Dump the raw ledger as pretty-printed JSON, to a file or stdout.
///
/// Derived figures are not included; they are recomputed on import.
pub fn execute(store: &dyn BetStore, args: &ExportArgs) -> Result<()> {
    let bets = store.load_all()?;
    let json = serde_json::to_string_pretty(&bets)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)?;
            output::ok(&format!(
                "Exported {} bets to {}",
                bets.len(),
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
