//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use clients_core::paths::ResolvedPaths;

/// Execute the paths command.
///
/// Prints every resolved location in `key = value` format.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
