//! `shelf check` command implementation.

use clap::Args;

use super::ResolveArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

impl CheckArgs {
    /// Resolve the sidebar and report its shape without writing anything.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let resolved = self.resolve.resolve(&output)?;
        let stats = resolved.tree.stats();

        output.title(&resolved.config.site.title);
        output.stats(&stats);
        output.success("Sidebar is valid");
        Ok(())
    }
}
