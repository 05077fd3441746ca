//! `shelf sidebar` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::ResolveArgs;
use crate::error::CliError;
use crate::manifest::Manifest;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// File to write the manifest to (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SidebarArgs {
    /// Resolve the sidebar and write the site manifest as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let resolved = self.resolve.resolve(&output)?;

        let manifest = Manifest::new(&resolved.config.site, &resolved.tree);
        match &self.output {
            Some(path) => {
                manifest.write_to_file(path)?;
                output.success(&format!("Manifest written to {}", path.display()));
            }
            None => manifest.write_to(std::io::stdout().lock())?,
        }
        Ok(())
    }
}
