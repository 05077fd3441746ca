//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use shelf_config::{CliSettings, Config};
use shelf_index_fs::FsIndex;
use shelf_nav::{EmptySectionPolicy, ResolvedTree, Resolver};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use sidebar::SidebarArgs;

/// Options shared by every command that resolves the sidebar.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Path to configuration file (default: auto-discover shelf.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// What to do with auto-generated sections that find no pages: `error` or `hide` (overrides config).
    #[arg(long, value_name = "POLICY")]
    empty_sections: Option<EmptySectionPolicy>,

    /// Enable verbose output (scan and resolution logs).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration together with the sidebar resolved from it.
pub(crate) struct Resolved {
    pub config: Config,
    pub tree: ResolvedTree,
}

impl ResolveArgs {
    /// Load configuration, scan the content root and resolve the sidebar.
    pub(crate) fn resolve(&self, output: &Output) -> Result<Resolved, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            empty_sections: self.empty_sections,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.field("Config", path.display());
        }
        output.field("Source", config.docs_resolved.source_dir.display());

        let index = FsIndex::scan(
            config.docs_resolved.source_dir.clone(),
            &config.docs_resolved.exclude,
        )?;
        tracing::info!(pages = index.len(), "Scanned content root");

        let tree = Resolver::new(&index)
            .with_empty_sections(config.sidebar.empty_sections)
            .resolve(&config.sidebar.items)?;

        Ok(Resolved { config, tree })
    }
}
