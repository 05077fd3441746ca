//! Site manifest handed to the renderer.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use shelf_config::SiteConfig;
use shelf_nav::ResolvedTree;

use crate::error::CliError;

/// Site identity plus the resolved sidebar.
///
/// `social` and `custom_css` are copied from the configuration untouched.
#[derive(Debug, Serialize)]
pub(crate) struct Manifest<'a> {
    title: &'a str,
    social: &'a BTreeMap<String, String>,
    custom_css: &'a [String],
    sidebar: &'a ResolvedTree,
}

impl<'a> Manifest<'a> {
    pub(crate) fn new(site: &'a SiteConfig, sidebar: &'a ResolvedTree) -> Self {
        Self {
            title: &site.title,
            social: &site.social,
            custom_css: &site.custom_css,
            sidebar,
        }
    }

    /// Write pretty-printed JSON followed by a newline.
    pub(crate) fn write_to(&self, mut writer: impl Write) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the manifest to a file, creating parent directories as needed.
    pub(crate) fn write_to_file(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))
    }
}
