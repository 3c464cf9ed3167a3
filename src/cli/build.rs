//! `build` command: render the manifest and write sitemap files.

use super::common::{load_sitemap, log_summary};
use crate::cli::Cli;
use crate::sitemap::{Sitemap, write_rendered};
use anyhow::Result;
use std::path::PathBuf;

pub fn build_sitemap(cli: &Cli) -> Result<Vec<PathBuf>> {
    let sitemap = load_sitemap(cli)?;
    write_sitemap(&sitemap)
}

pub(crate) fn write_sitemap(sitemap: &Sitemap) -> Result<Vec<PathBuf>> {
    let rendered = sitemap.render()?;
    let paths = write_rendered(&rendered, sitemap.options().public_path())?;
    log_summary(sitemap, rendered.files.len(), rendered.is_split());
    Ok(paths)
}
