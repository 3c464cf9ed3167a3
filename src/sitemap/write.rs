//! Publishing rendered sitemap files.

use super::render::Rendered;
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write every rendered file under `dir`, creating it and any directories
/// named in the file names.
///
/// Nothing is kept between attempts, so a failed write is recovered by
/// rendering and writing again.
pub fn write_rendered(rendered: &Rendered, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    rendered
        .all()
        .map(|file| -> Result<PathBuf> {
            let path = dir.join(&file.name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(&path, &file.bytes)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            log!("sitemap"; "{} ({} links)", file.name, file.links);
            Ok(path)
        })
        .collect()
}
