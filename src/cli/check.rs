//! `check` command: validate the manifest and report what `build` would write.

use super::common::{load_sitemap, log_summary};
use crate::cli::Cli;
use crate::log;
use crate::sitemap::{Rendered, Sitemap};
use anyhow::Result;

pub fn check_sitemap(cli: &Cli) -> Result<()> {
    let sitemap = load_sitemap(cli)?;
    let rendered = sitemap.render()?;
    report(&sitemap, &rendered);
    Ok(())
}

fn report(sitemap: &Sitemap, rendered: &Rendered) {
    let dir = sitemap.options().public_path();
    for file in rendered.all() {
        log!("check"; "{} ({} links, {} bytes)", dir.join(&file.name).display(), file.links, file.bytes.len());
    }

    let namespaces = sitemap.namespaces().required();
    if !namespaces.is_empty() {
        let names: Vec<_> = namespaces.iter().map(ToString::to_string).collect();
        log!("check"; "extensions: {}", names.join(", "));
    }
    log_summary(sitemap, rendered.files.len(), rendered.is_split());
}
