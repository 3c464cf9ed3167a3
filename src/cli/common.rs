//! Common utilities shared across CLI commands.

use crate::cli::{BuildArgs, Cli};
use crate::config::{Manifest, OptionsSection, find_config_file};
use crate::sitemap::Sitemap;
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Locate and load the manifest, apply CLI overrides and build the document.
pub fn load_sitemap(cli: &Cli) -> Result<Sitemap> {
    let Some(path) = find_config_file(&cli.config) else {
        bail!(
            "Manifest '{}' not found in the current directory or any parent",
            cli.config.display()
        );
    };
    debug!("config"; "using {}", path.display());

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    load_from(&path, cli.build_args(), &cwd)
}

pub(crate) fn load_from(path: &Path, args: &BuildArgs, cwd: &Path) -> Result<Sitemap> {
    let mut manifest = Manifest::from_path(path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;
    apply_overrides(&mut manifest.options, args, cwd);

    let sitemap = manifest.into_sitemap()?;
    debug!("config"; "{} urls, namespaces: {:?}", sitemap.len(), sitemap.namespaces().required());
    Ok(sitemap)
}

/// CLI flags win over `[options]`. A relative `--output` is taken from `cwd`.
pub fn apply_overrides(section: &mut OptionsSection, args: &BuildArgs, cwd: &Path) {
    if let Some(output) = &args.output {
        section.public_path = Some(cwd.join(output));
    }
    if let Some(host) = &args.host {
        section.default_host = Some(host.clone());
    }
    if let Some(filename) = &args.filename {
        section.filename = Some(filename.clone());
    }
    if let Some(pretty) = args.pretty {
        section.pretty = pretty;
    }
    if let Some(compress) = args.compress {
        section.compress = compress;
    }
    if let Some(max) = args.max_links {
        section.max_links = Some(max);
    }
}

/// Report the split layout of a rendered document.
pub fn log_summary(sitemap: &Sitemap, files: usize, split: bool) {
    let options = sitemap.options();
    if split {
        log!(
            "sitemap";
            "{} urls split into {} files (max {} per file) + index {}",
            sitemap.len(),
            files,
            options.max_links(),
            options.filename()
        );
    } else {
        log!("sitemap"; "{} urls in {}", sitemap.len(), options.filename());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_win() {
        let mut section = OptionsSection::default();
        section.pretty = true;
        section.max_links = Some(10);

        let args = BuildArgs {
            output: Some("out".into()),
            host: Some("https://example.org".into()),
            pretty: Some(false),
            max_links: Some(5),
            ..BuildArgs::default()
        };
        apply_overrides(&mut section, &args, Path::new("/work"));

        assert!(!section.pretty);
        assert!(!section.compress);
        assert_eq!(section.max_links, Some(5));
        assert_eq!(section.public_path, Some("/work/out".into()));
        assert_eq!(section.default_host.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_no_overrides_keeps_manifest() {
        let mut section = OptionsSection::default();
        section.filename = Some("site".into());
        apply_overrides(&mut section, &BuildArgs::default(), Path::new("/work"));

        assert_eq!(section.filename.as_deref(), Some("site"));
        assert!(section.public_path.is_none());
    }

    #[test]
    fn test_load_from_applies_host_to_locs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sitemap.toml");
        fs::write(&path, "[[url]]\nloc = \"/a/\"\n").unwrap();

        let args = BuildArgs {
            host: Some("https://example.org/".into()),
            ..BuildArgs::default()
        };
        let sitemap = load_from(&path, &args, tmp.path()).unwrap();

        assert_eq!(sitemap.urls()[0].loc(), "https://example.org/a/");
        assert_eq!(sitemap.options().public_path(), tmp.path());
    }
}
