//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Join a manifest `loc` onto the default host.
///
/// Absolute URLs (anything with a scheme) are kept as-is; everything else is
/// treated as a path under `host`.
///
/// # Examples
/// ```ignore
/// join_host("https://example.com/", "/about/")       -> "https://example.com/about/"
/// join_host("https://example.com", "posts/a/")       -> "https://example.com/posts/a/"
/// join_host("https://example.com", "https://cdn/x")  -> "https://cdn/x"
/// ```
pub fn join_host(host: &str, loc: &str) -> String {
    if has_scheme(loc) {
        return loc.to_string();
    }
    format!(
        "{}/{}",
        host.trim_end_matches('/'),
        loc.trim_start_matches('/')
    )
}

fn has_scheme(loc: &str) -> bool {
    loc.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/public/posts/  ← cwd
/// /home/user/site/sitemap.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as given
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
