use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable naming the default site directory.
pub const SITE_DIR_ENV: &str = "NOTESITE_DIR";

/// Resolve the site directory: explicit flag, then `NOTESITE_DIR`, then cwd.
pub fn resolve_site_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = env::var(SITE_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    env::current_dir().context("Failed to determine current directory")
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use notesite::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/blog");
/// // Returns "~/blog" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir().map(|p| p.to_string_lossy().into_owned());
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper so tests can pin the home directory.
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
