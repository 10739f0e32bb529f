use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Maximum size for a content file: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

// Characters percent-encoded inside a URL path segment. `/` is left alone so
// nested slugs keep their segment structure.
const SLUG_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// Builds a site URL for a content slug, percent-encoding unsafe characters
///
/// # Examples
///
/// ```
/// use notesite::encode_url;
///
/// assert_eq!(encode_url("/notes", "react-hooks"), "/notes/react-hooks");
/// assert_eq!(encode_url("/notes", "rust memo"), "/notes/rust%20memo");
/// ```
pub fn encode_url(prefix: &str, slug: &str) -> String {
    let encoded = utf8_percent_encode(slug, SLUG_ENCODE_SET);
    format!("{}/{}", prefix, encoded)
}

/// Extracts and decodes the slug from a site URL under the given prefix
///
/// Returns `None` when the URL does not live under `prefix`.
///
/// # Examples
///
/// ```
/// use notesite::utils::urls::decode_url_slug;
///
/// assert_eq!(decode_url_slug("/notes/react-hooks", "/notes"), Some("react-hooks".to_string()));
/// assert_eq!(decode_url_slug("/playground/demo", "/notes"), None);
/// ```
pub fn decode_url_slug(url: &str, prefix: &str) -> Option<String> {
    let rest = url.strip_prefix(prefix)?.strip_prefix('/')?;
    if rest.is_empty() {
        return None;
    }

    // Percent-decode the slug (avoiding double allocation)
    let decoded = percent_decode_str(rest).decode_utf8_lossy();
    Some(match decoded {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    })
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
