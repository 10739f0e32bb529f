//! YAML front matter parsing for note files.
//!
//! Content files carry a `---`-fenced front matter block followed by the MDX
//! body. The fields are a small fixed set (title, date, description, tags,
//! draft), so the block is parsed line by line instead of pulling in a full
//! YAML implementation. Tags accept both inline (`[a, b]`) and block
//! (`- a`) list syntax.

use crate::models::NoteMetadata;

/// Split a note file into front matter and body.
///
/// The opening fence must be the first line of the file and the closing
/// fence must sit on its own line. Returns `None` when no complete front
/// matter block is found.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    if !rest.starts_with('\n') && !rest.starts_with("\r\n") {
        return None;
    }

    let mut from = 0;
    while let Some(found) = rest[from..].find("\n---") {
        let close = from + found;
        let after_fence = &rest[close + 4..];
        let (fence_rest, body) = match after_fence.find('\n') {
            Some(nl) => (&after_fence[..nl], &after_fence[nl + 1..]),
            None => (after_fence, ""),
        };
        // Reject fences like `----` or `--- text` that belong to the body
        if fence_rest.trim().is_empty() {
            return Some((rest[..close].trim(), body));
        }
        from = close + 1;
    }

    None
}

/// Parse a front matter block into [`NoteMetadata`].
///
/// Unknown keys are ignored; missing keys fall back to their defaults.
/// Validation (required title, parseable date) is the caller's concern.
pub fn parse_front_matter(yaml: &str) -> NoteMetadata {
    let mut meta = NoteMetadata::default();
    let lines: Vec<&str> = yaml.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "title" => meta.title = unquote(value),
            "date" => meta.date = unquote(value),
            "description" => {
                let text = unquote(value);
                meta.description = (!text.is_empty()).then_some(text);
            }
            "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
            "tags" => {
                if value.starts_with('[') {
                    meta.tags = parse_inline_list(value);
                } else if value.is_empty() {
                    // Block list: consume the following `- item` lines
                    while i < lines.len() {
                        let Some(item) = lines[i].trim().strip_prefix('-') else {
                            break;
                        };
                        let tag = unquote(item.trim());
                        if !tag.is_empty() {
                            meta.tags.push(tag);
                        }
                        i += 1;
                    }
                }
            }
            _ => {}
        }
    }

    meta
}

/// Remove surrounding quotes from a scalar value.
fn unquote(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Parse an inline YAML list like `[foo, bar, "baz qux"]`.
fn parse_inline_list(s: &str) -> Vec<String> {
    let s = s.trim();
    let inner = if s.starts_with('[') && s.ends_with(']') { &s[1..s.len() - 1] } else { s };

    inner.split(',').map(|item| unquote(item.trim())).filter(|item| !item.is_empty()).collect()
}
