//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! MDX bodies are author-controlled but often contain text pasted from other
//! terminals. Raw ANSI escape sequences embedded in a body could clear the
//! screen, move the cursor or restyle the terminal, so the note view passes
//! the body through [`strip_ansi_codes`] before handing it to a widget.

/// Strips ANSI escape codes from a string
///
/// Removes ANSI CSI (Control Sequence Introducer) escape codes that could
/// affect terminal display, plus other control characters like bell (\x07)
/// and backspace (\x08). Tab, newline and carriage return are preserved.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ ... (letter)
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}
