//! # Shared Utility Functions
//!
//! Display helpers used by the client library and the command-line front end.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::preview;
//!
//! assert_eq!(preview("hello world", 8), "hello...");
//! assert_eq!(preview("short", 8), "short");
//! ```

/// Shorten `text` to at most `max_chars` characters, ending with `...` when cut.
///
/// Newlines are flattened to spaces so the result fits on one line.
/// Counts `char`s, so multi-byte text is never split inside a code point.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        return flat;
    }

    if max_chars <= 3 {
        return flat.chars().take(max_chars).collect();
    }

    let head: String = flat.chars().take(max_chars - 3).collect();
    format!("{}...", head.trim_end())
}
