//! Shared helper functions for the view layer.

/// Longest text preview shown in the swap picker before eliding
pub const PREVIEW_CHARS: usize = 50;

/// Shorten `text` to at most `max` characters, appending "..." when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Fit `text` into exactly `width` characters (cut or right-padded).
pub fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Collapse newlines so multi-line text stays on one rendered row.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
