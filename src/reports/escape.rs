//! Escaping utilities for Markdown report output.
//!
//! Brand names, audiences, competitor names and foundation fields are free
//! text typed by the respondent. They may contain:
//! - pipes and newlines that break table rows
//! - link or emphasis syntax that changes the rendered document
//! - raw HTML, which many Markdown renderers pass through
//!
//! Every user-supplied string is escaped before it is embedded. Fixed copy
//! from the insight tables is trusted and written as-is.
//!
//! Terminal output has its own hazard: control characters such as ESC can
//! rewrite the screen, so [`sanitize_terminal`] drops them.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// # Examples
///
/// ```
/// use brand_alignment::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use brand_alignment::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in Markdown list items.
///
/// Newlines become `; ` so a multi-line answer stays one item.
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape an `Option<&str>` for Markdown tables, returning "-" for None.
pub fn escape_md_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "-".to_string(), escape_markdown_table)
}

/// Strip control characters from text bound for a terminal.
///
/// Line breaks and tabs become a single space; every other control
/// character (ESC, BEL, C1 codes) is dropped.
///
/// # Examples
///
/// ```
/// use brand_alignment::reports::escape::sanitize_terminal;
///
/// assert_eq!(sanitize_terminal("Acme\x1b[31m Co"), "Acme[31m Co");
/// assert_eq!(sanitize_terminal("two\nlines"), "two lines");
/// ```
pub fn sanitize_terminal(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
