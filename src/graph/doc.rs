//! Doc-comment normalization.
//!
//! The lexer hands the parser a raw comment token: a run of lines, each one
//! `#`-led after optional indentation. This module turns that raw text into
//! the clean documentation string stored on graph entities.

/// Normalizes a raw comment token into documentation text.
///
/// Each line has its leading whitespace and `#` stripped. The content's own
/// indentation is measured once, from the first content-bearing line, and
/// the same amount is removed from every following line so that relative
/// indentation survives. Whitespace-only lines become paragraph breaks.
pub fn normalize_comment(raw: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut indent: Option<usize> = None;

    for line in raw.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            out.push("");
            continue;
        }

        let content = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if content.trim().is_empty() {
            out.push("");
            continue;
        }

        let lead = content.len() - content.trim_start().len();
        let cut = match indent {
            Some(n) => n.min(lead),
            None => {
                indent = Some(lead);
                lead
            }
        };
        out.push(&content[cut..]);
    }

    out.join("\n")
}
