//! Terminal output utilities.
//!
//! Builds the highlighted view of the source text. The view is returned as a
//! value; printing it is up to the caller.

use crate::processing::{Segment, SegmentKind};
use colored::Colorize;

/// Decide colouring for everything built with `colored` from here on.
///
/// `colored` otherwise looks at stdout, which is often redirected while the
/// highlighted view goes to a terminal on stderr.
pub fn set_color(color: bool) {
    colored::control::set_override(color);
}

/// Render `text` with matched tokens in green and rejected candidates in red.
///
/// With `color` off the text comes back unchanged. With it on, the escape codes
/// follow [`set_color`].
pub fn highlight(text: &str, segments: &[Segment], color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() * 2);
    for segment in segments {
        let slice = &text[segment.span.range()];
        match segment.kind {
            SegmentKind::Plain => out.push_str(slice),
            SegmentKind::Matched => out.push_str(&slice.green().bold().to_string()),
            SegmentKind::Rejected => out.push_str(&slice.red().to_string()),
        }
    }
    out
}

/// Legend line printed under the highlighted view.
pub fn legend(color: bool) -> String {
    if color {
        format!("{} {}", "address".green().bold(), "rejected".red())
    } else {
        String::new()
    }
}
