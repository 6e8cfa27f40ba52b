//! Text attributes shared by widgets and line primitives.

/// Horizontal placement of text within its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextAlign {
    Leading,
    Center,
    Trailing,
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::Leading
    }
}

/// Font variant flags applied to a run of text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
}

impl TextStyle {
    #[inline]
    pub fn bold() -> Self {
        TextStyle {
            bold: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn italic() -> Self {
        TextStyle {
            italic: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn monospace() -> Self {
        TextStyle {
            monospace: true,
            ..Default::default()
        }
    }
}

/// Splits text into the lines it displays as.
///
/// Terminators are not included in the returned lines; `"\r\n"` counts as a single terminator,
/// and a carriage return ending multi-line text is dropped.
/// Text ending in a newline yields a trailing empty line, and empty text yields a single empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    if !text.contains('\n') {
        return vec![text.to_owned()];
    }

    let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
    // `lines` stops at the final terminator
    if text.ends_with('\n') {
        lines.push(String::new());
    } else if let Some(last) = lines.last_mut() {
        // an unterminated final line drops its carriage return like a terminated one
        if last.ends_with('\r') {
            last.pop();
        }
    }

    lines
}
