use {crate::text::TextStyle, reclutch::display as gfx, thiserror::Error};

pub mod flat;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme: {0}")]
    Parse(String),
}

/// Measures the minimum bounds of a single line of text.
pub trait TextMeasure {
    fn measure(&self, text: &str, size: f32, style: TextStyle) -> gfx::Size;
}

/// Source of the look shared by widgets.
pub trait Theme: TextMeasure {
    fn color(&self, c: &'static str) -> gfx::Color;
    /// Spacing between a widget's bounds and its content, applied on every side.
    fn padding(&self) -> f32;
    fn text_size(&self) -> f32;
}

/// Minimum size of a line with no text.
///
/// Blank lines reserve the height of a glyph-bearing line so they keep their vertical space.
#[inline]
pub fn empty_text_min_size(theme: &dyn Theme, style: TextStyle) -> gfx::Size {
    theme.measure("M", theme.text_size(), style)
}

/// A fully transparent color.
#[inline]
pub fn transparent() -> gfx::Color {
    gfx::Color::new(0.0, 0.0, 0.0, 0.0)
}

pub mod colors {
    //! Standard color definitions used by `kit`.
    //! For a theme to support `kit`, it must implement all of these.

    /// Color used by text and other foreground elements.
    pub const FOREGROUND: &str = "foreground";
    /// Color used to fill general background elements.
    pub const BACKGROUND: &str = "background";
}
