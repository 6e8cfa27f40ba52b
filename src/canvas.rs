//! Drawable primitives positioned by widget renderers.

use {
    crate::{
        text::{TextAlign, TextStyle},
        theme::TextMeasure,
    },
    reclutch::display as gfx,
};

/// A single line of drawable text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub color: gfx::Color,
    pub alignment: TextAlign,
    pub style: TextStyle,
    pub text_size: f32,
    position: gfx::Point,
    size: gfx::Size,
    hidden: bool,
}

impl Text {
    pub fn new(text: impl Into<String>, color: gfx::Color, text_size: f32) -> Self {
        Text {
            text: text.into(),
            color,
            alignment: Default::default(),
            style: Default::default(),
            text_size,
            position: gfx::Point::new(0.0, 0.0),
            size: gfx::Size::new(0.0, 0.0),
            hidden: false,
        }
    }

    /// Smallest bounds that fit the text.
    #[inline]
    pub fn min_size<M: TextMeasure + ?Sized>(&self, measure: &M) -> gfx::Size {
        measure.measure(&self.text, self.text_size, self.style)
    }

    #[inline]
    pub fn resize(&mut self, size: gfx::Size) {
        self.size = size;
    }

    /// Moves the text relative to its widget's origin.
    #[inline]
    pub fn move_to(&mut self, position: gfx::Point) {
        self.position = position;
    }

    #[inline]
    pub fn size(&self) -> gfx::Size {
        self.size
    }

    #[inline]
    pub fn position(&self) -> gfx::Point {
        self.position
    }

    #[inline]
    pub fn show(&mut self) {
        self.hidden = false;
    }

    #[inline]
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    #[inline]
    pub fn visible(&self) -> bool {
        !self.hidden
    }

    /// Bounds the text occupies, relative to its widget's origin.
    #[inline]
    pub fn bounds(&self) -> gfx::Rect {
        gfx::Rect::new(self.position, self.size)
    }
}
