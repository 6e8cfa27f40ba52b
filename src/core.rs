use {crate::canvas, reclutch::display as gfx};

/// Whether a renderer must lay its objects out again, as opposed to only redrawing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relayout {
    Yes,
    No,
}

impl Default for Relayout {
    fn default() -> Self {
        Relayout::No
    }
}

/// Whether a repaint is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Repaint {
    Yes,
    No,
}

impl Default for Repaint {
    fn default() -> Self {
        Repaint::No
    }
}

/// Materializes a widget into canvas objects.
///
/// Each widget kind provides its own renderer; a widget creates exactly one when it is constructed
/// and hands it out through [`Widget::renderer`](Widget::renderer).
pub trait WidgetRenderer {
    /// Positions and sizes the canvas objects within `size`.
    fn layout(&mut self, size: gfx::Size);

    /// Smallest size the widget can be given without clipping its content.
    fn min_size(&self) -> gfx::Size;

    /// Resolves colors from the current theme.
    fn apply_theme(&mut self);

    /// Pushes the widget's current look into its canvas objects and schedules a repaint.
    fn refresh(&mut self);

    /// Returns the pending repaint request and clears it.
    fn take_repaint(&mut self) -> Repaint;

    fn background_color(&self) -> gfx::Color;

    /// Every canvas object owned by the renderer, including inert ones.
    fn objects(&self) -> &[canvas::Text];

    fn objects_mut(&mut self) -> &mut [canvas::Text];
}

/// Geometry and visibility bookkeeping shared by all widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseWidget {
    size: gfx::Size,
    position: gfx::Point,
    hidden: bool,
}

impl Default for BaseWidget {
    fn default() -> Self {
        BaseWidget {
            size: gfx::Size::new(0.0, 0.0),
            position: gfx::Point::new(0.0, 0.0),
            hidden: false,
        }
    }
}

impl BaseWidget {
    #[inline]
    pub fn size(&self) -> gfx::Size {
        self.size
    }

    #[inline]
    pub fn position(&self) -> gfx::Point {
        self.position
    }

    #[inline]
    pub fn visible(&self) -> bool {
        !self.hidden
    }
}

/// Core widget trait.
///
/// The provided methods implement the behaviour common to every widget in terms of its renderer.
/// They should not be used on a widget whose geometry is managed by a layout.
pub trait Widget {
    fn base(&self) -> &BaseWidget;
    fn base_mut(&mut self) -> &mut BaseWidget;

    fn renderer(&self) -> &dyn WidgetRenderer;
    fn renderer_mut(&mut self) -> &mut dyn WidgetRenderer;

    /// Sets a new size and lays the renderer out within it.
    fn resize(&mut self, size: gfx::Size) {
        self.base_mut().size = size;
        self.renderer_mut().layout(size);
    }

    /// Moves the widget relative to its parent.
    #[inline]
    fn move_to(&mut self, position: gfx::Point) {
        self.base_mut().position = position;
    }

    #[inline]
    fn min_size(&self) -> gfx::Size {
        self.renderer().min_size()
    }

    fn show(&mut self) {
        self.base_mut().hidden = false;
        for obj in self.renderer_mut().objects_mut() {
            obj.show();
        }
    }

    fn hide(&mut self) {
        self.base_mut().hidden = true;
        for obj in self.renderer_mut().objects_mut() {
            obj.hide();
        }
    }

    #[inline]
    fn size(&self) -> gfx::Size {
        self.base().size()
    }

    #[inline]
    fn position(&self) -> gfx::Point {
        self.base().position()
    }

    #[inline]
    fn visible(&self) -> bool {
        self.base().visible()
    }
}
