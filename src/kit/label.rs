use {
    crate::{
        canvas,
        core::{self, Widget as _, WidgetRenderer as _},
        text::{self, TextAlign, TextStyle},
        theme::{self, flat::FlatTheme, Theme},
    },
    reclutch::display as gfx,
    std::rc::Rc,
};

/// Draws a [`Label`](Label) as one text primitive per line.
///
/// Slots left over from a longer previous text are blanked rather than dropped, so the pool only
/// ever grows.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct LabelRenderer {
    texts: Vec<canvas::Text>,
    lines: usize,

    alignment: TextAlign,
    style: TextStyle,
    color: Option<gfx::Color>,

    repaint: core::Repaint,

    #[derivative(Debug = "ignore")]
    theme: Rc<dyn Theme>,
}

impl LabelRenderer {
    fn new(theme: Rc<dyn Theme>, text: &str) -> Self {
        let mut renderer = LabelRenderer {
            texts: Vec::new(),
            lines: 0,
            alignment: Default::default(),
            style: Default::default(),
            color: None,
            repaint: Default::default(),
            theme,
        };
        renderer.update_texts(text::split_lines(text));
        renderer.refresh();
        renderer
    }

    /// Number of lines currently shown.
    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of line slots allocated, shown or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.texts.len()
    }

    /// The text primitives of the lines currently shown.
    #[inline]
    pub fn visible_texts(&self) -> &[canvas::Text] {
        &self.texts[..self.lines]
    }

    fn clear(&mut self) {
        for text in &mut self.texts {
            text.text.clear();
        }
    }

    /// Matches the line slots to `lines`, returning whether new slots had to be allocated.
    fn update_texts(&mut self, lines: Vec<String>) -> core::Relayout {
        self.lines = lines.len();
        let mut relayout = core::Relayout::No;

        for (i, line) in lines.into_iter().enumerate() {
            if i < self.texts.len() {
                self.texts[i].text = line;
            } else {
                self.texts.push(canvas::Text::new(
                    line,
                    self.theme.color(theme::colors::FOREGROUND),
                    self.theme.text_size(),
                ));
                relayout = core::Relayout::Yes;
            }
        }

        for text in &mut self.texts[self.lines..] {
            text.text.clear();
        }

        if relayout == core::Relayout::Yes {
            log::debug!("label line pool grew to {}", self.texts.len());
        }

        relayout
    }

    #[inline]
    fn empty_line_size(&self) -> gfx::Size {
        theme::empty_text_min_size(self.theme.as_ref(), self.style)
    }
}

impl core::WidgetRenderer for LabelRenderer {
    fn layout(&mut self, size: gfx::Size) {
        let padding = self.theme.padding();
        let line_height = self.empty_line_size().height;
        let line_size = gfx::Size::new((size.width - padding * 2.0).max(0.0), line_height);

        let mut y = padding;
        for text in &mut self.texts[..self.lines] {
            text.resize(line_size);
            text.move_to(gfx::Point::new(padding, y));
            y += line_height;
        }
    }

    fn min_size(&self) -> gfx::Size {
        let empty = self.empty_line_size();
        let (width, height) = self.visible_texts().iter().fold((0.0f32, 0.0f32), |(w, h), text| {
            let min = if text.text.is_empty() {
                empty
            } else {
                text.min_size(self.theme.as_ref())
            };
            (w.max(min.width), h + min.height)
        });

        let padding = self.theme.padding() * 2.0;
        gfx::Size::new(width + padding, height + padding)
    }

    fn apply_theme(&mut self) {
        let color = self
            .color
            .unwrap_or_else(|| self.theme.color(theme::colors::FOREGROUND));
        let text_size = self.theme.text_size();
        for text in &mut self.texts {
            text.color = color;
            text.text_size = text_size;
        }
    }

    fn refresh(&mut self) {
        self.apply_theme();
        for text in &mut self.texts {
            text.alignment = self.alignment;
            text.style = self.style;
        }

        self.repaint = core::Repaint::Yes;
    }

    #[inline]
    fn take_repaint(&mut self) -> core::Repaint {
        std::mem::take(&mut self.repaint)
    }

    #[inline]
    fn background_color(&self) -> gfx::Color {
        theme::transparent()
    }

    #[inline]
    fn objects(&self) -> &[canvas::Text] {
        &self.texts
    }

    #[inline]
    fn objects_mut(&mut self) -> &mut [canvas::Text] {
        &mut self.texts
    }
}

/// Padded, possibly multi-line, text.
#[derive(Debug)]
pub struct Label {
    base: core::BaseWidget,
    text: String,
    renderer: LabelRenderer,
}

impl Label {
    /// Creates a label drawn with the default [`FlatTheme`](FlatTheme).
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Label::with_theme(text, Rc::new(FlatTheme::default()))
    }

    /// Creates a label drawn with `theme`, laid out at its minimum size.
    pub fn with_theme(text: impl Into<String>, theme: Rc<dyn Theme>) -> Self {
        let text = text.into();
        let renderer = LabelRenderer::new(theme, &text);
        let mut label = Label {
            base: Default::default(),
            text,
            renderer,
        };

        let min = label.min_size();
        label.renderer.layout(min);
        label
    }

    /// Replaces the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        log::trace!("label text set to {:?}", self.text);

        self.renderer.clear();
        let relayout = self.renderer.update_texts(text::split_lines(&self.text));
        self.refresh(relayout);
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of text rows shown.
    #[inline]
    pub fn rows(&self) -> usize {
        self.renderer.lines()
    }

    /// Number of characters in `row`.
    ///
    /// # Panics
    /// If `row` is not less than [`rows`](Label::rows).
    #[inline]
    pub fn row_length(&self, row: usize) -> usize {
        self.renderer.visible_texts()[row].text.chars().count()
    }

    #[inline]
    pub fn alignment(&self) -> TextAlign {
        self.renderer.alignment
    }

    pub fn set_alignment(&mut self, alignment: TextAlign) {
        self.renderer.alignment = alignment;
        self.refresh(core::Relayout::No);
    }

    #[inline]
    pub fn text_style(&self) -> TextStyle {
        self.renderer.style
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.renderer.style = style;
        self.refresh(core::Relayout::No);
    }

    /// The color overriding the theme's text color, if any.
    #[inline]
    pub fn color(&self) -> Option<gfx::Color> {
        self.renderer.color
    }

    /// Overrides the theme's text color, or restores it with `None`.
    pub fn set_color(&mut self, color: Option<gfx::Color>) {
        self.renderer.color = color;
        self.refresh(core::Relayout::No);
    }

    /// Switches to a new theme, which may change padding and text metrics.
    pub fn set_theme(&mut self, theme: Rc<dyn Theme>) {
        self.renderer.theme = theme;
        self.refresh(core::Relayout::Yes);
    }

    fn refresh(&mut self, relayout: core::Relayout) {
        if !self.base.visible() {
            for text in self.renderer.objects_mut() {
                text.hide();
            }
        }

        self.renderer.refresh();
        if relayout == core::Relayout::Yes {
            // the size of the parent container is not invalidated, so it never shrinks to fit
            self.renderer.layout(self.base.size());
        }
    }
}

impl core::Widget for Label {
    #[inline]
    fn base(&self) -> &core::BaseWidget {
        &self.base
    }

    #[inline]
    fn base_mut(&mut self) -> &mut core::BaseWidget {
        &mut self.base
    }

    #[inline]
    fn renderer(&self) -> &dyn core::WidgetRenderer {
        &self.renderer
    }

    #[inline]
    fn renderer_mut(&mut self) -> &mut dyn core::WidgetRenderer {
        &mut self.renderer
    }
}
