use {
    super::*,
    reclutch::display as gfx,
    serde::{Deserialize, Serialize},
    std::path::Path,
};

/// Tunable constants of [`FlatTheme`](FlatTheme).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub foreground: [f32; 4],
    pub background: [f32; 4],
    pub padding: f32,
    pub text_size: f32,
    /// Glyph advance as a fraction of the text size.
    pub advance: f32,
    /// Glyph advance for monospace text as a fraction of the text size.
    pub monospace_advance: f32,
    /// Line height as a fraction of the text size.
    pub line_height: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            foreground: [1.0, 1.0, 1.0, 1.0],
            background: [0.25, 0.25, 0.25, 1.0],
            padding: 4.0,
            text_size: 14.0,
            advance: 0.5,
            monospace_advance: 0.625,
            line_height: 1.25,
        }
    }
}

impl ThemeConfig {
    /// Parses a config from RON. Missing fields take their default values.
    pub fn from_ron(s: &str) -> Result<Self, ThemeError> {
        ron::from_str(s).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Reads and parses a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading theme config from {}", path.display());
        Self::from_ron(&contents)
    }
}

/// Flat single-color theme with fixed-advance text metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatTheme {
    config: ThemeConfig,
}

impl FlatTheme {
    #[inline]
    pub fn new(config: ThemeConfig) -> Self {
        FlatTheme { config }
    }

    #[inline]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

impl TextMeasure for FlatTheme {
    fn measure(&self, text: &str, size: f32, style: TextStyle) -> gfx::Size {
        let advance = if style.monospace {
            self.config.monospace_advance
        } else {
            self.config.advance
        };
        let glyphs = text.chars().count() as f32;
        gfx::Size::new(glyphs * advance * size, self.config.line_height * size)
    }
}

impl Theme for FlatTheme {
    fn color(&self, c: &'static str) -> gfx::Color {
        let [r, g, b, a] = match c {
            colors::FOREGROUND => self.config.foreground,
            colors::BACKGROUND => self.config.background,
            _ => {
                log::warn!("flat theme has no color {:?}; using foreground", c);
                self.config.foreground
            }
        };
        gfx::Color::new(r, g, b, a)
    }

    #[inline]
    fn padding(&self) -> f32 {
        self.config.padding
    }

    #[inline]
    fn text_size(&self) -> f32 {
        self.config.text_size
    }
}
