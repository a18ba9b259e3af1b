use crate::coords::Vec2;
use crate::error::SketchError;

/// Opaque handle to a font loaded into a [`FontStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the fonts a sketch has loaded.
///
/// Fonts are immutable after loading and independent of the surface, so they
/// survive `background` re-declarations.
pub struct FontStore {
    fonts: Vec<fontdue::Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load(&mut self, bytes: &[u8]) -> Result<FontId, SketchError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| SketchError::FontLoad(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Bounding box of `text` laid out at `size` px, as `(width, height)`.
    ///
    /// Unknown ids measure as zero-width with a nominal line height, so
    /// layout code degrades instead of panicking.
    #[must_use]
    pub fn measure(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        let w = glyphs.iter().map(|g| g.x + g.width as f32).fold(0.0_f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_garbage_bytes_fails() {
        let mut store = FontStore::new();
        assert!(matches!(store.load(&[0, 1, 2, 3]), Err(SketchError::FontLoad(_))));
    }

    #[test]
    fn unknown_id_measures_zero_width() {
        let store = FontStore::new();
        let m = store.measure("hello", FontId(7), 14.0);
        assert_eq!(m.x, 0.0);
        assert!(m.y > 0.0);
    }
}
