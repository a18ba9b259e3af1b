use crate::coords::{Rect, Vec2};
use crate::error::SketchError;
use crate::paint::Color;
use crate::raster;
use crate::text::{FontId, FontStore};

use super::buffer::{OriginMode, Surface};

/// The drawing handle passed to sketch callbacks.
///
/// A `Canvas` starts without a surface; [`background`](Self::background)
/// establishes one, and every other operation fails with
/// [`SketchError::SurfaceNotInitialized`] until it has. Primitives paint
/// into the pixel buffer immediately — there is no retained draw list —
/// and clip silently at the surface edge.
pub struct Canvas {
    surface: Option<Surface>,
    fonts: FontStore,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            surface: None,
            fonts: FontStore::new(),
        }
    }

    // ── surface configuration ─────────────────────────────────────────────

    /// Declares the drawing surface as `width × height` pixels and paints it
    /// entirely with `color`.
    ///
    /// The first call creates the surface; later calls re-declare it —
    /// resizing if the extents changed, repainting either way — and preserve
    /// the active origin convention. Zero extents fail with
    /// [`SketchError::InvalidSurfaceSize`].
    pub fn background(&mut self, width: u32, height: u32, color: Color) -> Result<(), SketchError> {
        match &mut self.surface {
            Some(s) if s.pixel_width() == width && s.pixel_height() == height => {
                s.clear(color);
            }
            Some(s) => {
                let origin = s.origin();
                let mut next = Surface::new(width, height, color)?;
                next.set_origin(origin);
                *s = next;
            }
            None => {
                log::debug!("surface declared: {width}x{height}");
                self.surface = Some(Surface::new(width, height, color)?);
            }
        }
        Ok(())
    }

    /// Toggles the coordinate-origin convention of the active surface:
    /// centered when `enabled`, top-left otherwise. Affects every subsequent
    /// primitive call until changed again.
    pub fn center(&mut self, enabled: bool) -> Result<(), SketchError> {
        let origin = if enabled { OriginMode::Centered } else { OriginMode::TopLeft };
        self.surface_mut()?.set_origin(origin);
        Ok(())
    }

    /// The rightmost valid x coordinate under the active origin convention
    /// (the full pixel width for top-left, half of it for centered).
    pub fn width(&self) -> Result<f32, SketchError> {
        Ok(self.surface()?.extent_x())
    }

    /// The bottommost valid y coordinate under the active origin convention.
    pub fn height(&self) -> Result<f32, SketchError> {
        Ok(self.surface()?.extent_y())
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Paints a circle centered at `center` (active origin convention).
    /// `filled` selects a solid disc; otherwise a one-pixel outline.
    pub fn circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        filled: bool,
    ) -> Result<(), SketchError> {
        let s = self.surface_mut()?;
        let center = s.to_buffer(center);
        if filled {
            raster::circle::fill(s, center, radius, color);
        } else {
            raster::circle::stroke(s, center, radius, color);
        }
        Ok(())
    }

    /// Paints an axis-aligned rectangle. `filled` selects a solid fill;
    /// otherwise a one-pixel outline.
    pub fn rect(&mut self, rect: Rect, color: Color, filled: bool) -> Result<(), SketchError> {
        let s = self.surface_mut()?;
        let rect = Rect::from_origin_size(s.to_buffer(rect.origin), rect.size);
        if filled {
            raster::rect::fill(s, rect, color);
        } else {
            raster::rect::stroke(s, rect, color);
        }
        Ok(())
    }

    /// Paints a one-pixel line from `from` to `to`.
    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) -> Result<(), SketchError> {
        let s = self.surface_mut()?;
        let (from, to) = (s.to_buffer(from), s.to_buffer(to));
        raster::line::draw(s, from, to, color);
        Ok(())
    }

    /// Paints `text` with its first baseline-box corner at `origin`
    /// (top-left of the laid-out run, active origin convention).
    ///
    /// An unknown `font` id paints nothing; glyph coverage blends with
    /// `color`'s alpha.
    pub fn text(
        &mut self,
        origin: Vec2,
        text: &str,
        font: FontId,
        size: f32,
        color: Color,
    ) -> Result<(), SketchError> {
        let Self { surface, fonts } = self;
        let s = surface.as_mut().ok_or(SketchError::SurfaceNotInitialized)?;
        let origin = s.to_buffer(origin);
        match fonts.get(font) {
            Some(f) => raster::text::draw(s, f, origin, text, size, color),
            None => log::warn!("text: unknown font id {font:?}"),
        }
        Ok(())
    }

    // ── fonts ─────────────────────────────────────────────────────────────

    /// Parses and stores a TrueType/OpenType font from raw bytes. The
    /// returned id identifies the font in [`text`](Self::text) calls.
    ///
    /// Fonts are independent of the surface, so this works before
    /// `background` — sketches typically load fonts at the top of setup.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, SketchError> {
        self.fonts.load(bytes)
    }

    /// Measures `text` at `size`. Zero-width for unknown ids.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure(text, font, size)
    }

    // ── surface access ────────────────────────────────────────────────────

    /// The active surface, for presenters and read-side inspection.
    pub fn surface(&self) -> Result<&Surface, SketchError> {
        self.surface.as_ref().ok_or(SketchError::SurfaceNotInitialized)
    }

    fn surface_mut(&mut self) -> Result<&mut Surface, SketchError> {
        self.surface.as_mut().ok_or(SketchError::SurfaceNotInitialized)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
