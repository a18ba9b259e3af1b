use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

/// Paints `text` with the top-left of the laid-out run at `origin`
/// (buffer coordinates).
///
/// Glyph coverage multiplies into `color`'s alpha, so antialiased edges
/// blend over whatever the surface already holds.
pub fn draw(
    surface: &mut Surface,
    font: &fontdue::Font,
    origin: Vec2,
    text: &str,
    size: f32,
    color: Color,
) {
    use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

    if text.is_empty() || !origin.is_finite() || !(size > 0.0) {
        return;
    }

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, size, 0));

    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (_, coverage) = font.rasterize_config(glyph.key);
        let gx = (origin.x + glyph.x).round() as i64;
        let gy = (origin.y + glyph.y).round() as i64;

        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let cov = coverage[row * glyph.width + col];
                if cov == 0 {
                    continue;
                }
                let a = ((color.a() as u16 * cov as u16 + 127) / 255) as u8;
                surface.put_pixel(
                    gx + col as i64,
                    gy + row as i64,
                    Color::from_rgba(color.r(), color.g(), color.b(), a),
                );
            }
        }
    }
}
