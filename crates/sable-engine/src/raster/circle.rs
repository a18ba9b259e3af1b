use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

/// Paints a solid disc centered at `center` (buffer coordinates).
///
/// Scanline fill: every row inside the disc becomes one clipped span, so the
/// cost is proportional to the visible area. A pixel is inside when its
/// center lies within `radius` of `center`.
pub fn fill(surface: &mut Surface, center: Vec2, radius: f32, color: Color) {
    if !center.is_finite() || !radius.is_finite() {
        return;
    }
    let radius = radius.abs();
    let r2 = radius * radius;

    // Row range clamped to the buffer so a huge radius costs only visible rows.
    let y0 = ((center.y - radius).floor() as i64).max(0);
    let y1 = ((center.y + radius).ceil() as i64).min(surface.pixel_height() as i64 - 1);
    for y in y0..=y1 {
        let dy = y as f32 + 0.5 - center.y;
        let rest = r2 - dy * dy;
        if rest < 0.0 {
            continue;
        }
        let dx = rest.sqrt();
        let x0 = (center.x - dx).round() as i64;
        let x1 = (center.x + dx).round() as i64;
        surface.fill_span(y, x0, x1, color);
    }
}

/// Paints a one-pixel circle outline centered at `center`.
///
/// Midpoint circle: walks one octant in integer arithmetic and mirrors the
/// point eight ways.
pub fn stroke(surface: &mut Surface, center: Vec2, radius: f32, color: Color) {
    if !center.is_finite() || !radius.is_finite() {
        return;
    }
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r = radius.abs().round() as i64;
    if r == 0 {
        surface.put_pixel(cx, cy, color);
        return;
    }

    // Bounding-box reject: a fully off-surface ring has nothing to plot.
    let (w, h) = (surface.pixel_width() as i64, surface.pixel_height() as i64);
    if cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h {
        return;
    }

    let mut x = r;
    let mut y = 0_i64;
    let mut err = 1 - r;
    while x >= y {
        surface.put_pixel(cx + x, cy + y, color);
        surface.put_pixel(cx + y, cy + x, color);
        surface.put_pixel(cx - y, cy + x, color);
        surface.put_pixel(cx - x, cy + y, color);
        surface.put_pixel(cx - x, cy - y, color);
        surface.put_pixel(cx - y, cy - x, color);
        surface.put_pixel(cx + y, cy - x, color);
        surface.put_pixel(cx + x, cy - y, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}
