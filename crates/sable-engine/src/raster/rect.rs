use crate::coords::Rect;
use crate::paint::Color;
use crate::surface::Surface;

/// Paints a solid axis-aligned rectangle (buffer coordinates).
///
/// Edges round to the nearest pixel boundary; the covered range is half-open
/// on both axes, so abutting rects share no pixels. The rect is clipped
/// against the surface up front, so off-surface area costs nothing.
pub fn fill(surface: &mut Surface, rect: Rect, color: Color) {
    let r = rect.normalized();
    if r.is_empty() || !r.origin.is_finite() || !r.size.is_finite() {
        return;
    }
    let Some(r) = r.intersect(surface.bounds()) else {
        return;
    };
    let x0 = r.min().x.round() as i64;
    let x1 = r.max().x.round() as i64;
    let y0 = r.min().y.round() as i64;
    let y1 = r.max().y.round() as i64;
    for y in y0..y1 {
        surface.fill_span(y, x0, x1, color);
    }
}

/// Paints a one-pixel rectangle outline.
pub fn stroke(surface: &mut Surface, rect: Rect, color: Color) {
    let r = rect.normalized();
    if r.is_empty() || !r.origin.is_finite() || !r.size.is_finite() {
        return;
    }
    let x0 = r.min().x.round() as i64;
    let x1 = r.max().x.round() as i64 - 1;
    let y0 = r.min().y.round() as i64;
    let y1 = r.max().y.round() as i64 - 1;

    surface.fill_span(y0, x0, x1 + 1, color);
    if y1 > y0 {
        surface.fill_span(y1, x0, x1 + 1, color);
    }
    for y in (y0 + 1)..y1 {
        surface.put_pixel(x0, y, color);
        if x1 > x0 {
            surface.put_pixel(x1, y, color);
        }
    }
}
