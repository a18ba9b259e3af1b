use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

/// Paints a one-pixel line from `from` to `to` (buffer coordinates).
///
/// Bresenham over rounded endpoints. Every plotted pixel goes through the
/// surface's clipped write, so off-surface segments cost iterations but
/// paint nothing.
pub fn draw(surface: &mut Surface, from: Vec2, to: Vec2, color: Color) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }
    let mut x0 = from.x.round() as i64;
    let mut y0 = from.y.round() as i64;
    let x1 = to.x.round() as i64;
    let y1 = to.y.round() as i64;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        surface.put_pixel(x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> Surface {
        Surface::new(w, h, Color::BLACK).unwrap()
    }

    #[test]
    fn horizontal_line_paints_every_column() {
        let mut s = surface(10, 5);
        draw(&mut s, Vec2::new(1.0, 2.0), Vec2::new(8.0, 2.0), Color::WHITE);
        for x in 1..=8 {
            assert_eq!(s.pixel(x, 2), Some(Color::WHITE), "column {x}");
        }
        assert_eq!(s.pixel(0, 2), Some(Color::BLACK));
        assert_eq!(s.pixel(9, 2), Some(Color::BLACK));
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut s = surface(10, 10);
        draw(&mut s, Vec2::new(0.0, 0.0), Vec2::new(9.0, 9.0), Color::WHITE);
        assert_eq!(s.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(s.pixel(9, 9), Some(Color::WHITE));
        assert_eq!(s.pixel(5, 5), Some(Color::WHITE));
    }

    #[test]
    fn steep_line_is_continuous() {
        let mut s = surface(10, 10);
        draw(&mut s, Vec2::new(4.0, 0.0), Vec2::new(6.0, 9.0), Color::WHITE);
        // One painted pixel per row for a mostly-vertical line.
        for y in 0..10 {
            let hits = (0..10).filter(|&x| s.pixel(x, y) == Some(Color::WHITE)).count();
            assert_eq!(hits, 1, "row {y}");
        }
    }

    #[test]
    fn single_point_line_is_a_dot() {
        let mut s = surface(5, 5);
        draw(&mut s, Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0), Color::WHITE);
        assert_eq!(s.pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn off_surface_line_paints_nothing() {
        let mut s = surface(5, 5);
        draw(&mut s, Vec2::new(-10.0, -3.0), Vec2::new(-2.0, -8.0), Color::WHITE);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(s.pixel(x, y), Some(Color::BLACK));
            }
        }
    }
}
