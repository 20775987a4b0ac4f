//! Glyph-level text drawing over a [`Surface`].
//!
//! Drawing goes pixel by pixel through `set_pixel` so that clipped surfaces
//! clip glyphs exactly like any other pixel.

use crate::font::Font;
use crate::traits::Surface;
use marquee_types::Color;

/// Draw `text` with its pen starting at `x`, baseline at `baseline_y`.
/// Returns the total advance width drawn.
pub fn draw_text(
    surface: &mut dyn Surface,
    font: &dyn Font,
    x: i32,
    baseline_y: i32,
    color: Color,
    text: &str,
) -> i32 {
    let mut pen = x;
    for ch in text.chars() {
        if let Some(glyph) = font.glyph(ch) {
            for &(dx, dy) in &glyph.pixels {
                surface.set_pixel(pen + dx, baseline_y + dy, color);
            }
        }
        pen += font.advance(ch);
    }
    pen - x
}

/// Sum of per-character advance widths; no pixels touched.
pub fn measure_text(font: &dyn Font, text: &str) -> i32 {
    text.chars().map(|ch| font.advance(ch)).sum()
}

/// Axis-aligned filled rectangle.
pub fn fill_rect(surface: &mut dyn Surface, x: i32, y: i32, width: i32, height: i32, color: Color) {
    for py in y..y + height {
        for px in x..x + width {
            surface.set_pixel(px, py, color);
        }
    }
}

/// Horizontal or vertical line between two points (used by the overlay; the
/// matrix has no use for anti-aliased diagonals).
pub fn draw_line(surface: &mut dyn Surface, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    if y0 == y1 {
        for x in x0.min(x1)..=x0.max(x1) {
            surface.set_pixel(x, y0, color);
        }
    } else if x0 == x1 {
        for y in y0.min(y1)..=y0.max(y1) {
            surface.set_pixel(x0, y, color);
        }
    } else {
        // Shallow Bresenham fallback for completeness.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            surface.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Rectangle outline, one pixel wide.
pub fn draw_rect_outline(
    surface: &mut dyn Surface,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    draw_line(surface, x, y, x + width - 1, y, color);
    draw_line(surface, x, y + height - 1, x + width - 1, y + height - 1, color);
    draw_line(surface, x, y, x, y + height - 1, color);
    draw_line(surface, x + width - 1, y, x + width - 1, y + height - 1, color);
}
