//! Debug bounding-box overlay.
//!
//! When enabled, every drawable's box is outlined on the real (unclipped)
//! frame in a palette color keyed by its index, which makes layout mistakes
//! visible on the panel itself.

use crate::text::draw_rect_outline;
use crate::traits::Surface;
use marquee_types::{Color, Rect};

/// Simple colour palette for debug boxes.
pub const DEBUG_COLORS: [Color; 8] = [
    Color { r: 255, g: 0, b: 0 },     // red
    Color { r: 0, g: 255, b: 0 },     // green
    Color { r: 0, g: 0, b: 255 },     // blue
    Color { r: 255, g: 255, b: 0 },   // yellow
    Color { r: 255, g: 0, b: 255 },   // magenta
    Color { r: 0, g: 255, b: 255 },   // cyan
    Color { r: 255, g: 128, b: 0 },   // orange
    Color { r: 128, g: 0, b: 255 },   // purple
];

pub fn debug_color(index: usize) -> Color {
    DEBUG_COLORS[index % DEBUG_COLORS.len()]
}

/// Outline one drawable's box in its palette color.
pub fn draw_debug_box(surface: &mut dyn Surface, index: usize, frame: Rect) {
    draw_rect_outline(
        surface,
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        debug_color(index),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimSurface;

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(debug_color(0), debug_color(8));
        assert_ne!(debug_color(0), debug_color(1));
    }

    #[test]
    fn outline_lands_on_the_box_corners() {
        let mut surface = SimSurface::new(32, 16);
        draw_debug_box(&mut surface, 2, Rect::new(4, 2, 8, 6));
        assert_eq!(surface.pixel(4, 2), debug_color(2));
        assert_eq!(surface.pixel(11, 7), debug_color(2));
        assert_eq!(surface.pixel(5, 3), Color::BLACK);
    }
}
