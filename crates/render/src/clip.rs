//! Clipped sub-surface per drawable region.
//!
//! Wraps a surface with a local coordinate frame offset to a box origin and
//! clips every pixel to the box, so nothing a drawable does can leak outside
//! its region. Glyph drawing goes through `set_pixel`, which is what makes
//! this watertight.

use crate::traits::Surface;
use marquee_types::{Color, Rect, Size};

pub struct ClippedSurface<'a> {
    inner: &'a mut dyn Surface,
    frame: Rect,
}

impl<'a> ClippedSurface<'a> {
    pub fn new(inner: &'a mut dyn Surface, frame: Rect) -> Self {
        Self { inner, frame }
    }
}

impl Surface for ClippedSurface<'_> {
    fn size(&self) -> Size {
        self.frame.size()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.frame.width || y >= self.frame.height {
            return;
        }
        self.inner
            .set_pixel(self.frame.x + x, self.frame.y + y, color);
    }

    fn clear(&mut self) {
        for y in 0..self.frame.height {
            for x in 0..self.frame.width {
                self.inner
                    .set_pixel(self.frame.x + x, self.frame.y + y, Color::BLACK);
            }
        }
    }
}
