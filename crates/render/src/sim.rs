//! In-memory simulator device.
//!
//! The engine never cares whether pixels land on real hardware; this pair of
//! types backs the binary's headless mode and every pixel-level test.

use crate::traits::{Display, Surface};
use marquee_types::{Color, Size};

/// A plain frame buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSurface {
    size: Size,
    pixels: Vec<Color>,
}

impl SimSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return Color::BLACK;
        }
        self.pixels[(y * self.size.width + x) as usize]
    }

    /// Count of non-black pixels, handy in assertions.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != Color::BLACK).count()
    }
}

impl Surface for SimSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return;
        }
        self.pixels[(y * self.size.width + x) as usize] = color;
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::BLACK);
    }
}

/// Double-buffered display over [`SimSurface`] frames.
///
/// `swap` keeps the presented frame readable via [`SimDisplay::presented`],
/// which is how tests observe what a frame actually contained.
#[derive(Debug)]
pub struct SimDisplay {
    size: Size,
    presented: SimSurface,
    swaps: u64,
}

impl SimDisplay {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            presented: SimSurface::new(width, height),
            swaps: 0,
        }
    }

    pub fn presented(&self) -> &SimSurface {
        &self.presented
    }

    pub fn swap_count(&self) -> u64 {
        self.swaps
    }
}

impl Display for SimDisplay {
    type Frame = SimSurface;

    fn size(&self) -> Size {
        self.size
    }

    fn create_frame(&self) -> SimSurface {
        SimSurface::new(self.size.width, self.size.height)
    }

    fn swap(&mut self, frame: SimSurface) -> SimSurface {
        self.swaps += 1;
        std::mem::replace(&mut self.presented, frame)
    }
}
