use super::grid::{Grid, Position};

/// Brightest level a pixel can show.
pub const MAX_BRIGHTNESS: u8 = 9;

/// One rendered frame of the matrix: a row-major grid of brightness
/// levels in `0..=MAX_BRIGHTNESS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Dark frame sized to the grid.
    pub fn new(grid: &Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set one pixel. Out-of-bounds writes are dropped and brightness is
    /// capped at [`MAX_BRIGHTNESS`].
    pub fn set_pixel(&mut self, position: Position, brightness: u8) {
        if position.x < 0 || position.y < 0 {
            return;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = brightness.min(MAX_BRIGHTNESS);
    }

    /// Brightness at (x, y); out-of-range reads are dark.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y * self.width + x]
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}
