use crate::core::data::colour::BYTES_PER_PIXEL;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "image size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "image size {}x{} does not fit in memory", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Pixel grid anchored at (0, 0). Pixels are addressed row-major.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        let rect = Self { width, height };
        if checked_byte_len(rect.size()).is_none() {
            return Err(PixelRectError::TooLarge { width, height });
        }

        Ok(rect)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Bytes needed for an RGB8 raster of this size. Always addressable,
    /// since [`new`](Self::new) rejects sizes where it would not be.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.size() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of `point`, or `None` when it lies outside the rect.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of). Callers pass indices below `size()`.
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;

        Point {
            x: (index % width) as u32,
            y: (index / width) as u32,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point { x, y }))
    }
}

/// Raster byte count for `pixels`, or `None` past what a `Vec<u8>` can hold.
fn checked_byte_len(pixels: u64) -> Option<usize> {
    let bytes = pixels.checked_mul(BYTES_PER_PIXEL as u64)?;
    let bytes = usize::try_from(bytes).ok()?;

    (bytes <= isize::MAX as usize).then_some(bytes)
}
