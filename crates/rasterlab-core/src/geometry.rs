//! Integer geometry value types
//!
//! Coordinates are signed so that bounding-box and centroid arithmetic
//! can be done without casts; buffer accessors reject negatives.

/// A pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0)
    pub const ORIGIN: Point = Point { x: 0, y: 0 };
}

/// A rectangular extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total pixel count, 0 for degenerate sizes
    pub fn area(self) -> i64 {
        if self.width <= 0 || self.height <= 0 {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }
}
