//! RGB color values used by drawing and thresholding

/// An RGB color triple
///
/// Alpha is not part of the value; operations that write colors force
/// the alpha channel as documented per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Red (255, 0, 0)
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Green (0, 255, 0)
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    /// Blue (0, 0, 255)
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}
