//! Convolution kernels
//!
//! Fixed kernel tables used by the filtering operations. All matrices
//! are row-major: `KERNEL[ky][kx]` is the coefficient applied to the
//! source pixel at `(x + kx - center, y + ky - center)`.

/// 3x3 box blur, each cell 1/9
pub const AVERAGE: [[f64; 3]; 3] = [
    [1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0],
    [1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0],
    [1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0],
];

/// 3x3 binomial Gaussian, divisor 16
pub const GAUSSIAN3: [[i32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// 5x5 binomial Gaussian, divisor 256
pub const GAUSSIAN5: [[i32; 5]; 5] = [
    [1, 4, 6, 4, 1],
    [4, 16, 24, 16, 4],
    [6, 24, 36, 24, 6],
    [4, 16, 24, 16, 4],
    [1, 4, 6, 4, 1],
];

/// 7x7 binomial Gaussian, divisor 4096
pub const GAUSSIAN7: [[i32; 7]; 7] = [
    [1, 6, 15, 20, 15, 6, 1],
    [6, 36, 90, 120, 90, 36, 6],
    [15, 90, 225, 300, 225, 90, 15],
    [20, 120, 300, 400, 300, 120, 20],
    [15, 90, 225, 300, 225, 90, 15],
    [6, 36, 90, 120, 90, 36, 6],
    [1, 6, 15, 20, 15, 6, 1],
];

/// Prewitt horizontal gradient
pub const PREWITT_X: [[i32; 3]; 3] = [[-1, 0, 1], [-1, 0, 1], [-1, 0, 1]];

/// Prewitt vertical gradient
pub const PREWITT_Y: [[i32; 3]; 3] = [[-1, -1, -1], [0, 0, 0], [1, 1, 1]];

/// Sobel horizontal gradient
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Sobel vertical gradient
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Four-neighbor Laplacian
pub const LAPLACIAN: [[i32; 3]; 3] = [[0, 1, 0], [1, -4, 1], [0, 1, 0]];
