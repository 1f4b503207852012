//! Module matrix rasterization.
//!
//! This module provides the core rendering logic: it expands an abstract grid of
//! dark and light barcode modules into a greyscale bitmap of a requested size,
//! applying a single integer scale factor and centered white padding. The input
//! matrix uses `true` for dark modules, while the output bitmap uses 0 for black
//! and 255 for white (an 8-bit greyscale raster).

use log::debug;

use crate::error::{Error, Result};

/// Black pixel intensity in a rendered bitmap.
pub const BLACK: u8 = 0;

/// White pixel intensity in a rendered bitmap.
pub const WHITE: u8 = 255;

/// An immutable rectangular grid of barcode modules.
///
/// The grid is stored as a single row-major buffer, so rows cannot alias each
/// other. Modules are `true` for dark and `false` for light. Dimensions are
/// fixed at construction; QR symbols are square, but nothing here relies on
/// squareness.
pub struct ModuleMatrix {
    width: usize,
    height: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Creates a matrix from a row-major module buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Number of module columns.
    /// * `height` - Number of module rows.
    /// * `modules` - Row-major module values, `true` for dark.
    ///
    /// # Panics
    ///
    /// Panics if `modules.len()` does not equal `width * height`.
    pub fn new(width: usize, height: usize, modules: Vec<bool>) -> Self {
        assert!(modules.len() == width * height, "Invalid module buffer length");
        Self { width, height, modules }
    }

    /// Creates a matrix from a slice of equally sized rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qraster::raster::ModuleMatrix;
    ///
    /// let matrix = ModuleMatrix::from_rows(&[
    ///     vec![true, false],
    ///     vec![false, true],
    /// ]);
    /// assert_eq!((matrix.width(), matrix.height()), (2, 2));
    /// ```
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut modules = Vec::with_capacity(width * height);
        for row in rows {
            assert!(row.len() == width, "Rows must all have the same length");
            modules.extend_from_slice(row);
        }
        Self { width, height, modules }
    }

    /// Returns the number of module columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of module rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules.
    /// Coordinates outside the matrix bounds return `false`.
    pub fn module(&self, x: i32, y: i32) -> bool {
        0 <= x
            && x < self.width as i32
            && 0 <= y
            && y < self.height as i32
            && self.get(x as usize, y as usize)
    }

    /// Returns the module at the given coordinates without a bounds fallback.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);
        self.modules[y * self.width + x]
    }
}

/// A rendered greyscale raster, row-major, one byte per pixel.
///
/// Pixel intensity is 0 for black and 255 for white, the inverse polarity of
/// the module matrix it was rendered from. The buffer is owned and never
/// aliases the input matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Creates a bitmap with every pixel set to black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![BLACK; width * height],
        }
    }

    /// Creates a bitmap from an existing row-major pixel buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `width * height`.
    pub fn from_data(data: Vec<u8>, width: usize, height: usize) -> Self {
        assert!(data.len() == width * height, "Invalid pixel buffer length");
        Self { width, height, data }
    }

    /// Returns the bitmap width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the bitmap height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel intensity at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the bitmap.
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);
        self.data[y * self.width + x]
    }

    /// Returns one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the bitmap.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Returns the whole row-major pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

/// Renders a module matrix into a greyscale bitmap of the requested size.
///
/// The output is never smaller than the matrix: each requested dimension is
/// clamped up to the matrix dimension. Every module becomes a `multiple ×
/// multiple` block of pixels, where `multiple` is the largest integer factor
/// that fits both output dimensions, and the scaled symbol is centered with
/// white padding (an odd remainder puts the extra pixel on the right/bottom).
/// Dark modules become black pixels (0) and light modules white pixels (255).
///
/// The function is pure: identical inputs always produce a byte-identical
/// bitmap.
///
/// # Arguments
///
/// * `matrix` - The module matrix to render.
/// * `requested_width` - Requested output width in pixels.
/// * `requested_height` - Requested output height in pixels.
///
/// # Returns
///
/// A `Result` containing the bitmap, or [`Error::DegenerateMatrix`] if either
/// matrix dimension is zero.
///
/// # Example
///
/// ```rust
/// use qraster::raster::{render, ModuleMatrix, BLACK};
///
/// let matrix = ModuleMatrix::from_rows(&[vec![true]]);
/// let bitmap = render(&matrix, 3, 3).unwrap();
/// assert_eq!((bitmap.width(), bitmap.height()), (3, 3));
/// assert_eq!(bitmap.get_pixel(1, 1), BLACK);
/// ```
pub fn render(
    matrix: &ModuleMatrix,
    requested_width: usize,
    requested_height: usize,
) -> Result<Bitmap> {
    if matrix.width() == 0 || matrix.height() == 0 {
        return Err(Error::DegenerateMatrix);
    }

    let input_width = matrix.width();
    let input_height = matrix.height();
    let output_width = requested_width.max(input_width);
    let output_height = requested_height.max(input_height);

    // The clamp above guarantees multiple >= 1.
    let multiple = (output_width / input_width).min(output_height / input_height);
    let left_padding = (output_width - input_width * multiple) / 2;
    let top_padding = (output_height - input_height * multiple) / 2;
    debug!(
        "rendering {}x{} matrix into {}x{} bitmap (multiple {}, padding {}+{})",
        input_width, input_height, output_width, output_height, multiple, left_padding, top_padding
    );

    let mut output = Bitmap::new(output_width, output_height);

    // Each completed row is copied into `multiple` output rows, so it is
    // built once in this scratch buffer instead of per output row.
    let mut row = vec![BLACK; output_width];

    // White lines above the symbol
    for y in 0..top_padding {
        output.row_mut(y).fill(WHITE);
    }

    // Expand each module row to the multiple
    for y in 0..input_height {
        row[..left_padding].fill(WHITE);

        let mut offset = left_padding;
        for x in 0..input_width {
            let value = if matrix.get(x, y) { BLACK } else { WHITE };
            row[offset..offset + multiple].fill(value);
            offset += multiple;
        }

        row[offset..].fill(WHITE);

        let start = top_padding + y * multiple;
        for target in start..start + multiple {
            output.row_mut(target).copy_from_slice(&row);
        }
    }

    // White lines below the symbol
    for y in top_padding + input_height * multiple..output_height {
        output.row_mut(y).fill(WHITE);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_dark(size: usize) -> ModuleMatrix {
        ModuleMatrix::new(size, size, vec![true; size * size])
    }

    #[test]
    fn test_all_black_matrix_scaled_three_times() {
        let bitmap = render(&all_dark(3), 9, 9).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (9, 9));
        assert!(bitmap.data().iter().all(|&px| px == BLACK));
    }

    #[test]
    fn test_all_white_matrix_renders_all_white() {
        let matrix = ModuleMatrix::new(3, 3, vec![false; 9]);
        let bitmap = render(&matrix, 9, 9).unwrap();
        assert!(bitmap.data().iter().all(|&px| px == WHITE));
    }

    #[test]
    fn test_exact_size_request_inverts_polarity() {
        let matrix = ModuleMatrix::from_rows(&[
            vec![true, false],
            vec![false, true],
        ]);
        let bitmap = render(&matrix, 2, 2).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (2, 2));
        for y in 0..2 {
            for x in 0..2 {
                let expected = if matrix.get(x, y) { BLACK } else { WHITE };
                assert_eq!(bitmap.get_pixel(x, y), expected);
            }
        }
    }

    #[test]
    fn test_checkerboard_scaled_with_remainder() {
        let matrix = ModuleMatrix::from_rows(&[
            vec![true, false],
            vec![false, true],
        ]);
        let bitmap = render(&matrix, 5, 5).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (5, 5));

        // multiple = 2, no padding on the left/top, the odd pixel is the
        // all-white final row and column.
        let expected: [[u8; 5]; 5] = [
            [0, 0, 255, 255, 255],
            [0, 0, 255, 255, 255],
            [255, 255, 0, 0, 255],
            [255, 255, 0, 0, 255],
            [255, 255, 255, 255, 255],
        ];
        for y in 0..5 {
            assert_eq!(bitmap.row(y), &expected[y][..], "row {}", y);
        }
    }

    #[test]
    fn test_small_request_clamps_to_matrix_size() {
        let bitmap = render(&all_dark(4), 0, 0).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (4, 4));
        assert!(bitmap.data().iter().all(|&px| px == BLACK));
    }

    #[test]
    fn test_even_excess_splits_padding_evenly() {
        // 3x3 at 11x11: multiple 3, two spare pixels per axis, one on each side.
        let bitmap = render(&all_dark(3), 11, 11).unwrap();
        for i in 0..11 {
            assert_eq!(bitmap.get_pixel(0, i), WHITE);
            assert_eq!(bitmap.get_pixel(10, i), WHITE);
            assert_eq!(bitmap.get_pixel(i, 0), WHITE);
            assert_eq!(bitmap.get_pixel(i, 10), WHITE);
        }
        assert_eq!(bitmap.get_pixel(1, 1), BLACK);
        assert_eq!(bitmap.get_pixel(9, 9), BLACK);
    }

    #[test]
    fn test_odd_excess_lands_on_right_and_bottom() {
        // 3x3 at 10x10: multiple 3, one spare pixel per axis.
        let bitmap = render(&all_dark(3), 10, 10).unwrap();
        assert_eq!(bitmap.get_pixel(0, 0), BLACK);
        for i in 0..10 {
            assert_eq!(bitmap.get_pixel(9, i), WHITE);
            assert_eq!(bitmap.get_pixel(i, 9), WHITE);
        }
    }

    #[test]
    fn test_non_square_matrix_keeps_isotropic_scale() {
        // 3 columns by 2 rows at 9x9: multiple = min(3, 4) = 3, the symbol
        // spans 9x6 with the vertical excess split 1 above and 2 below.
        let matrix = ModuleMatrix::new(3, 2, vec![true; 6]);
        let bitmap = render(&matrix, 9, 9).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (9, 9));
        assert!(bitmap.row(0).iter().all(|&px| px == WHITE));
        for y in 1..7 {
            assert!(bitmap.row(y).iter().all(|&px| px == BLACK), "row {}", y);
        }
        for y in 7..9 {
            assert!(bitmap.row(y).iter().all(|&px| px == WHITE), "row {}", y);
        }
    }

    #[test]
    fn test_rendering_twice_is_byte_identical() {
        let matrix = ModuleMatrix::from_rows(&[
            vec![true, false, true],
            vec![false, true, false],
            vec![true, true, false],
        ]);
        let first = render(&matrix, 20, 14).unwrap();
        let second = render(&matrix, 20, 14).unwrap();
        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_zero_dimension_matrix_is_rejected() {
        let matrix = ModuleMatrix::new(0, 0, Vec::new());
        assert!(matches!(render(&matrix, 5, 5), Err(Error::DegenerateMatrix)));

        let matrix = ModuleMatrix::new(3, 0, Vec::new());
        assert!(matches!(render(&matrix, 5, 5), Err(Error::DegenerateMatrix)));
    }

    #[test]
    fn test_module_access_outside_bounds_is_light() {
        let matrix = ModuleMatrix::from_rows(&[vec![true]]);
        assert_eq!(matrix.module(0, 0), true);
        assert_eq!(matrix.module(-1, 0), false);
        assert_eq!(matrix.module(0, 1), false);
    }
}
