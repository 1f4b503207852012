//! Utilities for presenting matrices and rendered bitmaps in various formats.

use crate::raster::{Bitmap, ModuleMatrix};

use image::{ImageBuffer, Luma};
use std::path::Path;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

/*---- Utilities ----*/

// Returns a string of SVG code for an image depicting
// the given module matrix, with the given number of border modules.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(matrix: &ModuleMatrix, border: i32) -> String {
    assert!(border >= 0, "Border must be non-negative");
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    let width = i32::try_from(matrix.width())
        .unwrap()
        .checked_add(border.checked_mul(2).unwrap())
        .unwrap();
    let height = i32::try_from(matrix.height())
        .unwrap()
        .checked_add(border.checked_mul(2).unwrap())
        .unwrap();
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {} {}\" stroke=\"none\">\n",
        width, height
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    for y in 0..matrix.height() as i32 {
        for x in 0..matrix.width() as i32 {
            if matrix.module(x, y) {
                if x != 0 || y != 0 {
                    result += " ";
                }
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// Prints the given module matrix to the console.
pub fn print_matrix(matrix: &ModuleMatrix) {
    let border: i32 = 4;
    for y in -border..matrix.height() as i32 + border {
        for x in -border..matrix.width() as i32 + border {
            let c: char = if matrix.module(x, y) { '█' } else { ' ' };
            print!("{0}{0}", c);
        }
        println!();
    }
    println!();
}

/// Converts a rendered bitmap into an in-memory greyscale image buffer.
///
/// # Arguments
///
/// * `bitmap` - The rendered bitmap to convert.
///
/// # Returns
///
/// An `ImageBuffer` with one `Luma<u8>` pixel per bitmap pixel.
///
/// # Example
///
/// ```rust
/// use qraster::helper::bitmap_to_image_buffer;
/// use qraster::raster::{render, ModuleMatrix};
///
/// let matrix = ModuleMatrix::from_rows(&[vec![true]]);
/// let bitmap = render(&matrix, 4, 4).unwrap();
/// let img = bitmap_to_image_buffer(&bitmap);
/// assert_eq!(img.dimensions(), (4, 4));
/// ```
pub fn bitmap_to_image_buffer(bitmap: &Bitmap) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let mut img = ImageBuffer::new(bitmap.width() as u32, bitmap.height() as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Luma([bitmap.get_pixel(x as usize, y as usize)]);
    }

    img
}

/// Saves a rendered bitmap to a PNG file.
///
/// # Arguments
///
/// * `bitmap` - The rendered bitmap to save.
/// * `directory_path` - Optional. The directory path where the image will be saved. If not provided, the default directory is "generated".
/// * `filename` - Optional. The name of the image file. If not provided, a timestamp-based filename will be used.
///
/// # Errors
///
/// Returns an `image::ImageError` if there is an error saving the image.
///
/// # Example
///
/// ```no_run
/// use qraster::helper::save_bitmap;
/// use qraster::raster::{render, ModuleMatrix};
///
/// let matrix = ModuleMatrix::from_rows(&[vec![true]]);
/// let bitmap = render(&matrix, 32, 32).unwrap();
/// save_bitmap(&bitmap, Some("images"), Some("qr_code")).unwrap();
/// ```
pub fn save_bitmap(
    bitmap: &Bitmap,
    directory_path: Option<&str>,
    filename: Option<&str>,
) -> Result<(), image::ImageError> {
    let img = bitmap_to_image_buffer(bitmap);

    let directory_path = directory_path.unwrap_or("generated");
    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let start = SystemTime::now();
            let since_the_epoch = start.duration_since(UNIX_EPOCH)
                .expect("Time went backwards");
            format!("{:?}", since_the_epoch)
        }
    };

    let file_path = format!("{}/{}.png", directory_path, filename);

    // Check if the directory exists, create it if it doesn't
    if !Path::new(directory_path).exists() {
        fs::create_dir_all(directory_path)?;
    }

    img.save(&Path::new(&file_path))
}
