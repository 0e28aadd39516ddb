//! # Output Module
//!
//! Writes rendered f32 images to disk or to a stream:
//! - ASCII PPM (`P3`), the native format, to any `Write` sink
//! - 8-bit PNG using the same quantization as the PPM writer
//! - 32-bit float OpenEXR with the linear values untouched
//!
//! ## Quantization
//!
//! Each channel maps to `floor(255.999 * c)`. Shaded colors are always in
//! [0, 1], so every byte lands in 0..=255 without clamping.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, ImageResult, Rgb};
use log::info;

use crate::camera::RenderedImage;

/// Convert a color channel in [0, 1] to an 8-bit value.
///
/// Out-of-range input saturates at 0 or 255; NaN becomes 0.
#[inline]
pub fn quantize(component: f32) -> u8 {
    (255.999 * component) as u8
}

/// Write `image` as an ASCII PPM.
///
/// Emits the `P3` header, then one `r g b` line per pixel, rows top to
/// bottom and columns left to right.
pub fn write_ppm<W: Write>(out: &mut W, image: &RenderedImage) -> io::Result<()> {
    let (width, height) = image.dimensions();
    write!(out, "P3\n{} {}\n255\n", width, height)?;

    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        writeln!(out, "{} {} {}", quantize(r), quantize(g), quantize(b))?;
    }

    out.flush()
}

/// Save an f32 RGB image as an ASCII PPM file.
pub fn save_image_as_ppm(image: &RenderedImage, output_path: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_ppm(&mut writer, image)?;
    info!("Image saved as PPM: {}", output_path);
    Ok(())
}

/// Save an f32 RGB image as an 8-bit PNG.
///
/// Uses [`quantize`] with no gamma curve, so the bytes match the PPM output.
pub fn save_image_as_png(image: &RenderedImage, output_path: &str) -> ImageResult<()> {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        Rgb([quantize(r), quantize(g), quantize(b)])
    });

    u8_image.save(output_path)?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Save an f32 RGB image as EXR with full float precision.
///
/// Linear values are written as-is, with no tone mapping or quantization.
pub fn save_image_as_exr(image: &RenderedImage, output_path: &str) -> exr::error::Result<()> {
    let (width, height) = image.dimensions();

    write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let [r, g, b] = image.get_pixel(x as u32, y as u32).0;
        (r, g, b)
    })?;
    info!("HDR image saved as EXR: {}", output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> RenderedImage {
        let mut image: RenderedImage = ImageBuffer::new(2, 2);
        image.put_pixel(0, 0, Rgb([1.0, 0.0, 0.5]));
        image.put_pixel(1, 0, Rgb([0.0, 1.0, 0.0]));
        image.put_pixel(0, 1, Rgb([0.25, 0.25, 0.25]));
        image.put_pixel(1, 1, Rgb([0.5, 0.7, 1.0]));
        image
    }

    #[test]
    fn quantize_floors_into_byte_range() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(0.25), 63);
        assert_eq!(quantize(0.7), 179);
    }

    #[test]
    fn quantize_saturates_out_of_range() {
        assert_eq!(quantize(-0.5), 0);
        assert_eq!(quantize(3.0), 255);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn ppm_layout() {
        let mut buf = Vec::new();
        write_ppm(&mut buf, &two_by_two()).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(buf).expect("PPM output is ASCII");

        let expected = "P3\n2 2\n255\n\
                        255 0 127\n\
                        0 255 0\n\
                        63 63 63\n\
                        127 179 255\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn files_land_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let image = two_by_two();

        let ppm = dir.path().join("out.ppm");
        save_image_as_ppm(&image, ppm.to_str().expect("utf-8 path")).expect("ppm saved");
        let text = std::fs::read_to_string(&ppm).expect("ppm written");
        assert!(text.starts_with("P3\n2 2\n255\n"));
        assert_eq!(text.lines().count(), 3 + 4);

        let png = dir.path().join("out.png");
        save_image_as_png(&image, png.to_str().expect("utf-8 path")).expect("png saved");
        let decoded = image::open(&png).expect("png written").to_rgb8();
        assert_eq!(decoded.get_pixel(1, 1).0, [127, 179, 255]);

        let exr = dir.path().join("out.exr");
        save_image_as_exr(&image, exr.to_str().expect("utf-8 path")).expect("exr saved");
        assert!(exr.exists());
    }

    #[test]
    fn unwritable_paths_report_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("no/such/dir");
        let image = two_by_two();

        let ppm = missing.join("out.ppm");
        assert!(save_image_as_ppm(&image, ppm.to_str().expect("utf-8 path")).is_err());

        let png = missing.join("out.png");
        assert!(save_image_as_png(&image, png.to_str().expect("utf-8 path")).is_err());

        let exr = missing.join("out.exr");
        assert!(save_image_as_exr(&image, exr.to_str().expect("utf-8 path")).is_err());
    }
}
