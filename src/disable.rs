use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgba};
use std::path::Path;

/// Brightness multiplier applied to the grayscale icon (50% dimmer).
pub const DIM_FACTOR: f32 = 0.5;

/// Produce the disabled rendition of an icon.
///
/// The color is reduced to luminance and then scaled by [`DIM_FACTOR`].
/// Images carrying transparency come back as RGBA with the original alpha
/// values copied verbatim, everything else as single-channel luma.
pub fn disable_image(img: &DynamicImage) -> DynamicImage {
    let gray = img.to_luma8();

    if img.color().has_alpha() {
        // Plain grayscale conversion drops alpha, so reattach it from the source
        let alpha = img.to_rgba8();
        let (width, height) = gray.dimensions();
        let rgba = ImageBuffer::from_fn(width, height, |x, y| {
            let l = dim(gray.get_pixel(x, y)[0]);
            Rgba([l, l, l, alpha.get_pixel(x, y)[3]])
        });
        DynamicImage::ImageRgba8(rgba)
    } else {
        DynamicImage::ImageLuma8(dim_gray(&gray))
    }
}

fn dim_gray(gray: &GrayImage) -> GrayImage {
    let (width, height) = gray.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| Luma([dim(gray.get_pixel(x, y)[0])]))
}

fn dim(value: u8) -> u8 {
    (value as f32 * DIM_FACTOR).clamp(0.0, 255.0) as u8
}

/// Read `input`, write its disabled variant to `output`.
///
/// The output format follows the extension of `output`.
pub fn create_disabled_icon(input: &Path, output: &Path) -> Result<()> {
    let source = image::open(input)
        .with_context(|| format!("Failed to load image {}", input.display()))?;

    let disabled = disable_image(&source);

    disabled
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, LumaA, RgbImage, RgbaImage};
    use tempfile::TempDir;

    fn checkerboard_rgba(size: u32) -> RgbaImage {
        ImageBuffer::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 200, 200, 255])
            } else {
                Rgba([40, 40, 40, (x * 16) as u8])
            }
        })
    }

    #[test]
    fn test_gray_pixels_are_halved() {
        let img = DynamicImage::ImageRgba8(checkerboard_rgba(16));
        let disabled = disable_image(&img).to_rgba8();

        assert_eq!(disabled.get_pixel(0, 0), &Rgba([100, 100, 100, 255]));
        assert_eq!(disabled.get_pixel(1, 0), &Rgba([20, 20, 20, 16]));
    }

    #[test]
    fn test_alpha_is_copied_verbatim() {
        let source = checkerboard_rgba(16);
        let disabled = disable_image(&DynamicImage::ImageRgba8(source.clone()));

        assert!(disabled.color().has_alpha());
        let disabled = disabled.to_rgba8();
        for (x, y, pixel) in source.enumerate_pixels() {
            assert_eq!(disabled.get_pixel(x, y)[3], pixel[3]);
        }
    }

    #[test]
    fn test_color_is_desaturated_and_dimmer() {
        let source = ImageBuffer::from_fn(8, 8, |x, y| {
            Rgba([(x * 30) as u8, (y * 30) as u8, 180, 255])
        });
        let source = DynamicImage::ImageRgba8(source);
        let plain_gray = source.to_luma8();
        let disabled = disable_image(&source).to_rgba8();

        for (x, y, pixel) in disabled.enumerate_pixels() {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert!(pixel[0] < plain_gray.get_pixel(x, y)[0]);
        }
    }

    #[test]
    fn test_opaque_input_stays_without_alpha() {
        let source = RgbImage::from_pixel(4, 4, image::Rgb([255, 255, 255]));
        let disabled = disable_image(&DynamicImage::ImageRgb8(source));

        assert!(!disabled.color().has_alpha());
        assert_eq!(disabled.dimensions(), (4, 4));
        // truncated, not rounded
        assert_eq!(disabled.to_luma8().get_pixel(2, 2), &Luma([127]));
    }

    #[test]
    fn test_luma_alpha_input_keeps_transparency() {
        let source = ImageBuffer::from_fn(4, 4, |x, _| LumaA([120u8, (x * 60) as u8]));
        let disabled = disable_image(&DynamicImage::ImageLumaA8(source));

        let disabled = disabled.to_rgba8();
        assert_eq!(disabled.get_pixel(3, 0), &Rgba([60, 60, 60, 180]));
    }

    #[test]
    fn test_create_disabled_icon_writes_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("icon-32.png");
        let output = temp_dir.path().join("icon-disabled-32.png");
        checkerboard_rgba(32).save(&input).expect("Failed to save source");

        create_disabled_icon(&input, &output).expect("Conversion should succeed");

        let written = image::open(&output).expect("Failed to load output");
        assert_eq!(written.dimensions(), (32, 32));
        assert!(written.color().has_alpha());
    }

    #[test]
    fn test_corrupt_input_reports_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("icon-16.png");
        let output = temp_dir.path().join("icon-disabled-16.png");
        std::fs::write(&input, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        let err = create_disabled_icon(&input, &output).unwrap_err();

        assert!(format!("{err:#}").contains("icon-16.png"));
        assert!(!output.exists());
    }
}
