//! PNG export for rendered images.

use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel data does not match a {width}x{height} image")]
    DimensionMismatch { width: u32, height: u32 },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Save an image buffer as an 8-bit RGBA PNG.
///
/// Missing parent directories are created.
pub fn save_png<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let rgba = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_rgba()).ok_or(
        OutputError::DimensionMismatch {
            width: buffer.width,
            height: buffer.height,
        },
    )?;
    rgba.save_with_format(path, image::ImageFormat::Png)?;

    log::info!("Saved {}x{} image to {}", buffer.width, buffer.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_save_png_round_trip() {
        let mut buffer = ImageBuffer::new(4, 3);
        buffer.set(1, 2, Color::new(1.0, 0.5, 0.0));

        let path = std::env::temp_dir()
            .join("beamburst_output_test")
            .join("round_trip.png");
        save_png(&buffer, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(1, 2).0, [255, 128, 0, 255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 0, 0, 255]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut buffer = ImageBuffer::new(4, 4);
        buffer.pixels.truncate(3);

        let path = std::env::temp_dir().join("beamburst_mismatch.png");
        let err = save_png(&buffer, &path).unwrap_err();
        assert!(matches!(
            err,
            OutputError::DimensionMismatch {
                width: 4,
                height: 4
            }
        ));
    }
}
