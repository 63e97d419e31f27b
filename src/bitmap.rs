use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::VectorizeError;
use crate::grid::PixelGrid;

/// Load an image file into a pixel grid of packed RGBA samples.
pub fn load(path: &Path) -> Result<PixelGrid, VectorizeError> {
    let img = ImageReader::open(path)
        .map_err(|e| VectorizeError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| VectorizeError::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| VectorizeError::ImageLoad(e.to_string()))?
        .into_rgba8();

    debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    from_rgba_image(&img)
}

/// Convert an in-memory RGBA image.
pub fn from_rgba_image(img: &RgbaImage) -> Result<PixelGrid, VectorizeError> {
    let (width, height) = img.dimensions();
    PixelGrid::from_rgba_bytes(width, height, img.as_raw())
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn converts_rgba_pixels() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0x11, 0x22, 0x33, 0xff]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        let grid = from_rgba_image(&img).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().color, 0x112233ff);
        assert_eq!(grid.get(1, 0).unwrap().color, 0);
    }

    #[test]
    fn round_trips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tiny.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([255, 0, 0, 255]));
        img.save(&file).unwrap();

        let grid = load(&file).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(2, 1).unwrap().color, 0xff0000ff);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, VectorizeError::ImageLoad(_)));
    }
}
