//! PDF rendering types

use std::io::Cursor;

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load PDF: {0}")]
    LoadError(String),
    #[error("Page {0} not found (document has {1} pages)")]
    PageNotFound(usize, usize),
    #[error("Failed to render page: {0}")]
    RenderError(String),
    #[error("Image encoding error: {0}")]
    ImageError(String),
}

#[cfg(feature = "render")]
impl From<mupdf::Error> for RenderError {
    fn from(e: mupdf::Error) -> Self {
        RenderError::RenderError(e.to_string())
    }
}

/// Validate a 1-based page number against a page count
pub fn validate_page(page: usize, page_count: usize) -> Result<(), RenderError> {
    if page < 1 || page > page_count {
        return Err(RenderError::PageNotFound(page, page_count));
    }
    Ok(())
}

/// A rasterized page held in memory as packed RGB samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub samples: Vec<u8>,
}

impl Bitmap {
    /// Build a bitmap from samples with `n` components per pixel.
    ///
    /// Channels past the third (alpha) are dropped; gray input is expanded.
    pub fn from_samples(width: u32, height: u32, n: usize, samples: &[u8]) -> Self {
        let pixels = width as usize * height as usize;
        let mut rgb = Vec::with_capacity(pixels * 3);

        for i in 0..pixels {
            let offset = i * n;
            let (r, g, b) = if n >= 3 {
                (
                    samples.get(offset).copied().unwrap_or(0),
                    samples.get(offset + 1).copied().unwrap_or(0),
                    samples.get(offset + 2).copied().unwrap_or(0),
                )
            } else {
                let v = samples.get(offset).copied().unwrap_or(0);
                (v, v, v)
            };
            rgb.extend_from_slice(&[r, g, b]);
        }

        Self {
            width,
            height,
            samples: rgb,
        }
    }

    /// Encode the bitmap as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.samples.clone())
            .ok_or_else(|| RenderError::ImageError("Failed to create image buffer".to_string()))?;

        let mut output = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut output), image::ImageFormat::Png)
            .map_err(|e| RenderError::ImageError(e.to_string()))?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1, 3).is_ok());
        assert!(validate_page(3, 3).is_ok());
        assert!(matches!(validate_page(0, 3), Err(RenderError::PageNotFound(0, 3))));
        assert!(matches!(validate_page(4, 3), Err(RenderError::PageNotFound(4, 3))));
        assert!(validate_page(1, 0).is_err());
    }

    #[test]
    fn test_from_samples_drops_alpha() {
        let rgba = [10, 20, 30, 255, 40, 50, 60, 0];
        let bitmap = Bitmap::from_samples(2, 1, 4, &rgba);
        assert_eq!(bitmap.samples, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_from_samples_expands_gray() {
        let bitmap = Bitmap::from_samples(2, 1, 1, &[7, 9]);
        assert_eq!(bitmap.samples, vec![7, 7, 7, 9, 9, 9]);
    }

    #[test]
    fn test_encode_png() {
        let bitmap = Bitmap::from_samples(3, 2, 3, &[255; 18]);
        let png = bitmap.encode_png().unwrap();

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }
}
