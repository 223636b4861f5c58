use image::DynamicImage;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A decoded image plus the name it was loaded under.
///
/// Pixels live behind an `Arc` so a request can capture the image by value
/// without copying it.
#[derive(Clone)]
pub struct RasterImage {
    name: String,
    pixels: Arc<DynamicImage>,
}

impl RasterImage {
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            pixels: Arc::new(image),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("name", &self.name)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for RasterImage {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageSourceError {
    #[error("could not decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("no sample images are configured")]
    NoSamples,
}

pub trait ImageSource: Send + Sync {
    /// Lets the user choose an image file. `Ok(None)` means the user cancelled.
    fn pick_image(&self) -> Result<Option<RasterImage>, ImageSourceError>;
    fn load_path(&self, path: &Path) -> Result<RasterImage, ImageSourceError>;
    /// Loads one of the bundled sample images, chosen uniformly at random.
    fn load_sample(&self) -> Result<RasterImage, ImageSourceError>;
}
