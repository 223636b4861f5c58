use crate::image_source::interface::{ImageSource, ImageSourceError, RasterImage};
use image::{DynamicImage, ImageBuffer, Rgb};
use std::path::Path;

pub struct ImageSourceFake {
    image: DynamicImage,
    cancel_pick: bool,
    failing: bool,
}

impl ImageSourceFake {
    pub fn new() -> Self {
        Self {
            image: DynamicImage::ImageRgb8(ImageBuffer::from_pixel(16, 16, Rgb([200, 120, 40]))),
            cancel_pick: false,
            failing: false,
        }
    }

    pub fn cancelling() -> Self {
        Self {
            cancel_pick: true,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    fn load(&self, name: &str) -> Result<RasterImage, ImageSourceError> {
        if self.failing {
            return Err(ImageSourceError::Decode {
                path: name.to_string(),
                reason: "fake decode failure".to_string(),
            });
        }
        Ok(RasterImage::new(name, self.image.clone()))
    }
}

impl ImageSource for ImageSourceFake {
    fn pick_image(&self) -> Result<Option<RasterImage>, ImageSourceError> {
        if self.cancel_pick {
            return Ok(None);
        }
        self.load("picked.png").map(Some)
    }

    fn load_path(&self, path: &Path) -> Result<RasterImage, ImageSourceError> {
        self.load(&path.display().to_string())
    }

    fn load_sample(&self) -> Result<RasterImage, ImageSourceError> {
        self.load("test1.jpg")
    }
}
