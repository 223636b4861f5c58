use crate::config::SampleConfig;
use crate::image_source::interface::{ImageSource, ImageSourceError, RasterImage};
use crate::library::logger::interface::Logger;
use futures::executor::block_on;
use rand::Rng;
use std::path::Path;
use std::sync::Arc;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn sample_file_name(index: u32) -> String {
    format!("test{}.jpg", index)
}

pub fn pick_sample_index<R: Rng>(rng: &mut R, sample_count: u32) -> Option<u32> {
    if sample_count == 0 {
        return None;
    }
    Some(rng.random_range(1..=sample_count))
}

pub struct ImageSourceFileSystem {
    config: SampleConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageSourceFileSystem {
    pub fn new(config: SampleConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("image_source").with_namespace("file_system"),
        }
    }
}

impl ImageSourceFileSystem {
    fn load_picked(
        &self,
        picked: Option<&Path>,
    ) -> Result<Option<RasterImage>, ImageSourceError> {
        match picked {
            Some(path) => self.load_path(path).map(Some),
            None => {
                let _ = self.logger.info("File picker cancelled");
                Ok(None)
            }
        }
    }
}

impl ImageSource for ImageSourceFileSystem {
    fn pick_image(&self) -> Result<Option<RasterImage>, ImageSourceError> {
        // Runs on an effect worker; the async dialog is dispatched to the
        // event loop that eframe owns on the main thread.
        let picked = block_on(
            rfd::AsyncFileDialog::new()
                .set_title("Select an image")
                .add_filter("Images", &IMAGE_EXTENSIONS)
                .pick_file(),
        );

        self.load_picked(picked.as_ref().map(|handle| handle.path()))
    }

    fn load_path(&self, path: &Path) -> Result<RasterImage, ImageSourceError> {
        let _ = self.logger.info(&format!("Decoding {}", path.display()));

        let decoded = image::open(path).map_err(|e| ImageSourceError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        });

        let image = match decoded {
            Ok(image) => image,
            Err(e) => {
                let _ = self.logger.error(&e.to_string());
                return Err(e);
            }
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let _ = self.logger.info(&format!(
            "Decoded {} ({}x{})",
            name,
            image.width(),
            image.height()
        ));

        Ok(RasterImage::new(name, image))
    }

    fn load_sample(&self) -> Result<RasterImage, ImageSourceError> {
        let index = pick_sample_index(&mut rand::rng(), self.config.sample_count)
            .ok_or(ImageSourceError::NoSamples)?;
        let path = self.config.assets_dir.join(sample_file_name(index));
        self.load_path(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use image::{DynamicImage, ImageBuffer, Rgb};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()))
    }

    fn write_samples(dir: &Path, count: u32) {
        for index in 1..=count {
            let img = ImageBuffer::from_pixel(8, 4, Rgb([index as u8 * 10, 0, 0]));
            DynamicImage::ImageRgb8(img)
                .save(dir.join(sample_file_name(index)))
                .unwrap();
        }
    }

    #[test]
    fn test_sample_file_names() {
        assert_eq!(sample_file_name(1), "test1.jpg");
        assert_eq!(sample_file_name(11), "test11.jpg");
    }

    #[test]
    fn test_pick_sample_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 12];

        for _ in 0..1000 {
            let index = pick_sample_index(&mut rng, 11).unwrap();
            assert!((1..=11).contains(&index));
            seen[index as usize] = true;
        }

        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn test_pick_sample_index_without_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_sample_index(&mut rng, 0), None);
    }

    #[test]
    fn test_load_sample_decodes_one_of_the_assets() {
        let dir = tempfile::tempdir().unwrap();
        write_samples(dir.path(), 3);
        let source = ImageSourceFileSystem::new(
            SampleConfig {
                assets_dir: dir.path().to_path_buf(),
                sample_count: 3,
            },
            logger(),
        );

        let image = source.load_sample().unwrap();

        assert!(["test1.jpg", "test2.jpg", "test3.jpg"].contains(&image.name()));
        assert_eq!((image.width(), image.height()), (8, 4));
    }

    #[test]
    fn test_picked_file_is_decoded_and_cancel_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_samples(dir.path(), 1);
        let source = ImageSourceFileSystem::new(SampleConfig::default(), logger());

        let picked = source
            .load_picked(Some(&dir.path().join("test1.jpg")))
            .unwrap()
            .unwrap();

        assert_eq!(picked.name(), "test1.jpg");
        assert_eq!(source.load_picked(None), Ok(None));
    }

    #[test]
    fn test_load_sample_without_samples() {
        let source = ImageSourceFileSystem::new(
            SampleConfig {
                assets_dir: PathBuf::from("assets"),
                sample_count: 0,
            },
            logger(),
        );

        assert_eq!(source.load_sample(), Err(ImageSourceError::NoSamples));
    }

    #[test]
    fn test_load_path_reports_decode_error_for_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        let source = ImageSourceFileSystem::new(SampleConfig::default(), logger());

        let result = source.load_path(&path);

        assert!(matches!(result, Err(ImageSourceError::Decode { .. })));
    }

    #[test]
    fn test_load_path_reports_decode_error_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = ImageSourceFileSystem::new(SampleConfig::default(), logger());

        let result = source.load_path(&dir.path().join("missing.png"));

        match result {
            Err(ImageSourceError::Decode { path, .. }) => assert!(path.ends_with("missing.png")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
