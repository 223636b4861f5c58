use crate::image_classifier::interface::{
    CategoryScore, ClassifierModel, ImageClassifier, InferenceError,
};
use crate::image_classifier::pipeline::run_once;
use crate::image_source::interface::RasterImage;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::Instant;

/// Opens the model for every request and releases it before returning.
pub struct ImageClassifierScoped {
    model: Arc<dyn ClassifierModel + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierScoped {
    pub fn new(
        model: Arc<dyn ClassifierModel + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            logger: logger.with_namespace("image_classifier").with_namespace("scoped"),
        }
    }
}

impl ImageClassifier for ImageClassifierScoped {
    fn classify(&self, image: &RasterImage) -> Result<Vec<CategoryScore>, InferenceError> {
        let start = Instant::now();
        let handle = self.model.open()?;

        let result = run_once(handle.as_ref(), image);
        drop(handle);

        match &result {
            Ok(scores) => {
                let _ = self.logger.info(&format!(
                    "Classified {} into {} categories in {:?}",
                    image.name(),
                    scores.len(),
                    start.elapsed()
                ));
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Classifying {} failed: {}", image.name(), e));
            }
        }

        result
    }
}
