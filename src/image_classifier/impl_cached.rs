use crate::image_classifier::interface::{
    CategoryScore, ClassifierHandle, ClassifierModel, ImageClassifier, InferenceError,
};
use crate::image_classifier::pipeline::run_once;
use crate::image_source::interface::RasterImage;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Opens the model on first use and keeps it until [`ImageClassifier::shutdown`]
/// or drop. Requests are serialized on the handle.
pub struct ImageClassifierCached {
    model: Arc<dyn ClassifierModel + Send + Sync>,
    handle: Mutex<Option<Box<dyn ClassifierHandle>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierCached {
    pub fn new(
        model: Arc<dyn ClassifierModel + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            handle: Mutex::new(None),
            logger: logger.with_namespace("image_classifier").with_namespace("cached"),
        }
    }
}

impl ImageClassifier for ImageClassifierCached {
    fn classify(&self, image: &RasterImage) -> Result<Vec<CategoryScore>, InferenceError> {
        let mut slot = self
            .handle
            .lock()
            .map_err(|_| InferenceError::Run("model handle lock poisoned".to_string()))?;

        let handle = match slot.take() {
            Some(handle) => handle,
            None => {
                let _ = self.logger.info("Opening model");
                self.model.open()?
            }
        };

        let result = run_once(handle.as_ref(), image);
        *slot = Some(handle);

        result
    }

    fn shutdown(&self) {
        let released = match self.handle.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if released.is_some() {
            let _ = self.logger.info("Releasing model");
        }
    }
}
