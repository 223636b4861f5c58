use crate::image_classifier::models::model_config::ModelInputSpec;
use crate::image_source::interface::RasterImage;
use tract_onnx::prelude::tract_ndarray::Array4;

/// One class the model knows about and how confident it is, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub label: String,
    pub score: f32,
}

impl CategoryScore {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    #[error("image does not fit the model input: {0}")]
    ImageConversion(String),
    #[error("failed to run model: {0}")]
    Run(String),
}

/// An opened model. Dropping the handle releases the model.
pub trait ClassifierHandle: Send {
    fn input_spec(&self) -> &ModelInputSpec;

    /// Runs one forward pass over an NCHW tensor and returns one score per
    /// label, in the model's label order.
    fn infer(&self, input: Array4<f32>) -> Result<Vec<CategoryScore>, InferenceError>;
}

/// A packaged model that can be opened into a [`ClassifierHandle`].
pub trait ClassifierModel: Send + Sync {
    fn open(&self) -> Result<Box<dyn ClassifierHandle>, InferenceError>;
}

/// Image in, unordered scores out. Ranking is left to the caller.
pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &RasterImage) -> Result<Vec<CategoryScore>, InferenceError>;

    /// Releases anything held between requests.
    fn shutdown(&self) {}
}
