use crate::image_classifier::interface::{
    CategoryScore, ClassifierHandle, ClassifierModel, InferenceError,
};
use crate::image_classifier::models::model_config::ModelInputSpec;
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array4;

const OBJECTS: [&str; 18] = [
    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book", "laptop",
    "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
];

#[derive(Debug, Clone)]
enum FakeScores {
    Random(Vec<String>),
    Fixed(Vec<CategoryScore>),
}

#[derive(Debug, Default)]
struct Counters {
    opened: AtomicUsize,
    released: AtomicUsize,
    inferences: AtomicUsize,
}

/// Stand-in model that counts how often it is opened, run and released.
pub struct ClassifierModelFake {
    scores: FakeScores,
    input: ModelInputSpec,
    fail_open: Option<String>,
    fail_infer: Option<String>,
    counters: Arc<Counters>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierModelFake {
    /// Random probabilities over a small label set on every inference.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            scores: FakeScores::Random(OBJECTS.iter().map(|o| o.to_string()).collect()),
            input: ModelInputSpec::unit(32, 32),
            fail_open: None,
            fail_infer: None,
            counters: Arc::new(Counters::default()),
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    #[cfg(test)]
    pub fn with_categories(mut self, categories: Vec<CategoryScore>) -> Self {
        self.scores = FakeScores::Fixed(categories);
        self
    }

    #[cfg(test)]
    pub fn with_input(mut self, input: ModelInputSpec) -> Self {
        self.input = input;
        self
    }

    #[cfg(test)]
    pub fn failing_open(mut self, reason: &str) -> Self {
        self.fail_open = Some(reason.to_string());
        self
    }

    #[cfg(test)]
    pub fn failing_inference(mut self, reason: &str) -> Self {
        self.fail_infer = Some(reason.to_string());
        self
    }

    #[cfg(test)]
    pub fn opened(&self) -> usize {
        self.counters.opened.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn released(&self) -> usize {
        self.counters.released.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn inferences(&self) -> usize {
        self.counters.inferences.load(Ordering::SeqCst)
    }
}

impl ClassifierModel for ClassifierModelFake {
    fn open(&self) -> Result<Box<dyn ClassifierHandle>, InferenceError> {
        if let Some(reason) = &self.fail_open {
            let _ = self.logger.error(&format!("Refusing to open: {}", reason));
            return Err(InferenceError::ModelLoad(reason.clone()));
        }

        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        let _ = self.logger.info("Model opened");

        Ok(Box::new(ClassifierHandleFake {
            scores: self.scores.clone(),
            input: self.input.clone(),
            fail_infer: self.fail_infer.clone(),
            counters: self.counters.clone(),
            logger: self.logger.clone(),
        }))
    }
}

struct ClassifierHandleFake {
    scores: FakeScores,
    input: ModelInputSpec,
    fail_infer: Option<String>,
    counters: Arc<Counters>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierHandle for ClassifierHandleFake {
    fn input_spec(&self) -> &ModelInputSpec {
        &self.input
    }

    fn infer(&self, input: Array4<f32>) -> Result<Vec<CategoryScore>, InferenceError> {
        self.counters.inferences.fetch_add(1, Ordering::SeqCst);

        let expected = [1, 3, self.input.height as usize, self.input.width as usize];
        if input.shape() != expected {
            return Err(InferenceError::Run(format!(
                "expected input shape {:?}, got {:?}",
                expected,
                input.shape()
            )));
        }

        if let Some(reason) = &self.fail_infer {
            return Err(InferenceError::Run(reason.clone()));
        }

        match &self.scores {
            FakeScores::Fixed(categories) => Ok(categories.clone()),
            FakeScores::Random(labels) => {
                let mut rng = rand::rng();
                let raw: Vec<f32> = labels.iter().map(|_| rng.random::<f32>()).collect();
                let total: f32 = raw.iter().sum::<f32>().max(f32::EPSILON);
                Ok(labels
                    .iter()
                    .zip(raw)
                    .map(|(label, value)| CategoryScore::new(label.clone(), value / total))
                    .collect())
            }
        }
    }
}

impl Drop for ClassifierHandleFake {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
        let _ = self.logger.info("Model released");
    }
}
