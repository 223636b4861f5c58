use crate::image_classifier::interface::{
    CategoryScore, ClassifierHandle, ClassifierModel, InferenceError,
};
use crate::image_classifier::models::model_config::{ModelConfig, ModelInputSpec, OutputKind};
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::tract_ndarray::Array4;
use tract_onnx::prelude::*;

type Plan = TypedRunnableModel<TypedModel>;

/// Reads a labels file with one label per line, skipping blank lines.
pub fn read_labels(path: &Path) -> Result<Vec<String>, InferenceError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        InferenceError::ModelLoad(format!("cannot read labels {}: {}", path.display(), e))
    })?;

    let labels: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if labels.is_empty() {
        return Err(InferenceError::ModelLoad(format!(
            "labels file {} is empty",
            path.display()
        )));
    }

    Ok(labels)
}

pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|v| v / sum).collect()
}

pub struct ClassifierModelTractOnnx {
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierModelTractOnnx {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger
                .with_namespace("image_classifier")
                .with_namespace("tract_onnx"),
        }
    }

    fn load_plan(&self) -> TractResult<Plan> {
        let input = &self.config.input;
        tract_onnx::onnx()
            .model_for_path(&self.config.onnx_model_path)?
            .with_input_fact(
                0,
                f32::fact([1, 3, input.height as usize, input.width as usize]).into(),
            )?
            .into_optimized()?
            .into_runnable()
    }
}

impl ClassifierModel for ClassifierModelTractOnnx {
    fn open(&self) -> Result<Box<dyn ClassifierHandle>, InferenceError> {
        let start = Instant::now();
        let _ = self.logger.info(&format!(
            "Loading model {}",
            self.config.onnx_model_path.display()
        ));

        let labels = read_labels(&self.config.labels_path)?;

        let plan = self.load_plan().map_err(|e| {
            InferenceError::ModelLoad(format!(
                "{}: {}",
                self.config.onnx_model_path.display(),
                e
            ))
        })?;

        let _ = self.logger.info(&format!(
            "Model loaded with {} labels in {:?}",
            labels.len(),
            start.elapsed()
        ));

        Ok(Box::new(ClassifierHandleTractOnnx {
            plan,
            labels,
            input: self.config.input.clone(),
            output_kind: self.config.output_kind,
            logger: self.logger.clone(),
        }))
    }
}

struct ClassifierHandleTractOnnx {
    plan: Plan,
    labels: Vec<String>,
    input: ModelInputSpec,
    output_kind: OutputKind,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierHandleTractOnnx {
    fn run_plan(&self, input: Array4<f32>) -> Result<Vec<f32>, InferenceError> {
        let tensor: Tensor = input.into();
        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| InferenceError::Run(e.to_string()))?;
        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Run("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Run(e.to_string()))?;
        Ok(output.iter().copied().collect())
    }
}

impl ClassifierHandle for ClassifierHandleTractOnnx {
    fn input_spec(&self) -> &ModelInputSpec {
        &self.input
    }

    fn infer(&self, input: Array4<f32>) -> Result<Vec<CategoryScore>, InferenceError> {
        let start = Instant::now();
        let raw = self.run_plan(input)?;

        if raw.len() != self.labels.len() {
            return Err(InferenceError::Run(format!(
                "model produced {} scores for {} labels",
                raw.len(),
                self.labels.len()
            )));
        }

        let scores = match self.output_kind {
            OutputKind::Logits => softmax(&raw),
            OutputKind::Probabilities => raw.iter().map(|s| s.clamp(0.0, 1.0)).collect(),
        };

        let _ = self
            .logger
            .info(&format!("Inference took {:?}", start.elapsed()));

        Ok(self
            .labels
            .iter()
            .zip(scores)
            .map(|(label, score)| CategoryScore::new(label.clone(), score))
            .collect())
    }
}

impl Drop for ClassifierHandleTractOnnx {
    fn drop(&mut self) {
        let _ = self.logger.info("Model released");
    }
}
