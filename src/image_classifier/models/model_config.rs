use std::path::PathBuf;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMode {
    Stretch,
    Letterbox,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputKind {
    Logits,
    Probabilities,
}

/// What the model expects as input. Normalization belongs to the model,
/// so it travels with the handle rather than with the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInputSpec {
    pub width: u32,
    pub height: u32,
    pub mean: [f32; 3],
    pub std: [f32; 3],
    pub resize_mode: ResizeMode,
}

impl ModelInputSpec {
    pub fn imagenet(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            resize_mode: ResizeMode::Stretch,
        }
    }

    /// Plain `[0, 1]` scaling with no per-channel shift.
    pub fn unit(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mean: [0.0; 3],
            std: [1.0; 3],
            resize_mode: ResizeMode::Stretch,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    pub input: ModelInputSpec,
    pub output_kind: OutputKind,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("assets/models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("assets/models/imagenet_labels.txt"),
            input: ModelInputSpec::imagenet(224, 224),
            output_kind: OutputKind::Logits,
        }
    }
}
