use crate::image_classifier::models::model_config::ModelConfig;
use crate::presenter::DEFAULT_TOP_K;
use chrono::Offset;
use std::path::PathBuf;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frontend {
    Gui,
    Console,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoggerBackend {
    Console,
    Tracing,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifierBackend {
    TractOnnx,
    Fake,
}

/// `Scoped` opens and releases the model on every request. `Cached` keeps a
/// single handle open until shutdown.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelLifecycle {
    Scoped,
    Cached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub assets_dir: PathBuf,
    pub sample_count: u32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            sample_count: 11,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub frontend: Frontend,
    pub logger_backend: LoggerBackend,
    pub log_level: tracing::Level,
    pub logger_timezone: chrono::FixedOffset,
    pub top_k: usize,
    pub classifier_backend: ClassifierBackend,
    pub model_lifecycle: ModelLifecycle,
    pub model: ModelConfig,
    pub samples: SampleConfig,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frontend: Frontend::Gui,
            logger_backend: LoggerBackend::Tracing,
            log_level: tracing::Level::INFO,
            logger_timezone: local_timezone(),
            top_k: DEFAULT_TOP_K,
            classifier_backend: ClassifierBackend::TractOnnx,
            model_lifecycle: ModelLifecycle::Scoped,
            model: ModelConfig::default(),
            samples: SampleConfig::default(),
            window_title: "Image Classification".to_string(),
            window_size: [480.0, 720.0],
        }
    }
}

fn local_timezone() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
