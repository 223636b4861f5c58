use crate::config::Config;
use crate::device_input::interface::UserAction;
use crate::image_classifier::interface::{CategoryScore, InferenceError};
use crate::image_source::interface::{ImageSourceError, RasterImage};
use crate::presenter::present_text;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Inference {
    Idle,
    Running {
        request_id: u64,
        image_name: String,
        started: Instant,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub current_image: Option<RasterImage>,
    pub inference: Inference,
    pub next_request_id: u64,
    pub result_text: String,
    pub status: String,
    pub exiting: bool,
}

impl Model {
    pub fn is_running(&self) -> bool {
        matches!(self.inference, Inference::Running { .. })
    }
}

/// Everything a worker needs for one classification, captured at dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyRequest {
    pub request_id: u64,
    pub image: RasterImage,
}

#[derive(Debug)]
pub enum Msg {
    UserAction(UserAction),
    ImagePicked(Result<Option<RasterImage>, ImageSourceError>),
    ImageLoaded(Result<RasterImage, ImageSourceError>),
    ClassifyDone {
        request_id: u64,
        result: Result<Vec<CategoryScore>, InferenceError>,
    },
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::ClassifyDone {
                request_id,
                result: Ok(scores),
            } => format!(
                "ClassifyDone {{ request_id: {}, result: Ok({} categories) }}",
                request_id,
                scores.len()
            ),
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeUserInput,
    PickImage,
    LoadImage { path: PathBuf },
    LoadSample,
    Classify(ClassifyRequest),
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            current_image: None,
            inference: Inference::Idle,
            next_request_id: 1,
            result_text: String::new(),
            status: "Pick an image or load test data".to_string(),
            exiting: false,
        },
        vec![Effect::SubscribeUserInput],
    )
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::UserAction(UserAction::ShowGallery) => (model, vec![Effect::PickImage]),
        Msg::UserAction(UserAction::OpenPath(path)) => (model, vec![Effect::LoadImage { path }]),
        Msg::UserAction(UserAction::InputTestData) => (model, vec![Effect::LoadSample]),
        Msg::UserAction(UserAction::RunInference) => start_inference(model),
        Msg::UserAction(UserAction::Quit) => (
            Model {
                exiting: true,
                status: "Exiting".to_string(),
                ..model
            },
            vec![],
        ),

        // Cancelled picker keeps whatever was selected before.
        Msg::ImagePicked(Ok(None)) => (model, vec![]),
        Msg::ImagePicked(Ok(Some(image))) | Msg::ImageLoaded(Ok(image)) => {
            let status = format!(
                "Loaded {} ({}x{})",
                image.name(),
                image.width(),
                image.height()
            );
            (
                Model {
                    current_image: Some(image),
                    status,
                    ..model
                },
                vec![],
            )
        }
        Msg::ImagePicked(Err(e)) | Msg::ImageLoaded(Err(e)) => (
            Model {
                current_image: None,
                status: format!("No image available: {}", e),
                ..model
            },
            vec![],
        ),

        Msg::ClassifyDone { request_id, result } => {
            finish_inference(config, model, request_id, result)
        }
    }
}

fn start_inference(model: Model) -> (Model, Vec<Effect>) {
    let image = match &model.current_image {
        Some(image) => image.clone(),
        None => {
            return (
                Model {
                    status: "No image selected".to_string(),
                    ..model
                },
                vec![],
            )
        }
    };

    let request_id = model.next_request_id;

    (
        Model {
            inference: Inference::Running {
                request_id,
                image_name: image.name().to_string(),
                started: Instant::now(),
            },
            next_request_id: request_id + 1,
            result_text: String::new(),
            status: format!("Classifying {}...", image.name()),
            ..model
        },
        vec![Effect::Classify(ClassifyRequest { request_id, image })],
    )
}

fn finish_inference(
    config: &Config,
    model: Model,
    request_id: u64,
    result: Result<Vec<CategoryScore>, InferenceError>,
) -> (Model, Vec<Effect>) {
    let (image_name, started) = match &model.inference {
        Inference::Running {
            request_id: running,
            image_name,
            started,
        } if *running == request_id => (image_name.clone(), *started),
        // Stale or unexpected result.
        _ => return (model, vec![]),
    };

    let (result_text, status) = match result {
        Ok(scores) => (
            present_text(&scores, config.top_k),
            format!(
                "{}: {} categories, took {} ms",
                image_name,
                scores.len(),
                started.elapsed().as_millis()
            ),
        ),
        Err(e) => (String::new(), format!("Classification failed: {}", e)),
    };

    (
        Model {
            inference: Inference::Idle,
            result_text,
            status,
            ..model
        },
        vec![],
    )
}
