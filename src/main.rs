use app::main::App;
use config::{ClassifierBackend, Config, Frontend, LoggerBackend, ModelLifecycle};
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_input::impl_console::DeviceInputConsole;
use image_classifier::impl_cached::ImageClassifierCached;
use image_classifier::impl_fake::ClassifierModelFake;
use image_classifier::impl_scoped::ImageClassifierScoped;
use image_classifier::impl_tract_onnx::ClassifierModelTractOnnx;
use image_classifier::interface::{ClassifierModel, ImageClassifier};
use image_source::impl_file_system::ImageSourceFileSystem;
use library::logger::impl_console::LoggerConsole;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

mod app;
mod config;
mod device_display;
mod device_input;
mod image_classifier;
mod image_source;
mod library;
mod presenter;

fn new_logger(config: &Config) -> Arc<dyn Logger + Send + Sync> {
    match config.logger_backend {
        LoggerBackend::Console => Arc::new(LoggerConsole::new(config.logger_timezone)),
        LoggerBackend::Tracing => {
            tracing_subscriber::fmt()
                .with_max_level(config.log_level)
                .init();
            Arc::new(LoggerTracing::new())
        }
    }
}

fn new_image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ImageClassifier + Send + Sync> {
    let model: Arc<dyn ClassifierModel + Send + Sync> = match config.classifier_backend {
        ClassifierBackend::TractOnnx => Arc::new(ClassifierModelTractOnnx::new(
            config.model.clone(),
            logger.clone(),
        )),
        ClassifierBackend::Fake => Arc::new(ClassifierModelFake::new(logger.clone())),
    };

    match config.model_lifecycle {
        ModelLifecycle::Scoped => Arc::new(ImageClassifierScoped::new(model, logger)),
        ModelLifecycle::Cached => Arc::new(ImageClassifierCached::new(model, logger)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = new_logger(&config);

    let image_source = Arc::new(ImageSourceFileSystem::new(
        config.samples.clone(),
        logger.clone(),
    ));

    let image_classifier = new_image_classifier(&config, logger.clone());

    match config.frontend {
        Frontend::Gui => {
            let gui = DeviceDisplayGui::new();

            let app = App::new(
                config.clone(),
                logger.clone(),
                Arc::new(Mutex::new(gui.clone())),
                Arc::new(gui.clone()),
                image_source,
                image_classifier,
            );

            let app_thread = std::thread::spawn(move || app.run().map_err(|e| e.to_string()));

            gui.run_window(&config.window_title, config.window_size)?;

            match app_thread.join() {
                Ok(result) => result?,
                Err(_) => return Err("app loop panicked".into()),
            }
        }
        Frontend::Console => {
            let app = App::new(
                config.clone(),
                logger.clone(),
                Arc::new(Mutex::new(DeviceDisplayConsole::new())),
                Arc::new(DeviceInputConsole::new(logger.clone())),
                image_source,
                image_classifier,
            );

            app.run()?;
        }
    }

    Ok(())
}
