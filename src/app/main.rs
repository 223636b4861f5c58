use crate::app::core::Msg;
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::device_input::interface::DeviceInput;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_source::interface::ImageSource;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub device_input: Arc<dyn DeviceInput + Send + Sync>,
    pub image_source: Arc<dyn ImageSource + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    msg_sender: Sender<Msg>,
    msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_input: Arc<dyn DeviceInput + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("app"),
            device_display,
            device_input,
            image_source,
            image_classifier,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    pub fn send(&self, msg: Msg) {
        if self.msg_sender.send(msg).is_err() {
            let _ = self.logger.error("App loop is gone, dropping message");
        }
    }

    pub fn recv(&self) -> Result<Msg, Box<dyn std::error::Error + Send + Sync>> {
        let receiver = self
            .msg_receiver
            .lock()
            .map_err(|_| "message receiver lock poisoned")?;
        Ok(receiver.recv()?)
    }
}
