use super::main::App;
use crate::app::core::{Effect, Msg};

impl App {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeUserInput => {
                let events = self.device_input.events();
                while let Ok(action) = events.recv() {
                    self.send(Msg::UserAction(action));
                }
            }
            Effect::PickImage => {
                let picked = self.image_source.pick_image();
                self.send(Msg::ImagePicked(picked));
            }
            Effect::LoadImage { path } => {
                let loaded = self.image_source.load_path(&path);
                self.send(Msg::ImageLoaded(loaded));
            }
            Effect::LoadSample => {
                let loaded = self.image_source.load_sample();
                self.send(Msg::ImageLoaded(loaded));
            }
            Effect::Classify(request) => {
                let result = self.image_classifier.classify(&request.image);
                self.send(Msg::ClassifyDone {
                    request_id: request.request_id,
                    result,
                });
            }
        }
    }
}
