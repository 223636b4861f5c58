use super::{core::Effect, main::App};
use crate::app::core::{init, transition, Model, Msg};

impl App {
    /// Owns the model until the user quits. Effects run on worker threads and
    /// report back through the message channel.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();

        self.render(&current_model)?;
        self.execute_effects(effects);

        while !current_model.exiting {
            let msg = self.recv()?;
            let (new_model, effects) = self.step(current_model, msg)?;
            current_model = new_model;
            self.execute_effects(effects);
        }

        let _ = self.logger.info("Shutting down");
        self.image_classifier.shutdown();

        Ok(())
    }

    /// Applies one message and renders the result without running effects.
    pub fn step(
        &self,
        model: Model,
        msg: Msg,
    ) -> Result<(Model, Vec<Effect>), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info(&format!("msg: {}", msg.to_display_string()));

        let (new_model, effects) = transition(&self.config, model, msg);

        let _ = self.logger.info(&format!(
            "status: {:?}, running: {}, effects: {:?}",
            new_model.status,
            new_model.is_running(),
            effects
        ));

        self.render(&new_model)?;

        Ok((new_model, effects))
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.execute_effect(effect));
        }
    }
}
