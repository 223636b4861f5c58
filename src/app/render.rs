use super::main::App;
use crate::app::core::Model;
use crate::device_display::interface::Screen;

pub fn to_screen(model: &Model) -> Screen {
    Screen {
        preview: model.current_image.clone(),
        result_text: model.result_text.clone(),
        status: model.status.clone(),
        run_enabled: model.current_image.is_some() && !model.is_running(),
    }
}

impl App {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let screen = to_screen(model);
        self.device_display
            .lock()
            .map_err(|_| "display lock poisoned")?
            .show(&screen)
    }
}
