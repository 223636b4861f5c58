use crate::device_display::interface::{DeviceDisplay, Screen};
use std::error::Error;

pub struct DeviceDisplayConsole {
    last_screen: Option<Screen>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_screen: None }
    }
}

pub fn render_screen(screen: &Screen) -> String {
    let preview = match &screen.preview {
        Some(image) => format!("{} ({}x{})", image.name(), image.width(), image.height()),
        None => "no image".to_string(),
    };
    let run = if screen.run_enabled { "ready" } else { "unavailable" };

    let mut lines = vec![
        "┌──────────────────────────────".to_string(),
        format!("│ image:  {}", preview),
        format!("│ run:    {}", run),
        format!("│ status: {}", screen.status),
    ];
    if !screen.result_text.is_empty() {
        lines.push("├──────────────────────────────".to_string());
        lines.extend(screen.result_text.lines().map(|line| format!("│ {}", line)));
    }
    lines.push("└──────────────────────────────".to_string());

    lines.join("\n")
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_screen.as_ref() == Some(screen) {
            return Ok(());
        }
        println!("{}", render_screen(screen));
        self.last_screen = Some(screen.clone());
        Ok(())
    }
}
