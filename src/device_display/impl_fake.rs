use crate::device_display::interface::{DeviceDisplay, Screen};
use std::error::Error;

/// Records every screen it is asked to show.
pub struct DeviceDisplayFake {
    pub screens: Vec<Screen>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    pub fn last_screen(&self) -> Option<&Screen> {
        self.screens.last()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.screens.push(screen.clone());
        Ok(())
    }
}
