use crate::image_source::interface::RasterImage;
use std::error::Error;

/// Everything the single screen shows at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub preview: Option<RasterImage>,
    pub result_text: String,
    pub status: String,
    /// False while an inference is running or no image is selected.
    pub run_enabled: bool,
}

pub trait DeviceDisplay: Send + Sync {
    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>>;
}
