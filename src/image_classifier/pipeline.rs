use crate::image_classifier::interface::{CategoryScore, ClassifierHandle, InferenceError};
use crate::image_classifier::tract::image::image_to_tensor;
use crate::image_source::interface::RasterImage;

/// Converts the image for this handle's model and runs it exactly once.
pub fn run_once(
    handle: &dyn ClassifierHandle,
    image: &RasterImage,
) -> Result<Vec<CategoryScore>, InferenceError> {
    let input = image_to_tensor(image.image(), handle.input_spec())?;
    handle.infer(input)
}
