use crate::image_classifier::interface::InferenceError;
use crate::image_classifier::models::model_config::{ModelInputSpec, ResizeMode};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::tract_ndarray::Array4;

pub fn resize_image(image: &DynamicImage, width: u32, height: u32, mode: ResizeMode) -> RgbImage {
    let (w, h) = (image.width(), image.height());
    let same_aspect = u64::from(w) * u64::from(height) == u64::from(h) * u64::from(width);

    if mode == ResizeMode::Stretch || same_aspect {
        return image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8();
    }

    // Letterbox: scale to fit, then center on a black canvas.
    let scale = (width as f32 / w as f32).min(height as f32 / h as f32);
    let new_w = ((w as f32 * scale) as u32).clamp(1, width);
    let new_h = ((h as f32 * scale) as u32).clamp(1, height);

    let scaled = image
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::new(width, height);
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::overlay(&mut padded, &scaled, i64::from(x_offset), i64::from(y_offset));

    padded
}

fn rgb_to_tensor(rgb: &RgbImage, spec: &ModelInputSpec) -> Array4<f32> {
    Array4::from_shape_fn(
        (1, 3, rgb.height() as usize, rgb.width() as usize),
        |(_, c, y, x)| {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            (pixel[c] as f32 / 255.0 - spec.mean[c]) / spec.std[c]
        },
    )
}

/// Resizes and normalizes an image into the `[1, 3, H, W]` layout the model reads.
pub fn image_to_tensor(
    image: &DynamicImage,
    spec: &ModelInputSpec,
) -> Result<Array4<f32>, InferenceError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(InferenceError::ImageConversion(format!(
            "image has zero size ({}x{})",
            image.width(),
            image.height()
        )));
    }

    if spec.width == 0 || spec.height == 0 {
        return Err(InferenceError::ImageConversion(format!(
            "model input has zero size ({}x{})",
            spec.width, spec.height
        )));
    }

    if spec.std.iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return Err(InferenceError::ImageConversion(format!(
            "invalid normalization std {:?}",
            spec.std
        )));
    }

    let resized = resize_image(image, spec.width, spec.height, spec.resize_mode);

    Ok(rgb_to_tensor(&resized, spec))
}
