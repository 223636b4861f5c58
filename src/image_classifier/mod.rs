pub mod impl_cached;
pub mod impl_fake;
pub mod impl_scoped;
pub mod impl_tract_onnx;
pub mod interface;
pub mod models;
pub mod pipeline;
pub mod tract;
