use std::path::PathBuf;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    ShowGallery,
    OpenPath(PathBuf),
    InputTestData,
    RunInference,
    Quit,
}

pub trait DeviceInput: Send + Sync {
    fn events(&self) -> Receiver<UserAction>;
}
