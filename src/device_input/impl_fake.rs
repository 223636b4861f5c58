use crate::device_input::interface::{DeviceInput, UserAction};
use std::sync::mpsc::{channel, Receiver};

/// Replays a fixed list of actions to each subscriber.
pub struct DeviceInputFake {
    actions: Vec<UserAction>,
}

impl DeviceInputFake {
    pub fn new(actions: Vec<UserAction>) -> Self {
        Self { actions }
    }
}

impl DeviceInput for DeviceInputFake {
    fn events(&self) -> Receiver<UserAction> {
        let (tx, rx) = channel();
        for action in &self.actions {
            let _ = tx.send(action.clone());
        }
        rx
    }
}
