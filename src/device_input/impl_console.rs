use crate::device_input::interface::{DeviceInput, UserAction};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub const HELP: &str = "commands: gallery | open <path> | sample | run | quit";

pub fn parse_command(line: &str) -> Option<UserAction> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match (command, argument) {
        ("gallery", "") => Some(UserAction::ShowGallery),
        ("open", path) if !path.is_empty() => Some(UserAction::OpenPath(PathBuf::from(path))),
        ("sample", "") => Some(UserAction::InputTestData),
        ("run", "") => Some(UserAction::RunInference),
        ("quit", "") | ("exit", "") => Some(UserAction::Quit),
        _ => None,
    }
}

/// Reads commands from stdin, one per line. End of input quits.
pub struct DeviceInputConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceInputConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("device_input").with_namespace("console"),
        }
    }
}

impl DeviceInput for DeviceInputConsole {
    fn events(&self) -> Receiver<UserAction> {
        let (tx, rx) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            println!("{}", HELP);
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("Reading stdin failed: {}", e));
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Some(action) => {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                    None => println!("unknown command '{}'; {}", line.trim(), HELP),
                }
            }
            let _ = tx.send(UserAction::Quit);
        });

        rx
    }
}
