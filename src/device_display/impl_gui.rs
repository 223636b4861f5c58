use crate::device_display::interface::{DeviceDisplay, Screen};
use crate::device_input::interface::{DeviceInput, UserAction};
use crate::image_source::interface::RasterImage;
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

type Subscribers = Arc<Mutex<Vec<Sender<UserAction>>>>;

fn broadcast(subscribers: &Subscribers, action: UserAction) {
    if let Ok(mut subscribers) = subscribers.lock() {
        subscribers.retain(|tx| tx.send(action.clone()).is_ok());
    }
}

struct PreviewTexture {
    image: RasterImage,
    texture: egui::TextureHandle,
}

struct MainWindow {
    screen: Arc<Mutex<Screen>>,
    subscribers: Subscribers,
    preview: Option<PreviewTexture>,
}

impl MainWindow {
    fn send(&self, action: UserAction) {
        broadcast(&self.subscribers, action);
    }

    fn sync_preview(&mut self, ctx: &egui::Context, image: Option<&RasterImage>) {
        let image = match image {
            Some(image) => image,
            None => {
                self.preview = None;
                return;
            }
        };

        if matches!(&self.preview, Some(preview) if &preview.image == image) {
            return;
        }

        let rgba = image.image().to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR);

        self.preview = Some(PreviewTexture {
            image: image.clone(),
            texture,
        });
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = match self.screen.lock() {
            Ok(screen) => screen.clone(),
            Err(_) => return,
        };

        self.sync_preview(ctx, screen.preview.as_ref());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Show gallery").clicked() {
                    self.send(UserAction::ShowGallery);
                }
                if ui.button("Input test data").clicked() {
                    self.send(UserAction::InputTestData);
                }
                if ui
                    .add_enabled(screen.run_enabled, egui::Button::new("Run"))
                    .clicked()
                {
                    self.send(UserAction::RunInference);
                }
            });

            ui.separator();

            ui.vertical_centered(|ui| match &self.preview {
                Some(preview) => {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::from_handle(&preview.texture))
                            .max_height(320.0)
                            .maintain_aspect_ratio(true),
                    );
                }
                None => {
                    ui.label("No image selected");
                }
            });

            ui.label(&screen.status);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.monospace(&screen.result_text);
            });
        });
    }
}

/// Native window front end. Implements both the display and the input side,
/// so the same value is handed to the app twice.
#[derive(Clone)]
pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
    context: Arc<Mutex<Option<egui::Context>>>,
    subscribers: Subscribers,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
            context: Arc::new(Mutex::new(None)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Blocks the calling thread until the window is closed, then sends
    /// [`UserAction::Quit`].
    pub fn run_window(&self, title: &str, size: [f32; 2]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(size)
                .with_min_inner_size([320.0, 400.0]),
            ..Default::default()
        };

        let window = MainWindow {
            screen: self.screen.clone(),
            subscribers: self.subscribers.clone(),
            preview: None,
        };
        let context = self.context.clone();

        let result = eframe::run_native(
            title,
            options,
            Box::new(move |cc| {
                if let Ok(mut slot) = context.lock() {
                    *slot = Some(cc.egui_ctx.clone());
                }
                Box::new(window)
            }),
        );

        broadcast(&self.subscribers, UserAction::Quit);

        result.map_err(|e| e.to_string().into())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self
            .screen
            .lock()
            .map_err(|_| "screen lock poisoned")? = screen.clone();

        if let Ok(context) = self.context.lock() {
            if let Some(ctx) = context.as_ref() {
                ctx.request_repaint();
            }
        }

        Ok(())
    }
}

impl DeviceInput for DeviceDisplayGui {
    fn events(&self) -> Receiver<UserAction> {
        let (tx, rx) = channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }
}
