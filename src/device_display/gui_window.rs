use crate::device_display::interface::{DisplayEvent, View};
use crate::image_preprocessor::PixelBuffer;
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

struct PendingPrompt {
    title: String,
    options: Vec<String>,
    reply: Sender<Option<usize>>,
}

#[derive(Default)]
struct GuiState {
    view: View,
    events: Option<Sender<DisplayEvent>>,
    prompt: Option<PendingPrompt>,
    ctx: Option<egui::Context>,
}

impl GuiState {
    fn request_repaint(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }

    fn send_event(&self, event: DisplayEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}

/// State shared between the screen thread and the egui window.
#[derive(Clone, Default)]
pub struct Gui {
    state: Arc<Mutex<GuiState>>,
}

impl Gui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock().map_err(|_| "gui state poisoned")?;
        state.view = view.clone();
        state.request_repaint();
        Ok(())
    }

    pub fn subscribe(&self) -> Receiver<DisplayEvent> {
        let (sender, receiver) = channel();
        if let Ok(mut state) = self.state.lock() {
            state.events = Some(sender);
        }
        receiver
    }

    pub fn ask(
        &self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        let (reply, answer) = channel();
        {
            let mut state = self.state.lock().map_err(|_| "gui state poisoned")?;
            state.prompt = Some(PendingPrompt {
                title: title.to_string(),
                options: options.to_vec(),
                reply,
            });
            state.request_repaint();
        }

        Ok(answer.recv().map_err(|_| "window closed")?)
    }

    /// Runs the window on the calling thread until it is closed.
    pub fn run_window(&self, title: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 640.0])
                .with_min_inner_size([320.0, 400.0]),
            ..Default::default()
        };

        let gui = self.clone();
        let result = eframe::run_native(
            title,
            options,
            Box::new(move |cc| {
                if let Ok(mut state) = gui.state.lock() {
                    state.ctx = Some(cc.egui_ctx.clone());
                }
                Box::new(ScreenWindow {
                    gui,
                    texture: None,
                    shown_photo: None,
                })
            }),
        );

        if let Ok(mut state) = self.state.lock() {
            state.ctx = None;
            state.prompt = None;
            state.send_event(DisplayEvent::Closed);
        }

        result.map_err(|e| e.to_string().into())
    }
}

struct ScreenWindow {
    gui: Gui,
    texture: Option<egui::TextureHandle>,
    shown_photo: Option<Arc<PixelBuffer>>,
}

impl ScreenWindow {
    fn sync_texture(&mut self, ctx: &egui::Context, photo: Option<&Arc<PixelBuffer>>) {
        let Some(photo) = photo else {
            self.texture = None;
            self.shown_photo = None;
            return;
        };

        if self
            .shown_photo
            .as_ref()
            .is_some_and(|shown| Arc::ptr_eq(shown, photo))
        {
            return;
        }

        let upright = photo.upright();
        let size = [upright.width() as usize, upright.height() as usize];
        let image = egui::ColorImage::from_rgb(size, upright.as_raw());

        self.texture = Some(ctx.load_texture("photo", image, egui::TextureOptions::LINEAR));
        self.shown_photo = Some(photo.clone());
    }
}

impl eframe::App for ScreenWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let gui = self.gui.clone();
        let Ok(mut state) = gui.state.lock() else {
            return;
        };

        let photo = state.view.photo.clone();
        self.sync_texture(ctx, photo.as_ref());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Cat vs Dog");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let enabled = state.view.can_take_picture && state.prompt.is_none();
                    if ui
                        .add_enabled(enabled, egui::Button::new("📷 Photo"))
                        .clicked()
                    {
                        state.send_event(DisplayEvent::TakePicture);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("classification")
            .min_height(80.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&state.view.text)
                        .monospace()
                        .size(18.0),
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::new(
                            texture.id(),
                            texture.size_vec2(),
                        ))
                        .max_size(ui.available_size()),
                    );
                });
            }
        });

        let mut answer = None;
        if let Some(prompt) = &state.prompt {
            egui::Window::new(prompt.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                        for (index, option) in prompt.options.iter().enumerate() {
                            if ui.button(option.as_str()).clicked() {
                                answer = Some(Some(index));
                            }
                        }
                    });
                    ui.separator();
                    if ui.button("Cancel").clicked() {
                        answer = Some(None);
                    }
                });
        }

        if let Some(answer) = answer {
            if let Some(prompt) = state.prompt.take() {
                let _ = prompt.reply.send(answer);
            }
        }
    }
}
