use crate::device_display::interface::{DeviceDisplay, DisplayEvent, View};
use crate::terminal::Terminal;
use std::error::Error;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

pub struct DeviceDisplayConsole {
    terminal: Arc<Terminal>,
    shown: Mutex<Option<View>>,
}

impl DeviceDisplayConsole {
    pub fn new(terminal: Arc<Terminal>) -> Self {
        Self {
            terminal,
            shown: Mutex::new(None),
        }
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn render(&self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut shown = self.shown.lock().map_err(|_| "console display poisoned")?;

        let previous = shown.take();
        let photo_changed = previous
            .as_ref()
            .map_or(true, |previous| !previous.shows_same_photo(view.photo.as_ref()));
        let text_changed = previous
            .as_ref()
            .map_or(true, |previous| previous.text != view.text);
        let became_ready = view.can_take_picture
            && previous
                .as_ref()
                .map_or(true, |previous| !previous.can_take_picture);

        if photo_changed {
            if let Some(photo) = &view.photo {
                let (width, height) = photo.upright_dimensions();
                println!("┌ photo {}x{}", width, height);
            }
        }

        if text_changed {
            println!("│ {}", view.text.replace('\n', "\n│ "));
        }

        if became_ready {
            println!("└ Press Enter to take a photo, q to quit.");
        }

        *shown = Some(view.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<DisplayEvent> {
        self.terminal.subscribe()
    }
}
