use crate::device_display::gui_window::Gui;
use crate::device_display::interface::{DeviceDisplay, DisplayEvent, View};
use std::error::Error;
use std::sync::mpsc::Receiver;

pub struct DeviceDisplayGui {
    gui: Gui,
}

impl DeviceDisplayGui {
    pub fn new(gui: Gui) -> Self {
        Self { gui }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn render(&self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.gui.set_view(view)
    }

    fn events(&self) -> Receiver<DisplayEvent> {
        self.gui.subscribe()
    }
}
