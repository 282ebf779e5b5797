use crate::device_display::gui_window::Gui;
use crate::prompt::interface::Prompt;
use std::error::Error;

pub struct PromptGui {
    gui: Gui,
}

impl PromptGui {
    pub fn new(gui: Gui) -> Self {
        Self { gui }
    }
}

impl Prompt for PromptGui {
    fn choose(
        &self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        self.gui.ask(title, options)
    }
}
