use crate::image_preprocessor::PixelBuffer;
use std::error::Error;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    /// The camera button was pressed.
    TakePicture,
    /// The user closed the screen.
    Closed,
}

/// Everything the screen shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub text: String,
    pub photo: Option<Arc<PixelBuffer>>,
    pub can_take_picture: bool,
}

impl View {
    pub fn shows_same_photo(&self, photo: Option<&Arc<PixelBuffer>>) -> bool {
        match (&self.photo, photo) {
            (Some(current), Some(other)) => Arc::ptr_eq(current, other),
            (None, None) => true,
            _ => false,
        }
    }
}

pub trait DeviceDisplay: Send + Sync {
    fn render(&self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
    /// Subscribes to user input. Meant to be called once.
    fn events(&self) -> Receiver<DisplayEvent>;
}
