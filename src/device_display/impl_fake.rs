use crate::device_display::interface::{DeviceDisplay, DisplayEvent, View};
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Records every rendered view; events are injected with `send`.
pub struct DeviceDisplayFake {
    views: Mutex<Vec<View>>,
    sender: Sender<DisplayEvent>,
    receiver: Mutex<Option<Receiver<DisplayEvent>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            views: Mutex::new(Vec::new()),
            sender,
            receiver: Mutex::new(Some(receiver)),
        }
    }

    pub fn send(&self, event: DisplayEvent) {
        let _ = self.sender.send(event);
    }

    pub fn views(&self) -> Vec<View> {
        self.views.lock().map(|views| views.clone()).unwrap_or_default()
    }

    pub fn last_view(&self) -> Option<View> {
        self.views().pop()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn render(&self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.views
            .lock()
            .map_err(|_| "fake display poisoned")?
            .push(view.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<DisplayEvent> {
        self.receiver
            .lock()
            .ok()
            .and_then(|mut receiver| receiver.take())
            .unwrap_or_else(|| channel().1)
    }
}
