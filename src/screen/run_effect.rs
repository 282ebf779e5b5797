use crate::device_display::interface::{DeviceDisplay, DisplayEvent};
use crate::image_classifier::interface::ImageClassifier;
use crate::image_preprocessor::preprocess;
use crate::library::logger::interface::Logger;
use crate::photo_picker::interface::PhotoPicker;
use crate::screen::core::{Effect, Msg};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    device_display: Arc<dyn DeviceDisplay + Send + Sync>,
    photo_picker: Arc<dyn PhotoPicker + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_display: Arc<dyn DeviceDisplay + Send + Sync>,
        photo_picker: Arc<dyn PhotoPicker + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            logger,
            device_display,
            photo_picker,
            image_classifier,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Msg>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeDisplay => {
                let events = self.device_display.events();
                for event in events.iter() {
                    if event_sender.send(Msg::DisplayEvent(event)).is_err() {
                        return;
                    }
                }
                // A display that stops producing events is gone.
                let _ = event_sender.send(Msg::DisplayEvent(DisplayEvent::Closed));
            }
            Effect::ChooseSource => {
                let chosen = self.photo_picker.choose_source();
                let _ = event_sender.send(Msg::SourceChosen(chosen));
            }
            Effect::PickPhoto { source } => {
                let picked = self.photo_picker.pick(source);
                let _ = event_sender.send(Msg::PhotoPicked(picked));
            }
            Effect::Preprocess { photo } => {
                let buffer = preprocess(&photo).map(Arc::new);
                let _ = event_sender.send(Msg::PreprocessDone(buffer));
            }
            Effect::Classify { buffer } => {
                let classifications = self
                    .image_classifier
                    .classify(&buffer.pixels, buffer.orientation);
                let _ = event_sender.send(Msg::ClassifyDone(classifications));
            }
        }
    }
}
