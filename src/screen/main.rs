use crate::device_display::interface::{DeviceDisplay, DisplayEvent};
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::photo_picker::interface::PhotoPicker;
use crate::screen::core::{init, transition, Effect, Model, Msg};
use crate::screen::render::view;
use crate::screen::run_effect::RunEffect;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// The single classification screen: a photo, a text area and a camera button.
#[derive(Clone)]
pub struct Screen {
    logger: Arc<dyn Logger + Send + Sync>,
    device_display: Arc<dyn DeviceDisplay + Send + Sync>,
    photo_picker: Arc<dyn PhotoPicker + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl Screen {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_display: Arc<dyn DeviceDisplay + Send + Sync>,
        photo_picker: Arc<dyn PhotoPicker + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("screen"),
            device_display,
            photo_picker,
            image_classifier,
        }
    }

    /// Runs until the display is closed.
    pub fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let transition_logger = self.logger.clone();
        let render_logger = self.logger.clone();
        let device_display = self.device_display.clone();
        let run_effect = RunEffect::new(
            self.logger.clone(),
            self.device_display.clone(),
            self.photo_picker.clone(),
            self.image_classifier.clone(),
        );

        let state_machine = StateMachine::new(
            init(self.photo_picker.is_camera_available()),
            move |model: Model, msg: Msg| {
                let _ = transition_logger.info(&format!("Processing msg: {:?}", msg));
                let (new_model, effects) = transition(model, msg);
                let _ = transition_logger.info(&format!(
                    "New phase: {:?}, effects: {:?}",
                    new_model.phase, effects
                ));
                (new_model, effects)
            },
            move |model: &Model| {
                if let Err(e) = device_display.render(&view(model)) {
                    let _ = render_logger.error(&format!("Failed to render: {}", e));
                }
            },
            move |effect: Effect, event_sender: Sender<Msg>| {
                run_effect.run_effect(effect, event_sender)
            },
        )
        .stop_when(|msg| matches!(msg, Msg::DisplayEvent(DisplayEvent::Closed)));

        let final_model = state_machine.run()?;
        self.logger
            .info(&format!("Screen closed in phase {:?}", final_model.phase))?;

        Ok(())
    }
}
