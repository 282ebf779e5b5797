use crate::device_display::interface::DisplayEvent;
use crate::image_classifier::interface::{Classification, ClassificationError};
use crate::image_preprocessor::{PixelBuffer, PreprocessError};
use crate::photo::{Photo, PhotoSource};
use crate::result_formatter::format_classifications;
use std::error::Error;
use std::sync::Arc;

pub const PROMPT_TEXT: &str = "Take a photo to classify.";
pub const CLASSIFYING_TEXT: &str = "Classifying...";

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub phase: Phase,
    pub camera_available: bool,
    pub photo: Option<Arc<PixelBuffer>>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PickingPhoto(Picking),
    Classifying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picking {
    ChoosingSource,
    Presenting(PhotoSource),
}

#[derive(Debug)]
pub enum Msg {
    DisplayEvent(DisplayEvent),
    SourceChosen(Result<Option<PhotoSource>, Box<dyn Error + Send + Sync>>),
    PhotoPicked(Result<Option<Photo>, Box<dyn Error + Send + Sync>>),
    PreprocessDone(Result<Arc<PixelBuffer>, PreprocessError>),
    ClassifyDone(Result<Vec<Classification>, ClassificationError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeDisplay,
    ChooseSource,
    PickPhoto { source: PhotoSource },
    Preprocess { photo: Arc<Photo> },
    Classify { buffer: Arc<PixelBuffer> },
}

pub fn init(camera_available: bool) -> (Model, Vec<Effect>) {
    (
        Model {
            phase: Phase::Idle,
            camera_available,
            photo: None,
            text: PROMPT_TEXT.to_string(),
        },
        vec![Effect::SubscribeDisplay],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model.phase, msg) {
        (Phase::Idle, Msg::DisplayEvent(DisplayEvent::TakePicture)) => {
            if model.camera_available {
                (
                    Model {
                        phase: Phase::PickingPhoto(Picking::ChoosingSource),
                        ..model
                    },
                    vec![Effect::ChooseSource],
                )
            } else {
                present(model, PhotoSource::Library)
            }
        }

        // Source selection
        (Phase::PickingPhoto(Picking::ChoosingSource), Msg::SourceChosen(Ok(Some(source)))) => {
            present(model, source)
        }
        (Phase::PickingPhoto(Picking::ChoosingSource), Msg::SourceChosen(Ok(None))) => {
            (idle(model), vec![])
        }
        (Phase::PickingPhoto(Picking::ChoosingSource), Msg::SourceChosen(Err(e))) => (
            with_text(idle(model), format!("Unable to pick photo.\n{}", e)),
            vec![],
        ),

        // Picker
        (Phase::PickingPhoto(Picking::Presenting(_)), Msg::PhotoPicked(Ok(Some(photo)))) => (
            Model {
                phase: Phase::Classifying,
                photo: None,
                text: CLASSIFYING_TEXT.to_string(),
                ..model
            },
            vec![Effect::Preprocess {
                photo: Arc::new(photo),
            }],
        ),
        (Phase::PickingPhoto(Picking::Presenting(_)), Msg::PhotoPicked(Ok(None))) => {
            (idle(model), vec![])
        }
        (Phase::PickingPhoto(Picking::Presenting(_)), Msg::PhotoPicked(Err(e))) => (
            with_text(idle(model), format!("Unable to pick photo.\n{}", e)),
            vec![],
        ),

        // Classification
        (Phase::Classifying, Msg::PreprocessDone(Ok(buffer))) => (
            Model {
                photo: Some(buffer.clone()),
                ..model
            },
            vec![Effect::Classify { buffer }],
        ),
        (Phase::Classifying, Msg::PreprocessDone(Err(e))) => (
            with_text(idle(model), format!("Unable to decode image.\n{}", e)),
            vec![],
        ),
        (Phase::Classifying, Msg::ClassifyDone(Ok(classifications))) => (
            with_text(idle(model), format_classifications(&classifications)),
            vec![],
        ),
        (Phase::Classifying, Msg::ClassifyDone(Err(e))) => (
            with_text(idle(model), format!("Unable to classify image.\n{}", e)),
            vec![],
        ),

        _ => (model, vec![]),
    }
}

fn present(model: Model, source: PhotoSource) -> (Model, Vec<Effect>) {
    (
        Model {
            phase: Phase::PickingPhoto(Picking::Presenting(source)),
            ..model
        },
        vec![Effect::PickPhoto { source }],
    )
}

fn idle(model: Model) -> Model {
    Model {
        phase: Phase::Idle,
        ..model
    }
}

fn with_text(model: Model, text: String) -> Model {
    Model { text, ..model }
}
