use crate::device_display::interface::DisplayEvent;
use crate::image_classifier::interface::{Classification, ClassificationError};
use crate::image_preprocessor::PreprocessError;
use crate::photo::PhotoSource;
use crate::screen::core::{init, transition, Effect, Model, Msg, Phase, Picking};
use crate::screen::render::view;
use crate::screen::tests::fixture::{pixel_buffer, png_photo};
use std::sync::Arc;

fn take_picture() -> Msg {
    Msg::DisplayEvent(DisplayEvent::TakePicture)
}

fn model_in(phase: Phase) -> Model {
    Model {
        phase,
        ..init(true).0
    }
}

fn showing_result() -> Model {
    Model {
        phase: Phase::Idle,
        camera_available: true,
        photo: Some(pixel_buffer()),
        text: "Classification:\n  (0.97) cat\n  (0.03) dog".to_string(),
    }
}

#[test]
fn test_init() {
    let (model, effects) = init(false);

    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.text, "Take a photo to classify.");
    assert_eq!(model.photo, None);
    assert_eq!(effects, vec![Effect::SubscribeDisplay]);
    assert!(view(&model).can_take_picture);
}

#[test]
fn test_take_picture_with_camera_asks_for_source() {
    let (model, effects) = transition(init(true).0, take_picture());

    assert_eq!(model.phase, Phase::PickingPhoto(Picking::ChoosingSource));
    assert_eq!(effects, vec![Effect::ChooseSource]);
    assert!(!view(&model).can_take_picture);
}

#[test]
fn test_take_picture_without_camera_goes_to_library() {
    let (model, effects) = transition(init(false).0, take_picture());

    assert_eq!(
        model.phase,
        Phase::PickingPhoto(Picking::Presenting(PhotoSource::Library))
    );
    assert_eq!(
        effects,
        vec![Effect::PickPhoto {
            source: PhotoSource::Library
        }]
    );
}

#[test]
fn test_chosen_source_is_presented() {
    let (model, effects) = transition(
        model_in(Phase::PickingPhoto(Picking::ChoosingSource)),
        Msg::SourceChosen(Ok(Some(PhotoSource::Camera))),
    );

    assert_eq!(
        model.phase,
        Phase::PickingPhoto(Picking::Presenting(PhotoSource::Camera))
    );
    assert_eq!(
        effects,
        vec![Effect::PickPhoto {
            source: PhotoSource::Camera
        }]
    );
}

#[test]
fn test_cancelling_leaves_result_and_photo_unchanged() {
    let before = showing_result();

    for (phase, msg) in [
        (
            Phase::PickingPhoto(Picking::ChoosingSource),
            Msg::SourceChosen(Ok(None)),
        ),
        (
            Phase::PickingPhoto(Picking::Presenting(PhotoSource::Library)),
            Msg::PhotoPicked(Ok(None)),
        ),
    ] {
        let (model, effects) = transition(Model { phase, ..before.clone() }, msg);

        assert_eq!(model, before);
        assert!(effects.is_empty());
    }
}

#[test]
fn test_picker_errors_are_shown() {
    let (model, effects) = transition(
        model_in(Phase::PickingPhoto(Picking::Presenting(PhotoSource::Camera))),
        Msg::PhotoPicked(Err("camera unplugged".into())),
    );

    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.text, "Unable to pick photo.\ncamera unplugged");
    assert!(effects.is_empty());

    let (model, _) = transition(
        model_in(Phase::PickingPhoto(Picking::ChoosingSource)),
        Msg::SourceChosen(Err("prompt closed".into())),
    );
    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.text, "Unable to pick photo.\nprompt closed");
}

#[test]
fn test_picked_photo_clears_previous_result() {
    let photo = png_photo("cat.png");
    let (model, effects) = transition(
        Model {
            phase: Phase::PickingPhoto(Picking::Presenting(PhotoSource::Library)),
            ..showing_result()
        },
        Msg::PhotoPicked(Ok(Some(photo.clone()))),
    );

    assert_eq!(model.phase, Phase::Classifying);
    assert_eq!(model.text, "Classifying...");
    assert_eq!(model.photo, None);
    assert_eq!(
        effects,
        vec![Effect::Preprocess {
            photo: Arc::new(photo)
        }]
    );
}

#[test]
fn test_preprocessed_photo_is_shown_and_classified() {
    let buffer = pixel_buffer();
    let (model, effects) = transition(
        model_in(Phase::Classifying),
        Msg::PreprocessDone(Ok(buffer.clone())),
    );

    assert_eq!(model.phase, Phase::Classifying);
    assert!(view(&model).shows_same_photo(Some(&buffer)));
    assert_eq!(effects, vec![Effect::Classify { buffer }]);
}

#[test]
fn test_undecodable_photo_is_shown_as_error() {
    let error = image::load_from_memory(b"garbage").unwrap_err();
    let (model, effects) = transition(
        model_in(Phase::Classifying),
        Msg::PreprocessDone(Err(PreprocessError::from(error))),
    );

    assert_eq!(model.phase, Phase::Idle);
    assert!(model.text.starts_with("Unable to decode image.\n"));
    assert!(effects.is_empty());
}

#[test]
fn test_classification_result_is_formatted() {
    let (model, effects) = transition(
        model_in(Phase::Classifying),
        Msg::ClassifyDone(Ok(vec![
            Classification::new("cat", 0.97),
            Classification::new("dog", 0.03),
        ])),
    );

    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.text, "Classification:\n  (0.97) cat\n  (0.03) dog");
    assert!(effects.is_empty());

    let (model, _) = transition(model_in(Phase::Classifying), Msg::ClassifyDone(Ok(vec![])));
    assert_eq!(model.text, "Nothing recognized.");
}

#[test]
fn test_classification_error_is_shown() {
    let (model, _) = transition(
        model_in(Phase::Classifying),
        Msg::ClassifyDone(Err(ClassificationError::Inference("boom".to_string()))),
    );

    assert_eq!(model.phase, Phase::Idle);
    assert_eq!(model.text, "Unable to classify image.\ninference failed: boom");
}

#[test]
fn test_take_picture_is_ignored_while_busy() {
    for phase in [
        Phase::Classifying,
        Phase::PickingPhoto(Picking::ChoosingSource),
        Phase::PickingPhoto(Picking::Presenting(PhotoSource::Library)),
    ] {
        let before = model_in(phase);
        let (model, effects) = transition(before.clone(), take_picture());

        assert_eq!(model, before);
        assert!(effects.is_empty());
    }
}

#[test]
fn test_stale_results_are_ignored_when_idle() {
    let before = showing_result();
    let (model, effects) = transition(
        before.clone(),
        Msg::ClassifyDone(Ok(vec![Classification::new("dog", 1.0)])),
    );

    assert_eq!(model, before);
    assert!(effects.is_empty());
}
