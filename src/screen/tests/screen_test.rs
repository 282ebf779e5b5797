use crate::device_display::interface::DisplayEvent;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::photo::{Photo, PhotoSource};
use crate::photo_picker::impl_fake::PhotoPickerFake;
use crate::screen::tests::fixture::{png_photo, Fixture};

fn run_until_closed(fixture: &Fixture) -> std::thread::JoinHandle<()> {
    let screen = fixture.screen.clone();
    std::thread::spawn(move || screen.run().unwrap())
}

#[test]
fn test_library_photo_is_classified() {
    let fixture = Fixture::new(
        PhotoPickerFake::new(false).with_photos(vec![Some(png_photo("cat.png"))]),
        ImageClassifierFake::new(&[("cat", 0.9), ("dog", 0.1)]),
    );
    let handle = run_until_closed(&fixture);

    fixture.device_display.send(DisplayEvent::TakePicture);
    let views = fixture.wait_for_views(|views| {
        views
            .last()
            .is_some_and(|view| view.text.starts_with("Classification:"))
    });

    let last = views.last().unwrap();
    assert_eq!(last.text, "Classification:\n  (0.90) cat\n  (0.10) dog");
    assert_eq!(last.photo.as_ref().unwrap().upright_dimensions(), (8, 6));
    assert!(last.can_take_picture);
    assert!(views.iter().any(|view| view.text == "Classifying..."));
    assert_eq!(fixture.photo_picker.picked_from(), vec![PhotoSource::Library]);
    assert_eq!(fixture.image_classifier.calls(), 1);

    fixture.device_display.send(DisplayEvent::Closed);
    handle.join().unwrap();
}

#[test]
fn test_camera_source_is_asked_for_first() {
    let fixture = Fixture::new(
        PhotoPickerFake::new(true)
            .with_sources(vec![Some(PhotoSource::Camera)])
            .with_photos(vec![Some(png_photo("camera-1"))]),
        ImageClassifierFake::new(&[("cat", 0.2), ("dog", 0.8)]),
    );
    let handle = run_until_closed(&fixture);

    fixture.device_display.send(DisplayEvent::TakePicture);
    let views = fixture.wait_for_views(|views| {
        views
            .last()
            .is_some_and(|view| view.text.starts_with("Classification:"))
    });

    assert_eq!(
        views.last().unwrap().text,
        "Classification:\n  (0.80) dog\n  (0.20) cat"
    );
    assert_eq!(fixture.photo_picker.picked_from(), vec![PhotoSource::Camera]);

    fixture.device_display.send(DisplayEvent::Closed);
    handle.join().unwrap();
}

#[test]
fn test_cancelled_pick_returns_to_idle() {
    let fixture = Fixture::new(
        PhotoPickerFake::new(false).with_photos(vec![None]),
        ImageClassifierFake::new(&[("cat", 0.5), ("dog", 0.5)]),
    );
    let handle = run_until_closed(&fixture);

    fixture.device_display.send(DisplayEvent::TakePicture);
    // initial, picking, back to idle
    let views = fixture.wait_for_views(|views| views.len() >= 3);

    assert_eq!(views[0], views[2]);
    assert!(views[2].can_take_picture);
    assert_eq!(fixture.image_classifier.calls(), 0);

    fixture.device_display.send(DisplayEvent::Closed);
    handle.join().unwrap();
}

#[test]
fn test_undecodable_photo_shows_error() {
    let fixture = Fixture::new(
        PhotoPickerFake::new(false)
            .with_photos(vec![Some(Photo::from_encoded("broken.jpg", b"nope".to_vec()))]),
        ImageClassifierFake::new(&[("cat", 0.5), ("dog", 0.5)]),
    );
    let handle = run_until_closed(&fixture);

    fixture.device_display.send(DisplayEvent::TakePicture);
    let views = fixture.wait_for_views(|views| {
        views
            .last()
            .is_some_and(|view| view.text.starts_with("Unable to decode image."))
    });

    let last = views.last().unwrap();
    assert_eq!(last.photo, None);
    assert!(last.can_take_picture);
    assert_eq!(fixture.image_classifier.calls(), 0);

    fixture.device_display.send(DisplayEvent::Closed);
    handle.join().unwrap();
}

#[test]
fn test_classifier_failure_allows_retry() {
    let fixture = Fixture::new(
        PhotoPickerFake::new(false).with_photos(vec![Some(png_photo("cat.png"))]),
        ImageClassifierFake::failing("out of memory"),
    );
    let handle = run_until_closed(&fixture);

    fixture.device_display.send(DisplayEvent::TakePicture);
    let views = fixture.wait_for_views(|views| {
        views
            .last()
            .is_some_and(|view| view.text.starts_with("Unable to classify image."))
    });

    let last = views.last().unwrap();
    assert_eq!(
        last.text,
        "Unable to classify image.\ninference failed: out of memory"
    );
    assert!(last.photo.is_some());
    assert!(last.can_take_picture);

    fixture.device_display.send(DisplayEvent::Closed);
    handle.join().unwrap();
}
