use crate::image_classifier::interface::{Classification, ClassificationError, ImageClassifier};
use crate::image_classifier::ranking::rank;
use crate::photo::orientation::Orientation;
use image::RgbImage;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct ImageClassifierFake {
    labels: Vec<String>,
    scores: Vec<f32>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    pub fn new(scores: &[(&str, f32)]) -> Self {
        Self {
            labels: scores.iter().map(|(label, _)| label.to_string()).collect(),
            scores: scores.iter().map(|(_, score)| *score).collect(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(&[("cat", 0.5), ("dog", 0.5)])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        pixels: &RgbImage,
        _orientation: Orientation,
    ) -> Result<Vec<Classification>, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(ClassificationError::EmptyImage);
        }

        if let Some(message) = &self.failure {
            return Err(ClassificationError::Inference(message.clone()));
        }

        rank(&self.labels, &self.scores)
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}
