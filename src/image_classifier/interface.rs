use crate::photo::orientation::Orientation;
use image::RgbImage;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Failure to bring the model up. The app cannot run without it.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read labels at {}: {source}", path.display())]
    Labels {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("label file at {} declares no labels", .0.display())]
    NoLabels(PathBuf),
    #[error("failed to load model at {}: {message}", path.display())]
    Model { path: PathBuf, message: String },
    #[error("unsupported model input shape {0:?}, expected an RGB image input")]
    UnsupportedInput(Vec<Option<usize>>),
    #[error("model produces {outputs} scores but declares {labels} labels")]
    LabelMismatch { outputs: usize, labels: usize },
}

/// Failure of a single classification. The caller may retry with another photo.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("the image is empty")]
    EmptyImage,
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("unexpected model output: {0}")]
    Output(String),
}

pub trait ImageClassifier: Send + Sync {
    /// Classifies `pixels` as seen after applying `orientation`.
    ///
    /// Results are ranked by descending confidence.
    fn classify(
        &self,
        pixels: &RgbImage,
        orientation: Orientation,
    ) -> Result<Vec<Classification>, ClassificationError>;

    /// The vocabulary, in model output order.
    fn labels(&self) -> &[String];
}
