use std::path::PathBuf;

/// Per-channel normalization applied after scaling pixels to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    pub const IMAGENET: Normalization = Normalization {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };

    pub const UNIT: Normalization = Normalization {
        mean: [0.0, 0.0, 0.0],
        std: [1.0, 1.0, 1.0],
    };

    pub fn apply(&self, channel: usize, value: u8) -> f32 {
        (value as f32 / 255.0 - self.mean[channel]) / self.std[channel]
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::IMAGENET
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    pub normalization: Normalization,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("models/cat_vs_dog.onnx"),
            labels_path: PathBuf::from("models/cat_vs_dog.labels"),
            normalization: Normalization::default(),
        }
    }
}
