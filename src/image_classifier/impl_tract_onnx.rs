use crate::image_classifier::interface::{
    Classification, ClassificationError, ImageClassifier, ModelLoadError,
};
use crate::image_classifier::models::model_config::{ModelConfig, Normalization};
use crate::image_classifier::ranking::rank;
use crate::image_classifier::tract::image::{resize_image_to_tensor, TensorLayout};
use crate::library::logger::interface::Logger;
use crate::photo::orientation::Orientation;
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;
use tract_onnx::tract_hir::internal::DimLike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub layout: TensorLayout,
    pub width: u32,
    pub height: u32,
}

impl InputSpec {
    /// Reads an image input from a 4-d shape. The batch dimension may be symbolic.
    pub fn from_dims(dims: &[Option<usize>]) -> Result<Self, ModelLoadError> {
        let spec = match dims {
            [_, Some(3), Some(height), Some(width)] => InputSpec {
                layout: TensorLayout::Nchw,
                width: *width as u32,
                height: *height as u32,
            },
            [_, Some(height), Some(width), Some(3)] => InputSpec {
                layout: TensorLayout::Nhwc,
                width: *width as u32,
                height: *height as u32,
            },
            _ => return Err(ModelLoadError::UnsupportedInput(dims.to_vec())),
        };

        if spec.width == 0 || spec.height == 0 {
            return Err(ModelLoadError::UnsupportedInput(dims.to_vec()));
        }

        Ok(spec)
    }

    fn shape(&self) -> [usize; 4] {
        let (width, height) = (self.width as usize, self.height as usize);
        match self.layout {
            TensorLayout::Nchw => [1, 3, height, width],
            TensorLayout::Nhwc => [1, height, width, 3],
        }
    }
}

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input: InputSpec,
    labels: Vec<String>,
    normalization: Normalization,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    /// Loads the model and its labels. Input size and label count come from
    /// the artifacts themselves.
    pub fn load_model(
        config: &ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let logger = logger.with_namespace("image_classifier");
        let path = config.onnx_model_path.as_path();
        let model_err = |e: TractError| ModelLoadError::Model {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        };

        let labels = read_labels(&config.labels_path)?;

        let _ = logger.info(&format!("Loading model from {}", path.display()));

        let inference = tract_onnx::onnx().model_for_path(path).map_err(model_err)?;

        let probe = inference.clone().into_typed().map_err(model_err)?;
        let dims: Vec<Option<usize>> = probe
            .input_fact(0)
            .map_err(model_err)?
            .shape
            .iter()
            .map(|dim| dim.to_usize().ok())
            .collect();
        let input = InputSpec::from_dims(&dims)?;

        let optimized = inference
            .with_input_fact(0, f32::fact(input.shape()).into())
            .map_err(model_err)?
            .into_optimized()
            .map_err(model_err)?;

        if let Some(outputs) = optimized
            .output_fact(0)
            .map_err(model_err)?
            .shape
            .as_concrete()
            .map(|shape| shape.iter().product::<usize>())
        {
            if outputs != labels.len() {
                return Err(ModelLoadError::LabelMismatch {
                    outputs,
                    labels: labels.len(),
                });
            }
        }

        let model = optimized.into_runnable().map_err(model_err)?;

        let _ = logger.info(&format!(
            "Model ready: input {}x{} {:?}, labels {:?}",
            input.width, input.height, input.layout, labels
        ));

        Ok(Self {
            model,
            input,
            labels,
            normalization: config.normalization,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        pixels: &RgbImage,
        orientation: Orientation,
    ) -> Result<Vec<Classification>, ClassificationError> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(ClassificationError::EmptyImage);
        }

        let started = Instant::now();

        let upright = orientation.apply(pixels);
        let input = resize_image_to_tensor(
            &upright,
            self.input.width,
            self.input.height,
            self.input.layout,
            &self.normalization,
        );

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassificationError::Inference(format!("{:#}", e)))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassificationError::Output("model produced no outputs".to_string()))?;
        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| ClassificationError::Output(format!("{:#}", e)))?
            .iter()
            .copied()
            .collect();

        let classifications = rank(&self.labels, &scores)?;

        let _ = self.logger.info(&format!(
            "Classified in {:?}: {:?}",
            started.elapsed(),
            classifications
        ));

        Ok(classifications)
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

pub fn read_labels(path: &Path) -> Result<Vec<String>, ModelLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Labels {
        path: path.to_path_buf(),
        source,
    })?;

    let labels: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if labels.is_empty() {
        return Err(ModelLoadError::NoLabels(path.to_path_buf()));
    }

    Ok(labels)
}
