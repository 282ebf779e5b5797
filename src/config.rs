use crate::image_classifier::models::model_config::{ModelConfig, Normalization};
use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraConfig {
    None,
    Fake,
    Command(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Gui,
    Console,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub photo_library_dir: PathBuf,
    pub camera: CameraConfig,
    pub display: DisplayKind,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            photo_library_dir: PathBuf::from("photos"),
            camera: CameraConfig::None,
            display: DisplayKind::Gui,
            logger_timezone: utc(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to the defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = lookup("CAT_VS_DOG_MODEL") {
            config.model.onnx_model_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("CAT_VS_DOG_LABELS") {
            config.model.labels_path = PathBuf::from(path);
        }

        if let Some(value) = lookup("CAT_VS_DOG_NORMALIZATION") {
            config.model.normalization = match value.trim().to_lowercase().as_str() {
                "imagenet" => Normalization::IMAGENET,
                "unit" => Normalization::UNIT,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CAT_VS_DOG_NORMALIZATION",
                        value,
                        reason: "expected imagenet or unit",
                    })
                }
            };
        }

        if let Some(path) = lookup("CAT_VS_DOG_LIBRARY") {
            config.photo_library_dir = PathBuf::from(path);
        }

        if let Some(value) = lookup("CAT_VS_DOG_CAMERA") {
            config.camera = match value.trim() {
                "fake" => CameraConfig::Fake,
                command => {
                    CameraConfig::Command(command.split_whitespace().map(String::from).collect())
                }
            };
        }

        if let Some(value) = lookup("CAT_VS_DOG_DISPLAY") {
            config.display = match value.trim().to_lowercase().as_str() {
                "gui" => DisplayKind::Gui,
                "console" => DisplayKind::Console,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CAT_VS_DOG_DISPLAY",
                        value,
                        reason: "expected gui or console",
                    })
                }
            };
        }

        if let Some(value) = lookup("CAT_VS_DOG_UTC_OFFSET_HOURS") {
            config.logger_timezone = value
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(|hours| hours.checked_mul(3600))
                .and_then(chrono::FixedOffset::east_opt)
                .ok_or(ConfigError::InvalidValue {
                    key: "CAT_VS_DOG_UTC_OFFSET_HOURS",
                    value,
                    reason: "expected whole hours between -23 and 23",
                })?;
        }

        Ok(config)
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
