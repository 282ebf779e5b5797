use crate::photo::{Photo, PhotoSource};
use crate::photo_picker::interface::PhotoPicker;
use std::collections::VecDeque;
use std::error::Error;
use std::sync::Mutex;

/// Hands out scripted photos; `None` entries act as a cancelled picker.
pub struct PhotoPickerFake {
    camera_available: bool,
    sources: Mutex<VecDeque<Option<PhotoSource>>>,
    photos: Mutex<VecDeque<Option<Photo>>>,
    picked_from: Mutex<Vec<PhotoSource>>,
}

impl PhotoPickerFake {
    pub fn new(camera_available: bool) -> Self {
        Self {
            camera_available,
            sources: Mutex::new(VecDeque::new()),
            photos: Mutex::new(VecDeque::new()),
            picked_from: Mutex::new(Vec::new()),
        }
    }

    pub fn with_sources(self, sources: Vec<Option<PhotoSource>>) -> Self {
        Self {
            sources: Mutex::new(sources.into()),
            ..self
        }
    }

    pub fn with_photos(self, photos: Vec<Option<Photo>>) -> Self {
        Self {
            photos: Mutex::new(photos.into()),
            ..self
        }
    }

    pub fn picked_from(&self) -> Vec<PhotoSource> {
        self.picked_from
            .lock()
            .map(|picked| picked.clone())
            .unwrap_or_default()
    }
}

impl PhotoPicker for PhotoPickerFake {
    fn is_camera_available(&self) -> bool {
        self.camera_available
    }

    fn choose_source(&self) -> Result<Option<PhotoSource>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .sources
            .lock()
            .map_err(|_| "fake picker poisoned")?
            .pop_front()
            .flatten())
    }

    fn pick(&self, source: PhotoSource) -> Result<Option<Photo>, Box<dyn Error + Send + Sync>> {
        self.picked_from
            .lock()
            .map_err(|_| "fake picker poisoned")?
            .push(source);

        Ok(self
            .photos
            .lock()
            .map_err(|_| "fake picker poisoned")?
            .pop_front()
            .flatten())
    }
}
