use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use crate::photo::{Photo, PhotoSource};
use crate::photo_picker::interface::PhotoPicker;
use crate::photo_picker::photo_library::{display_name, PhotoLibrary};
use crate::prompt::interface::Prompt;
use chrono::Local;
use std::error::Error;
use std::sync::Arc;

/// Picks photos from the camera, when there is one, or from the photo library,
/// asking the user through `prompt`.
pub struct PhotoPickerDefault {
    prompt: Arc<dyn Prompt + Send + Sync>,
    library: PhotoLibrary,
    camera: Option<Arc<dyn DeviceCamera + Send + Sync>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PhotoPickerDefault {
    pub fn new(
        prompt: Arc<dyn Prompt + Send + Sync>,
        library: PhotoLibrary,
        camera: Option<Arc<dyn DeviceCamera + Send + Sync>>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            prompt,
            library,
            camera,
            logger: logger.with_namespace("photo_picker"),
        }
    }

    fn pick_from_library(&self) -> Result<Option<Photo>, Box<dyn Error + Send + Sync>> {
        let entries = self.library.entries()?;
        if entries.is_empty() {
            return Err(format!(
                "photo library {} contains no images",
                self.library.dir().display()
            )
            .into());
        }

        let options: Vec<String> = entries.iter().map(|path| display_name(path)).collect();

        match self.prompt.choose(PhotoSource::Library.title(), &options)? {
            Some(index) => {
                let photo = self.library.load(&entries[index])?;
                self.logger.info(&format!("Picked {}", photo.name))?;
                Ok(Some(photo))
            }
            None => {
                self.logger.info("Library picker cancelled")?;
                Ok(None)
            }
        }
    }

    fn pick_from_camera(&self) -> Result<Option<Photo>, Box<dyn Error + Send + Sync>> {
        let camera = self
            .camera
            .as_ref()
            .filter(|camera| camera.is_available())
            .ok_or("no camera available")?;

        let data = camera.capture_photo()?;
        let name = format!("camera-{}", Local::now().format("%Y%m%d-%H%M%S"));

        Ok(Some(Photo::from_encoded(name, data)))
    }
}

impl PhotoPicker for PhotoPickerDefault {
    fn is_camera_available(&self) -> bool {
        self.camera
            .as_ref()
            .is_some_and(|camera| camera.is_available())
    }

    fn choose_source(&self) -> Result<Option<PhotoSource>, Box<dyn Error + Send + Sync>> {
        if !self.is_camera_available() {
            return Ok(Some(PhotoSource::Library));
        }

        let sources = [PhotoSource::Camera, PhotoSource::Library];
        let options: Vec<String> = sources.iter().map(|s| s.title().to_string()).collect();

        let choice = self.prompt.choose("Photo Source", &options)?;

        Ok(choice.map(|index| sources[index]))
    }

    fn pick(&self, source: PhotoSource) -> Result<Option<Photo>, Box<dyn Error + Send + Sync>> {
        match source {
            PhotoSource::Camera => self.pick_from_camera(),
            PhotoSource::Library => self.pick_from_library(),
        }
    }
}
