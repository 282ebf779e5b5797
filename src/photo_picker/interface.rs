use crate::photo::{Photo, PhotoSource};
use std::error::Error;

/// The modal photo picking facility. Cancelling is `Ok(None)`, never an error.
pub trait PhotoPicker: Send + Sync {
    fn is_camera_available(&self) -> bool;

    fn choose_source(&self) -> Result<Option<PhotoSource>, Box<dyn Error + Send + Sync>>;

    fn pick(&self, source: PhotoSource) -> Result<Option<Photo>, Box<dyn Error + Send + Sync>>;
}
