pub mod orientation;

use orientation::Orientation;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoSource {
    Camera,
    Library,
}

impl PhotoSource {
    pub fn title(&self) -> &'static str {
        match self {
            PhotoSource::Camera => "Take Photo",
            PhotoSource::Library => "Choose Photo",
        }
    }
}

/// A captured or selected photo, still encoded.
#[derive(Clone, PartialEq)]
pub struct Photo {
    pub name: String,
    pub data: Vec<u8>,
    pub orientation: Orientation,
}

impl Photo {
    pub fn from_encoded(name: impl Into<String>, data: Vec<u8>) -> Self {
        let orientation = Orientation::from_encoded(&data);
        Self {
            name: name.into(),
            data,
            orientation,
        }
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("name", &self.name)
            .field("bytes", &self.data.len())
            .field("orientation", &self.orientation)
            .finish()
    }
}
