use crate::photo::orientation::Orientation;
use crate::photo::Photo;
use image::RgbImage;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error("{0}")]
    Undecodable(#[from] image::ImageError),
}

/// Decoded pixels as stored, tagged with the orientation needed to show them upright.
#[derive(Clone, PartialEq)]
pub struct PixelBuffer {
    pub pixels: RgbImage,
    pub orientation: Orientation,
}

impl PixelBuffer {
    pub fn upright(&self) -> RgbImage {
        self.orientation.apply(&self.pixels)
    }

    pub fn upright_dimensions(&self) -> (u32, u32) {
        let (width, height) = self.pixels.dimensions();
        if self.orientation.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PixelBuffer({}x{}, {:?})",
            self.pixels.width(),
            self.pixels.height(),
            self.orientation
        )
    }
}

pub fn preprocess(photo: &Photo) -> Result<PixelBuffer, PreprocessError> {
    let decoded = image::load_from_memory(&photo.data)?;

    Ok(PixelBuffer {
        pixels: decoded.to_rgb8(),
        orientation: photo.orientation,
    })
}
