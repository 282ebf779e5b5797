use exif::{In, Reader, Tag};
use image::{imageops, RgbImage};
use std::io::Cursor;

/// How the stored pixels must be transformed to appear upright.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Normal,
    CW90,
    CW180,
    CW270,
    MirroredHorizontal,
    MirroredVertical,
    MirroredHorizontalAnd90CW,
    MirroredHorizontalAnd270CW,
}

impl Orientation {
    /// Reads the EXIF orientation tag of an encoded image.
    ///
    /// Images without EXIF data, or whose container the exif reader does not
    /// understand, are treated as upright.
    pub fn from_encoded(data: &[u8]) -> Self {
        let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(data)) else {
            return Self::Normal;
        };

        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Into::into)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        match self {
            Self::Normal => image.clone(),
            Self::CW90 => imageops::rotate90(image),
            Self::CW180 => imageops::rotate180(image),
            Self::CW270 => imageops::rotate270(image),
            Self::MirroredHorizontal => imageops::flip_horizontal(image),
            Self::MirroredVertical => imageops::flip_vertical(image),
            Self::MirroredHorizontalAnd90CW => {
                imageops::rotate90(&imageops::flip_horizontal(image))
            }
            Self::MirroredHorizontalAnd270CW => {
                imageops::rotate270(&imageops::flip_horizontal(image))
            }
        }
    }

    pub fn swaps_dimensions(&self) -> bool {
        matches!(
            self,
            Self::CW90
                | Self::CW270
                | Self::MirroredHorizontalAnd90CW
                | Self::MirroredHorizontalAnd270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Self::MirroredHorizontal,
            3 => Self::CW180,
            4 => Self::MirroredVertical,
            5 => Self::MirroredHorizontalAnd270CW,
            6 => Self::CW90,
            7 => Self::MirroredHorizontalAnd90CW,
            8 => Self::CW270,
            _ => Self::Normal,
        }
    }
}
