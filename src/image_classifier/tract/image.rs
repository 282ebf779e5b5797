use crate::image_classifier::models::model_config::Normalization;
use image::{imageops, RgbImage};
use tract_onnx::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    Nchw,
    Nhwc,
}

/// Crops the centered window of `image` with the aspect ratio of `width` x
/// `height`, then scales it to exactly that size.
pub fn center_crop_and_scale(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (x, y, crop_width, crop_height) = center_crop_rect(image.dimensions(), width, height);
    let cropped = imageops::crop_imm(image, x, y, crop_width, crop_height).to_image();

    if cropped.dimensions() == (width, height) {
        cropped
    } else {
        imageops::resize(&cropped, width, height, imageops::FilterType::Triangle)
    }
}

/// The largest centered `(x, y, width, height)` window of a `source` sized
/// image whose aspect ratio matches `width` x `height`.
fn center_crop_rect(source: (u32, u32), width: u32, height: u32) -> (u32, u32, u32, u32) {
    let (source_width, source_height) = source;
    let (sw, sh) = (source_width as u64, source_height as u64);
    let (tw, th) = (width.max(1) as u64, height.max(1) as u64);

    let (crop_width, crop_height) = if sw * th > sh * tw {
        let crop_width = ((sh * tw + th / 2) / th).clamp(1, sw);
        (crop_width as u32, source_height)
    } else {
        let crop_height = ((sw * th + tw / 2) / tw).clamp(1, sh.max(1));
        (source_width, crop_height as u32)
    };

    (
        (source_width - crop_width) / 2,
        source_height.saturating_sub(crop_height) / 2,
        crop_width,
        crop_height,
    )
}

pub fn image_to_tensor(
    image: &RgbImage,
    layout: TensorLayout,
    normalization: &Normalization,
) -> Tensor {
    let (width, height) = (image.width() as usize, image.height() as usize);

    match layout {
        TensorLayout::Nchw => {
            tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
                normalization.apply(c, image.get_pixel(x as u32, y as u32)[c])
            })
            .into_tensor()
        }
        TensorLayout::Nhwc => {
            tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
                normalization.apply(c, image.get_pixel(x as u32, y as u32)[c])
            })
            .into_tensor()
        }
    }
}

pub fn resize_image_to_tensor(
    image: &RgbImage,
    width: u32,
    height: u32,
    layout: TensorLayout,
    normalization: &Normalization,
) -> Tensor {
    let cropped = center_crop_and_scale(image, width, height);
    image_to_tensor(&cropped, layout, normalization)
}
