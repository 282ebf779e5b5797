use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn is_available(&self) -> bool {
        true
    }

    fn capture_photo(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing photo...")?;

        let color = Rgb([rand::random::<u8>(), rand::random::<u8>(), rand::random::<u8>()]);
        let image = RgbImage::from_pixel(320, 240, color);

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;

        self.logger.info("Photo captured")?;
        Ok(bytes)
    }
}
