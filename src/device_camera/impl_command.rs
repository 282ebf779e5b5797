use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

/// Captures stills by running an external program that writes an encoded
/// image to stdout, e.g. `libcamera-still -n -o -`.
pub struct DeviceCameraCommand {
    program: String,
    args: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraCommand {
    pub fn new(command: Vec<String>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let mut parts = command.into_iter();
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
            logger: logger.with_namespace("camera").with_namespace("command"),
        }
    }
}

impl DeviceCamera for DeviceCameraCommand {
    fn is_available(&self) -> bool {
        if self.program.is_empty() {
            return false;
        }

        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            return program.is_file();
        }

        std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
            .unwrap_or(false)
    }

    fn capture_photo(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Capturing photo with {} {:?}", self.program, self.args))?;

        let output = Command::new(&self.program).args(&self.args).output()?;

        if !output.status.success() {
            return Err(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )
            .into());
        }

        if output.stdout.is_empty() {
            return Err(format!("{} produced no image data", self.program).into());
        }

        self.logger
            .info(&format!("Photo captured ({} bytes)", output.stdout.len()))?;

        Ok(output.stdout)
    }
}
