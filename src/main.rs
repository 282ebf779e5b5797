use config::{CameraConfig, Config, DisplayKind};
use device_camera::impl_command::DeviceCameraCommand;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::interface::DeviceCamera;
use device_display::gui_window::Gui;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use photo_picker::impl_default::PhotoPickerDefault;
use photo_picker::photo_library::PhotoLibrary;
use prompt::impl_console::PromptConsole;
use prompt::impl_gui::PromptGui;
use prompt::interface::Prompt;
use screen::main::Screen;
use std::error::Error;
use std::sync::Arc;
use terminal::Terminal;

mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod image_preprocessor;
mod library;
mod photo;
mod photo_picker;
mod prompt;
mod result_formatter;
mod screen;
mod terminal;

const WINDOW_TITLE: &str = "Cat vs Dog";

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = match ImageClassifierTractOnnx::load_model(&config.model, logger.clone())
    {
        Ok(image_classifier) => Arc::new(image_classifier),
        Err(e) => {
            logger.error(&format!("Failed to load model: {}", e))?;
            return Err(e.into());
        }
    };

    logger.info(&format!(
        "Classifying as one of: {}",
        image_classifier.labels().join(", ")
    ))?;

    let device_camera: Option<Arc<dyn DeviceCamera + Send + Sync>> = match &config.camera {
        CameraConfig::None => None,
        CameraConfig::Fake => Some(Arc::new(DeviceCameraFake::new(logger.clone()))),
        CameraConfig::Command(command) => Some(Arc::new(DeviceCameraCommand::new(
            command.clone(),
            logger.clone(),
        ))),
    };

    let photo_library = PhotoLibrary::new(config.photo_library_dir.clone());

    logger.info(&format!(
        "Starting with {:?} display, photo library at {}",
        config.display,
        photo_library.dir().display()
    ))?;

    match config.display {
        DisplayKind::Console => {
            let terminal = Terminal::start();
            let device_display = Arc::new(DeviceDisplayConsole::new(terminal.clone()));
            let prompt = Arc::new(PromptConsole::new(terminal));

            let screen = new_screen(
                logger,
                device_display,
                prompt,
                photo_library,
                device_camera,
                image_classifier,
            );

            screen.run()
        }
        DisplayKind::Gui => {
            let gui = Gui::new();
            let device_display = Arc::new(DeviceDisplayGui::new(gui.clone()));
            let prompt = Arc::new(PromptGui::new(gui.clone()));

            let screen = new_screen(
                logger.clone(),
                device_display,
                prompt,
                photo_library,
                device_camera,
                image_classifier,
            );

            let screen_logger = logger.clone();
            std::thread::spawn(move || {
                if let Err(e) = screen.run() {
                    let _ = screen_logger.error(&format!("Screen stopped: {}", e));
                }
            });

            // The window owns the main thread until it is closed.
            gui.run_window(WINDOW_TITLE)
        }
    }
}

fn new_screen(
    logger: Arc<dyn Logger + Send + Sync>,
    device_display: Arc<dyn DeviceDisplay + Send + Sync>,
    prompt: Arc<dyn Prompt + Send + Sync>,
    photo_library: PhotoLibrary,
    device_camera: Option<Arc<dyn DeviceCamera + Send + Sync>>,
    image_classifier: Arc<ImageClassifierTractOnnx>,
) -> Screen {
    let photo_picker = Arc::new(PhotoPickerDefault::new(
        prompt,
        photo_library,
        device_camera,
        logger.clone(),
    ));

    Screen::new(logger, device_display, photo_picker, image_classifier)
}
