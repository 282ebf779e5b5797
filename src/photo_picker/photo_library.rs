use crate::photo::Photo;
use std::error::Error;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp"];

/// A directory of photos to choose from.
#[derive(Debug, Clone)]
pub struct PhotoLibrary {
    dir: PathBuf,
}

impl PhotoLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Image files in the library, sorted by file name.
    pub fn entries(&self) -> Result<Vec<PathBuf>, Box<dyn Error + Send + Sync>> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|e| {
            format!("cannot read photo library {}: {}", self.dir.display(), e)
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let path = entry?.path();
            if path.is_file() && is_image(&path) {
                entries.push(path);
            }
        }
        entries.sort();

        Ok(entries)
    }

    pub fn load(&self, path: &Path) -> Result<Photo, Box<dyn Error + Send + Sync>> {
        let data = std::fs::read(path)
            .map_err(|e| format!("cannot read photo {}: {}", path.display(), e))?;

        Ok(Photo::from_encoded(display_name(path), data))
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| IMAGE_EXTENSIONS.contains(&extension.to_lowercase().as_str()))
        .unwrap_or(false)
}
