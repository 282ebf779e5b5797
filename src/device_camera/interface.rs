pub trait DeviceCamera: Send + Sync {
    fn is_available(&self) -> bool;
    /// Captures one still photo, returned encoded (JPEG, PNG, ...).
    fn capture_photo(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
