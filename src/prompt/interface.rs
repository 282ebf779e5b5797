/// A modal choice presented to the user.
pub trait Prompt: Send + Sync {
    /// Blocks until the user picks one of `options` (`Some(index)`) or cancels (`None`).
    fn choose(
        &self,
        title: &str,
        options: &[String],
    ) -> Result<Option<usize>, Box<dyn std::error::Error + Send + Sync>>;
}
