pub mod impl_default;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
pub mod photo_library;
