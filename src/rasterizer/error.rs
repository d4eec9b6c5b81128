/// Errors raised while setting up a render target
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Invalid framebuffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Framebuffer {width}x{height} does not fit in memory")]
    TooLarge { width: u32, height: u32 },
}
