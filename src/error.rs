use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}
