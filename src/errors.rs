use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene description: {0}")]
    SceneParse(#[from] serde_json::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write exr: {0}")]
    Exr(#[from] exr::error::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
