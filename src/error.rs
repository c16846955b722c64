use thiserror::Error;

/// Errors raised while setting up the scene.
///
/// Stage transitions and frame updates never fail; everything here happens
/// before the first frame (or while (re)creating GPU resources).
#[derive(Error, Debug)]
pub enum RevealError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl RevealError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RevealError::InvalidConfiguration(reason.into())
    }
}

impl From<String> for RevealError {
    fn from(message: String) -> Self {
        RevealError::Render(message)
    }
}

pub type RevealResult<T> = Result<T, RevealError>;
