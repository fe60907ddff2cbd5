use std::fmt;
use std::path::PathBuf;

/// Resource acquisition step of `ViewportRenderer::initialize`, in order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InitStage {
    Video,
    Images,
    Window,
    Surface,
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InitStage::Video => "video subsystem",
            InitStage::Images => "image subsystem",
            InitStage::Window => "window",
            InitStage::Surface => "drawing surface",
        })
    }
}

/// Renderer initialization failure. Wraps the backend's error.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("video subsystem could not initialize: {0:#}")]
    Video(anyhow::Error),

    #[error("image subsystem could not initialize: {0:#}")]
    Images(anyhow::Error),

    #[error("window could not be created: {0:#}")]
    Window(anyhow::Error),

    #[error("drawing surface could not be created: {0:#}")]
    Surface(anyhow::Error),
}

impl InitError {
    pub(crate) fn at(stage: InitStage, err: anyhow::Error) -> Self {
        match stage {
            InitStage::Video => InitError::Video(err),
            InitStage::Images => InitError::Images(err),
            InitStage::Window => InitError::Window(err),
            InitStage::Surface => InitError::Surface(err),
        }
    }

    pub fn stage(&self) -> InitStage {
        match self {
            InitError::Video(_) => InitStage::Video,
            InitError::Images(_) => InitStage::Images,
            InitError::Window(_) => InitStage::Window,
            InitError::Surface(_) => InitStage::Surface,
        }
    }
}

/// Texture loading failure.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("renderer is not initialized")]
    NotInitialized,

    #[error("unable to load image {}: {reason:#}", .path.display())]
    Decode { path: PathBuf, reason: anyhow::Error },

    #[error("unable to create texture from {}: {reason:#}", .path.display())]
    Upload { path: PathBuf, reason: anyhow::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_round_trips_stage() {
        for stage in [InitStage::Video, InitStage::Images, InitStage::Window, InitStage::Surface] {
            let err = InitError::at(stage, anyhow::anyhow!("boom"));
            assert_eq!(err.stage(), stage);
            assert!(err.to_string().ends_with("boom"));
        }
    }

    #[test]
    fn texture_error_mentions_path() {
        let err = TextureError::Decode {
            path: PathBuf::from("tiles.png"),
            reason: anyhow::anyhow!("no such file"),
        };
        assert_eq!(err.to_string(), "unable to load image tiles.png: no such file");
    }
}
