//! Compose project value object

/// Where the compose stack lives on the remote host and which image it runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeProject {
    /// Remote working directory
    pub dir: String,
    /// Compose file name, relative to `dir`
    pub file: String,
    /// Image reference exported as `IMAGE`
    pub image: String,
}

impl ComposeProject {
    pub fn new(
        dir: impl Into<String>,
        file: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            file: file.into(),
            image: image.into(),
        }
    }
}
