use crate::PuzzleError;

/// A rasterized snapshot of the map surface.
///
/// `source` is whatever the presentation layer can use as a CSS image, in
/// the browser a `data:image/png;base64,...` URL produced by the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    source: String,
    width: u32,
    height: u32,
}

impl Image {
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Result<Self, PuzzleError> {
        if width == 0 || height == 0 {
            return Err(PuzzleError::EmptyImage { width, height });
        }
        Ok(Self {
            source: source.into(),
            width,
            height,
        })
    }

    /// Same bitmap displayed at another size (the viewport size in practice).
    pub fn resized(&self, width: u32, height: u32) -> Result<Self, PuzzleError> {
        Self::new(self.source.clone(), width, height)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
