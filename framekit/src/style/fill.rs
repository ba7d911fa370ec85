use std::fmt;

use super::Gradient;
use crate::types::{Alignment, Color};

/// Flat or gradient color fill.
#[derive(Debug, Clone)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl Brush {
    pub fn solid(color: impl Into<Color>) -> Self {
        Self::Solid(color.into())
    }

    pub fn gradient(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }

    /// The fill value without the `color: ` prefix.
    pub fn color_text(&self) -> String {
        match self {
            Self::Solid(color) => color.to_stylesheet(),
            Self::Gradient(gradient) => gradient.stylesheet().to_string(),
        }
    }

    pub fn stylesheet(&self) -> String {
        format!("color: {}", self.color_text())
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}

/// Image fill referenced by URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub alignment: Alignment,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alignment: Alignment::default(),
        }
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn stylesheet(&self) -> String {
        format!("image: {}; image-position: {}", self.url, self.alignment)
    }
}

/// Which kind of entity a [`Fill`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillKind {
    Brush,
    Image,
}

impl fmt::Display for FillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brush => f.write_str("Brush"),
            Self::Image => f.write_str("Image"),
        }
    }
}

/// Anything that can paint a surface.
#[derive(Debug, Clone)]
pub enum Fill {
    Brush(Brush),
    Image(Image),
}

impl Fill {
    pub fn kind(&self) -> FillKind {
        match self {
            Self::Brush(_) => FillKind::Brush,
            Self::Image(_) => FillKind::Image,
        }
    }

    pub fn stylesheet(&self) -> String {
        match self {
            Self::Brush(brush) => brush.stylesheet(),
            Self::Image(image) => image.stylesheet(),
        }
    }
}

impl From<Brush> for Fill {
    fn from(brush: Brush) -> Self {
        Self::Brush(brush)
    }
}

impl From<Image> for Fill {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Brush(Brush::Solid(color))
    }
}
