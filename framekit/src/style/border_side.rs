use std::cell::OnceCell;

use super::{Brush, Fill, FillKind, Image};
use crate::error::{Error, Result};
use crate::types::BorderStyle;

/// Corner radius of a border edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    Uniform(f32),
    Pair { left: f32, right: f32 },
}

impl Radius {
    pub const fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }
}

impl Default for Radius {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f32> for Radius {
    fn from(radius: f32) -> Self {
        Self::Uniform(radius)
    }
}

impl From<(f32, f32)> for Radius {
    fn from((left, right): (f32, f32)) -> Self {
        Self::Pair { left, right }
    }
}

impl From<[f32; 2]> for Radius {
    fn from([left, right]: [f32; 2]) -> Self {
        Self::Pair { left, right }
    }
}

/// Style of one edge of a panel border.
///
/// A side holds at most one fill: setting a brush drops the image and the
/// other way round. Corner radii are only emitted for top and bottom edges
/// (`is_side == false`).
#[derive(Debug, Clone)]
pub struct BorderSide {
    width: f32,
    style: BorderStyle,
    fill: Option<Fill>,
    radius: Radius,
    is_side: bool,
    fragment: OnceCell<Vec<String>>,
}

impl BorderSide {
    pub fn new(width: f32, fill: impl Into<Fill>) -> Self {
        Self {
            width,
            style: BorderStyle::default(),
            fill: Some(fill.into()),
            radius: Radius::default(),
            is_side: false,
            fragment: OnceCell::new(),
        }
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.set_style(style);
        self
    }

    pub fn radius(mut self, radius: impl Into<Radius>) -> Self {
        self.set_radius(radius);
        self
    }

    pub fn side(mut self, is_side: bool) -> Self {
        self.set_is_side(is_side);
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn border_style(&self) -> BorderStyle {
        self.style
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    pub fn brush(&self) -> Option<&Brush> {
        match &self.fill {
            Some(Fill::Brush(brush)) => Some(brush),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&Image> {
        match &self.fill {
            Some(Fill::Image(image)) => Some(image),
            _ => None,
        }
    }

    pub fn radius_value(&self) -> Radius {
        self.radius
    }

    pub fn is_side(&self) -> bool {
        self.is_side
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.invalidate();
    }

    pub fn set_style(&mut self, style: BorderStyle) {
        self.style = style;
        self.invalidate();
    }

    /// Set the style from its name; unknown names leave the side unchanged.
    pub fn set_style_name(&mut self, style: &str) -> Result<()> {
        let style = style.parse::<BorderStyle>()?;
        self.set_style(style);
        Ok(())
    }

    /// Replace the fill with a brush. Rejects image fills.
    pub fn set_brush(&mut self, fill: impl Into<Fill>) -> Result<()> {
        self.replace_fill(fill.into(), FillKind::Brush)
    }

    /// Replace the fill with an image. Rejects brush fills.
    pub fn set_image(&mut self, fill: impl Into<Fill>) -> Result<()> {
        self.replace_fill(fill.into(), FillKind::Image)
    }

    /// Replace the fill with either kind.
    pub fn set_fill(&mut self, fill: impl Into<Fill>) {
        self.fill = Some(fill.into());
        self.invalidate();
    }

    pub fn set_radius(&mut self, radius: impl Into<Radius>) {
        self.radius = radius.into();
        self.invalidate();
    }

    pub fn set_is_side(&mut self, is_side: bool) {
        self.is_side = is_side;
        self.invalidate();
    }

    /// Declarations this side contributes to a border, one per line.
    pub fn style_fragment(&self) -> &[String] {
        self.fragment.get_or_init(|| self.compose())
    }

    /// The fragment as a single `; `-separated declaration list.
    pub fn stylesheet(&self) -> String {
        self.style_fragment().join("; ")
    }

    fn replace_fill(&mut self, fill: Fill, expected: FillKind) -> Result<()> {
        if fill.kind() != expected {
            return Err(Error::invalid_argument(format!(
                "expected a {expected} fill, got {}",
                fill.kind()
            )));
        }
        self.set_fill(fill);
        Ok(())
    }

    fn invalidate(&mut self) {
        self.fragment.take();
    }

    fn compose(&self) -> Vec<String> {
        log::trace!("[border] composing side fragment");

        let mut lines = vec![
            format!("width: {}", self.width),
            format!("style: {}", self.style),
        ];

        match &self.fill {
            Some(Fill::Brush(brush)) => lines.push(format!("color: {}", brush.color_text())),
            Some(Fill::Image(image)) => {
                lines.push(format!("image: {}", image.url));
                lines.push(format!("image-position: {}", image.alignment));
            }
            None => {}
        }

        if !self.is_side {
            match self.radius {
                Radius::Uniform(radius) => lines.push(format!("radius: {radius}")),
                Radius::Pair { left, right } => {
                    lines.push(format!("left-radius: {left}"));
                    lines.push(format!("right-radius: {right}"));
                }
            }
        }

        lines
    }
}
