use std::cell::OnceCell;

use indexmap::IndexMap;

use super::Brush;
use crate::error::{Error, Result};
use crate::types::{Color, GradientMode};

/// Mode-specific gradient parameters, as fractions of the panel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
    Linear {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Radial {
        cx: f32,
        cy: f32,
        radius: f32,
        fx: f32,
        fy: f32,
    },
    Conical {
        cx: f32,
        cy: f32,
        angle: f32,
    },
}

impl GradientGeometry {
    pub fn mode(&self) -> GradientMode {
        match self {
            Self::Linear { .. } => GradientMode::Linear,
            Self::Radial { .. } => GradientMode::Radial,
            Self::Conical { .. } => GradientMode::Conical,
        }
    }

    /// Field names and values in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, f32)> {
        match *self {
            Self::Linear { x1, y1, x2, y2 } => vec![("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)],
            Self::Radial {
                cx,
                cy,
                radius,
                fx,
                fy,
            } => vec![
                ("cx", cx),
                ("cy", cy),
                ("radius", radius),
                ("fx", fx),
                ("fy", fy),
            ],
            Self::Conical { cx, cy, angle } => vec![("cx", cx), ("cy", cy), ("angle", angle)],
        }
    }

    /// Conical gradients consume four parameters; the fourth is ignored.
    fn from_scalars(mode: GradientMode, scalars: &[f32]) -> Option<Self> {
        match (mode, scalars) {
            (GradientMode::Linear, &[x1, y1, x2, y2]) => Some(Self::Linear { x1, y1, x2, y2 }),
            (GradientMode::Radial, &[cx, cy, radius, fx, fy]) => Some(Self::Radial {
                cx,
                cy,
                radius,
                fx,
                fy,
            }),
            (GradientMode::Conical, &[cx, cy, angle, _]) => Some(Self::Conical { cx, cy, angle }),
            _ => None,
        }
    }

    fn head(&self) -> String {
        match self {
            Self::Linear { x1, y1, x2, y2 } => {
                format!("qlineargradient(x1:{x1}, y1:{y1}, x2:{x2}, y2:{y2}")
            }
            Self::Radial {
                cx,
                cy,
                radius,
                fx,
                fy,
            } => format!("qradialgradient(cx:{cx}, cy:{cy}, radius: {radius}, fx:{fx}, fy:{fy}"),
            Self::Conical { cx, cy, angle } => {
                format!("qconicalgradient(cx:{cx}, cy:{cy}, angle:{angle}")
            }
        }
    }
}

/// Color of a gradient stop: a brush's fill or a raw color token.
#[derive(Debug, Clone)]
pub enum StopColor {
    Brush(Brush),
    Color(Color),
}

impl StopColor {
    pub fn text(&self) -> String {
        match self {
            Self::Brush(brush) => brush.color_text(),
            Self::Color(color) => color.to_stylesheet(),
        }
    }
}

impl From<Brush> for StopColor {
    fn from(brush: Brush) -> Self {
        Self::Brush(brush)
    }
}

impl From<Color> for StopColor {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<&str> for StopColor {
    fn from(token: &str) -> Self {
        Self::Color(Color::from(token))
    }
}

#[derive(Debug, Clone)]
pub struct ColorStop {
    pub position: f32,
    pub color: StopColor,
}

impl ColorStop {
    pub fn new(position: f32, color: impl Into<StopColor>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }
}

/// One entry of the flat argument list accepted by [`Gradient::new`].
#[derive(Debug, Clone)]
pub enum GradientValue {
    Number(f32),
    Color(StopColor),
}

impl From<f32> for GradientValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<StopColor> for GradientValue {
    fn from(color: StopColor) -> Self {
        Self::Color(color)
    }
}

impl From<Color> for GradientValue {
    fn from(color: Color) -> Self {
        Self::Color(StopColor::Color(color))
    }
}

impl From<Brush> for GradientValue {
    fn from(brush: Brush) -> Self {
        Self::Color(StopColor::Brush(brush))
    }
}

impl From<&str> for GradientValue {
    fn from(token: &str) -> Self {
        Self::Color(StopColor::from(token))
    }
}

/// Linear, radial or conical color ramp rendered as a `q*gradient(...)` value.
#[derive(Debug, Clone)]
pub struct Gradient {
    geometry: GradientGeometry,
    stops: Vec<ColorStop>,
    stylesheet: OnceCell<String>,
}

impl Gradient {
    /// Build a gradient from a flat argument list.
    ///
    /// The first `mode.scalar_count()` values are the mode's parameters;
    /// the rest are `(position, color)` pairs, kept in the given order.
    pub fn new(mode: GradientMode, values: Vec<GradientValue>) -> Result<Self> {
        let count = mode.scalar_count();
        if values.len() < count {
            return Err(Error::invalid_argument(format!(
                "{mode} gradient needs {count} parameters, got {}",
                values.len()
            )));
        }

        let mut values = values.into_iter();
        let scalars = values
            .by_ref()
            .take(count)
            .enumerate()
            .map(|(i, value)| match value {
                GradientValue::Number(n) => Ok(n),
                GradientValue::Color(_) => Err(Error::invalid_argument(format!(
                    "{mode} gradient parameter {i} must be a number"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut stops = Vec::new();
        loop {
            match (values.next(), values.next()) {
                (None, _) => break,
                (Some(GradientValue::Number(position)), Some(GradientValue::Color(color))) => {
                    stops.push(ColorStop { position, color });
                }
                (Some(GradientValue::Number(_)), None) => {
                    return Err(Error::invalid_argument("gradient stop is missing its color"));
                }
                _ => {
                    return Err(Error::invalid_argument(
                        "gradient stops must be (position, color) pairs",
                    ));
                }
            }
        }

        let geometry = GradientGeometry::from_scalars(mode, &scalars).ok_or_else(|| {
            Error::invalid_argument(format!("{mode} gradient needs {count} parameters"))
        })?;
        Ok(Self::from_parts(geometry, stops))
    }

    /// Like [`new`](Self::new), from the mode's name.
    pub fn parse(mode: &str, values: Vec<GradientValue>) -> Result<Self> {
        Self::new(mode.parse()?, values)
    }

    pub fn linear(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::from_parts(GradientGeometry::Linear { x1, y1, x2, y2 }, Vec::new())
    }

    pub fn radial(cx: f32, cy: f32, radius: f32, fx: f32, fy: f32) -> Self {
        Self::from_parts(
            GradientGeometry::Radial {
                cx,
                cy,
                radius,
                fx,
                fy,
            },
            Vec::new(),
        )
    }

    pub fn conical(cx: f32, cy: f32, angle: f32) -> Self {
        Self::from_parts(GradientGeometry::Conical { cx, cy, angle }, Vec::new())
    }

    fn from_parts(geometry: GradientGeometry, stops: Vec<ColorStop>) -> Self {
        Self {
            geometry,
            stops,
            stylesheet: OnceCell::new(),
        }
    }

    /// Append a stop (builder form).
    pub fn stop(mut self, position: f32, color: impl Into<StopColor>) -> Self {
        self.add_stop(position, color);
        self
    }

    pub fn add_stop(&mut self, position: f32, color: impl Into<StopColor>) {
        self.stops.push(ColorStop::new(position, color));
        self.stylesheet.take();
    }

    pub fn mode(&self) -> GradientMode {
        self.geometry.mode()
    }

    pub fn geometry(&self) -> GradientGeometry {
        self.geometry
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Copy of the mode's parameters, keyed by field name.
    pub fn data(&self) -> IndexMap<&'static str, f32> {
        self.geometry.fields().into_iter().collect()
    }

    /// The rendered gradient, computed on first use.
    pub fn stylesheet(&self) -> &str {
        self.stylesheet.get_or_init(|| {
            log::trace!("[gradient] composing {} gradient", self.mode());
            let mut text = self.geometry.head();
            for stop in &self.stops {
                text.push_str(&format!(", stop:{} {}", stop.position, stop.color.text()));
            }
            text.push(')');
            text
        })
    }
}
