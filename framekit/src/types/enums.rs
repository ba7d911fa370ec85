use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a box distributes its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxMode {
    #[default]
    Horizontal,
    Vertical,
    Grid,
}

impl BoxMode {
    pub const ALL: [Self; 3] = [Self::Horizontal, Self::Vertical, Self::Grid];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Grid => "Grid",
        }
    }

    pub fn is_valid(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl FromStr for BoxMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::invalid_enum("BoxMode", s))
    }
}

impl fmt::Display for BoxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line style of one border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Dotted,
    Dashed,
    Solid,
    Double,
    DotDash,
    DotDotDash,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    pub const ALL: [Self; 11] = [
        Self::None,
        Self::Dotted,
        Self::Dashed,
        Self::Solid,
        Self::Double,
        Self::DotDash,
        Self::DotDotDash,
        Self::Groove,
        Self::Ridge,
        Self::Inset,
        Self::Outset,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Dotted => "Dotted",
            Self::Dashed => "Dashed",
            Self::Solid => "Solid",
            Self::Double => "Double",
            Self::DotDash => "DotDash",
            Self::DotDotDash => "DotDotDash",
            Self::Groove => "Groove",
            Self::Ridge => "Ridge",
            Self::Inset => "Inset",
            Self::Outset => "Outset",
        }
    }

    pub fn is_valid(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl FromStr for BorderStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| Error::invalid_enum("BorderStyle", s))
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientMode {
    Linear,
    Radial,
    Conical,
}

impl GradientMode {
    pub const ALL: [Self; 3] = [Self::Linear, Self::Radial, Self::Conical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Radial => "Radial",
            Self::Conical => "Conical",
        }
    }

    /// Number of leading scalar values a gradient of this mode consumes
    /// before its color stops.
    pub const fn scalar_count(self) -> usize {
        match self {
            Self::Linear => 4,
            Self::Radial => 5,
            Self::Conical => 4,
        }
    }

    pub fn is_valid(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

impl FromStr for GradientMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::invalid_enum("GradientMode", s))
    }
}

impl fmt::Display for GradientMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of an image inside its panel (`image-position`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Alignment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
            Self::BottomLeft => "bottom left",
            Self::BottomRight => "bottom right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Left and right edges are "sides"; they never carry corner radii.
    pub const fn is_side(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for mode in BoxMode::ALL {
            assert_eq!(mode.as_str().parse::<BoxMode>().unwrap(), mode);
        }
        for style in BorderStyle::ALL {
            assert_eq!(style.as_str().parse::<BorderStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_is_valid_is_exact() {
        assert!(GradientMode::is_valid("Radial"));
        assert!(!GradientMode::is_valid("radial"));
        assert!(!BoxMode::is_valid(""));
        assert!(BorderStyle::is_valid("None"));
    }

    #[test]
    fn test_parse_error_names_enum() {
        let err = "Diagonal".parse::<BoxMode>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEnum {
                owner: "BoxMode".to_string(),
                kind: "BoxMode",
                value: "Diagonal".to_string(),
            }
        );
    }
}
