/// A raw color token as understood by the host stylesheet renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    /// Passed through verbatim (`#ff8800`, `red`, `palette(base)`, ...).
    Named(String),
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn named(token: impl Into<String>) -> Self {
        Self::Named(token.into())
    }

    /// Render the color the way it appears inside a stylesheet rule.
    ///
    /// Stylesheets have no perceptual color spaces, so oklch colors are
    /// converted to sRGB first.
    pub fn to_stylesheet(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
            Self::Oklch { l, c, h, a } => {
                let (r, g, b) = oklch_to_rgb(*l, *c, *h);
                if *a >= 1.0 {
                    format!("rgb({r}, {g}, {b})")
                } else {
                    let a = (a.max(0.0) * 255.0).round() as u8;
                    format!("rgba({r}, {g}, {b}, {a})")
                }
            }
            Self::Named(token) => token.clone(),
        }
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::Named(token.to_string())
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self::Named(token)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> (u8, u8, u8) {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    srgb.into_format::<u8>().into_components()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oklch_extremes_map_to_black_and_white() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_stylesheet(), "rgb(0, 0, 0)");
        assert_eq!(
            Color::oklch(1.0, 0.0, 0.0).to_stylesheet(),
            "rgb(255, 255, 255)"
        );
    }

    #[test]
    fn test_translucent_oklch_uses_rgba() {
        assert_eq!(
            Color::oklcha(0.0, 0.0, 0.0, 0.5).to_stylesheet(),
            "rgba(0, 0, 0, 128)"
        );
    }
}
