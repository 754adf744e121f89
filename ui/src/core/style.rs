//! Visual configuration for the avatar components.
//!
//! Styles are plain data: the adapters pull values out at render time and
//! nothing here triggers recomputation on write.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color with CSS output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Near-black used for borders and initials text.
    pub const INK: Self = Self::opaque(29, 30, 29);
    /// Light gray fill behind initials.
    pub const MIST: Self = Self::opaque(232, 236, 237);

    pub fn css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

/// Appearance of a single avatar circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarStyle {
    pub border_color: Rgba,
    pub inner_color: Rgba,
    pub spacing_color: Rgba,
    pub text_color: Rgba,
    pub border_width: f64,
    /// Horizontal padding around the initials label.
    pub inner_margin: f64,
    /// Gap between the outer rim and the inner circle.
    pub outer_margin: f64,
    /// CSS font family; `None` falls back to the system stack.
    pub font_family: Option<String>,
    pub font_size: f64,
    /// When set, `font_size` is ignored and derived from the diameter.
    pub automatic_size: bool,
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            border_color: Rgba::INK,
            inner_color: Rgba::MIST,
            spacing_color: Rgba::WHITE,
            text_color: Rgba::INK,
            border_width: 0.0,
            inner_margin: 2.0,
            outer_margin: 0.0,
            font_family: None,
            font_size: 17.0,
            automatic_size: true,
        }
    }
}

impl AvatarStyle {
    /// Effective font size for a circle of the given diameter.
    pub fn font_size_for(&self, diameter: f64) -> f64 {
        if self.automatic_size {
            diameter / 2.5
        } else {
            self.font_size
        }
    }

    pub fn font_family_css(&self) -> String {
        match &self.font_family {
            Some(family) => format!("{family}, sans-serif"),
            None => "sans-serif".to_string(),
        }
    }
}

/// Appearance of the avatar header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderStyle {
    pub border_color: Rgba,
    pub text_color: Rgba,
    /// Thickness of the top and bottom hairlines.
    pub rule_width: f64,
    /// Gap between the avatar and the name label.
    pub inner_margin: f64,
    /// Height of the avatar + label row.
    pub inner_height: f64,
    pub font_size: f64,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            border_color: Rgba::INK,
            text_color: Rgba::INK,
            rule_width: 0.5,
            inner_margin: 16.0,
            inner_height: 40.0,
            font_size: 17.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_opaque_and_translucent() {
        assert_eq!(Rgba::INK.css(), "rgb(29, 30, 29)");
        let translucent = Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 128,
        };
        assert_eq!(translucent.css(), "rgba(0, 0, 0, 0.502)");
    }

    #[test]
    fn automatic_font_size_scales_with_diameter() {
        let style = AvatarStyle::default();
        assert_eq!(style.font_size_for(50.0), 20.0);
    }

    #[test]
    fn fixed_font_size_ignores_diameter() {
        let style = AvatarStyle {
            automatic_size: false,
            font_size: 13.0,
            ..AvatarStyle::default()
        };
        assert_eq!(style.font_size_for(400.0), 13.0);
    }
}
