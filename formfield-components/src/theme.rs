//! Minimal palette for field presentation.
//!
//! ## Usage
//!
//! Map the engine's derived signals (validity, focusedness) to colors. The
//! theme never reaches back into the focus or transition state: changing a
//! field's validity mid-transition recolors the accent and nothing else.

use formfield_core::Validity;

/// An RGBA color with `[0, 1]` float components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

    /// Creates an opaque color from RGB components.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Color roles consumed by field renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldTheme {
    /// Label color while the field is collapsed.
    pub label_resting: Color,
    /// Label color while the field is focused.
    pub label_focused: Color,
    /// Field container background.
    pub container: Color,
    /// Accent when no validity judgement exists.
    pub accent_neutral: Color,
    /// Accent for content judged valid.
    pub accent_positive: Color,
    /// Accent for content judged invalid.
    pub accent_negative: Color,
}

impl FieldTheme {
    /// Returns the accent color for a validity signal.
    ///
    /// Neutral for `Unknown`, positive for `Valid`, negative for `Invalid`.
    pub fn validity_accent(&self, validity: Validity) -> Color {
        match validity {
            Validity::Unknown => self.accent_neutral,
            Validity::Valid => self.accent_positive,
            Validity::Invalid => self.accent_negative,
        }
    }

    /// Returns the label color for the current focus state.
    pub fn label_color(&self, focused: bool) -> Color {
        if focused {
            self.label_focused
        } else {
            self.label_resting
        }
    }
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            label_resting: Color::from_rgb(0.286, 0.270, 0.309), // #49454F
            label_focused: Color::from_rgb(0.404, 0.314, 0.643), // #6750A4
            container: Color::WHITE,
            accent_neutral: Color::from_rgb(0.475, 0.455, 0.494), // #79747E
            accent_positive: Color::from_rgb(0.196, 0.529, 0.321), // #328752
            accent_negative: Color::from_rgb(0.702, 0.149, 0.118), // #B3261E
        }
    }
}
