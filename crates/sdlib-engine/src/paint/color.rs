use serde::Deserialize;

/// Straight-alpha sRGB color with byte channels.
///
/// This is the representation the renderer takes for draw colors, color mods
/// and vertex colors, so no conversion happens at draw time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Moves each RGB channel `t` of the way from `self` toward `to`.
    ///
    /// Intermediate values are truncated toward zero. Alpha is taken from `self`.
    pub fn lerp_rgb(self, to: Color, t: f64) -> Color {
        let ch = |from: u8, to: u8| -> u8 {
            let v = from as f64 + t * (to as f64 - from as f64);
            v.clamp(0.0, 255.0) as u8
        };
        Color {
            r: ch(self.r, to.r),
            g: ch(self.g, to.g),
            b: ch(self.b, to.b),
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::WHITE.lerp_rgb(Color::LIGHT_GRAY, 0.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp_rgb(Color::LIGHT_GRAY, 1.0), Color::LIGHT_GRAY);
    }

    #[test]
    fn lerp_truncates_channels() {
        // 255 + 0.5 * (211 - 255) = 233.0; 255 + 0.51 * -44 = 232.56 -> 232
        assert_eq!(Color::WHITE.lerp_rgb(Color::LIGHT_GRAY, 0.5).r, 233);
        assert_eq!(Color::WHITE.lerp_rgb(Color::LIGHT_GRAY, 0.51).r, 232);
    }

    #[test]
    fn lerp_keeps_source_alpha() {
        let c = Color::rgba(0, 0, 0, 40).lerp_rgb(Color::WHITE, 1.0);
        assert_eq!(c, Color::rgba(255, 255, 255, 40));
    }

    #[test]
    fn deserializes_with_default_alpha() {
        let c: Color = toml::from_str("r = 1\ng = 2\nb = 3").unwrap();
        assert_eq!(c, Color::rgb(1, 2, 3));
    }
}
