/// 8-bit RGBA color, as handed to draw calls.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    /// Parses a `#rrggbb` or `#rrggbbaa` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Platform outline color.
    pub const SKY: Color = Color::rgb(0x7d, 0xc1, 0xf0);

    /// Normalized `[r, g, b, a]` in 0..=1, for GPU uniforms and vertices.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#7dc1f0"), Some(Color::SKY));
        assert_eq!(Color::from_hex("000000ff"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("#10203040"), Some(Color::rgba(0x10, 0x20, 0x30, 0x40)));
    }

    #[test]
    fn from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn to_f32_endpoints() {
        assert_eq!(Color::BLACK.to_f32(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::rgb(255, 255, 255).to_f32(), [1.0; 4]);
    }
}
