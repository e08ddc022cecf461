use alloc::format;
use alloc::string::String;
use core::fmt;
use core::ops::Range;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Normalized RGB color with an alpha channel, every component in `[0.0, 1.0]`.
/// Compared by value, two swatches are the same exactly when their channels are.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Three independent uniform channels in `[0, 1)`, alpha stays opaque.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::opaque(rng.random(), rng.random(), rng.random())
    }

    /// Canonical `#RRGGBB` code, uppercase, alpha excluded.
    pub fn hex_code(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
        )
    }

    /// Parses a `#RRGGBB` code. Case-insensitive, the `#` prefix is required.
    pub fn from_hex_code(code: &str) -> Result<Self> {
        let digits = code.strip_prefix('#').ok_or(GameError::InvalidColorCode)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GameError::InvalidColorCode);
        }

        let parse = |range: Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| GameError::InvalidColorCode)
        };

        Ok(Self::opaque(
            byte_to_channel(parse(0..2)?),
            byte_to_channel(parse(2..4)?),
            byte_to_channel(parse(4..6)?),
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_code())
    }
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

const fn byte_to_channel(byte: u8) -> f32 {
    byte as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_code_is_canonical_uppercase() {
        assert_eq!(Color::opaque(1.0, 0.0, 0.0).hex_code(), "#FF0000");
        assert_eq!(Color::opaque(0.0, 0.5, 1.0).hex_code(), "#0080FF");
        assert_eq!(Color::opaque(0.0, 0.0, 0.0).hex_code(), "#000000");
    }

    #[test]
    fn out_of_range_channels_are_clamped_into_the_code() {
        assert_eq!(Color::opaque(1.5, -0.5, 0.0).hex_code(), "#FF0000");
    }

    #[test]
    fn hex_round_trip_is_stable() {
        for code in ["#07C0DE", "#ffffff", "#000000", "#27a567", "#808080"] {
            let color = Color::from_hex_code(code).unwrap();
            assert_eq!(color.hex_code(), code.to_uppercase());
            assert_eq!(
                Color::from_hex_code(&color.hex_code()).unwrap().hex_code(),
                color.hex_code()
            );
        }
    }

    #[test]
    fn parsed_colors_are_opaque() {
        assert_eq!(Color::from_hex_code("#FF0000").unwrap().alpha, 1.0);
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "FF0000", "#FF000", "#FF00001", "#GG0000", "#+10000"] {
            assert_eq!(Color::from_hex_code(code), Err(GameError::InvalidColorCode));
        }
    }

    #[test]
    fn random_channels_are_normalized_and_opaque() {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let color = Color::random(&mut rng);
            for channel in [color.red, color.green, color.blue] {
                assert!((0.0..1.0).contains(&channel));
            }
            assert_eq!(color.alpha, 1.0);
        }
    }

    #[test]
    fn display_renders_the_hex_code() {
        let color = Color::from_hex_code("#0080FF").unwrap();
        assert_eq!(format!("{}", color), "#0080FF");
    }
}
