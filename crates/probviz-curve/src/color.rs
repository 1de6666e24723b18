use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error returned when a color is not six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid color `{input}`, expected `rrggbb` or `#rrggbb`")]
pub struct ParseColorError {
    pub input: String,
}

impl Color {
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn from_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self { r, g, b }
    }
}

/// Palette cycled through when curves are added without an explicit color.
pub const COMMON_COLORS: [Color; 9] = [
    Color::from_hex(0x25_63_eb),
    Color::from_hex(0xe1_1d_48),
    Color::from_hex(0x05_96_69),
    Color::from_hex(0xf5_9e_42),
    Color::from_hex(0xa2_1c_af),
    Color::from_hex(0x0e_74_90),
    Color::from_hex(0xf4_3f_5e),
    Color::from_hex(0xb4_53_09),
    Color::from_hex(0x52_52_5b),
];

/// Returns the first palette color not present in `used`.
///
/// Falls back to the first palette color once the palette is exhausted.
///
/// # Examples
///
/// ```
/// use probviz_curve::color::{COMMON_COLORS, first_unused_color};
///
/// assert_eq!(first_unused_color(&[]), COMMON_COLORS[0]);
/// assert_eq!(first_unused_color(&[COMMON_COLORS[0]]), COMMON_COLORS[1]);
/// assert_eq!(first_unused_color(&COMMON_COLORS), COMMON_COLORS[0]);
/// ```
#[must_use]
pub fn first_unused_color(used: &[Color]) -> Color {
    COMMON_COLORS
        .into_iter()
        .find(|color| !used.contains(color))
        .unwrap_or(COMMON_COLORS[0])
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError {
            input: s.to_owned(),
        };
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        Ok(Self::from_hex(value))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_renders_as_hex() {
        let rendered = COMMON_COLORS.map(|c| c.to_string());
        assert_eq!(
            rendered,
            [
                "#2563eb", "#e11d48", "#059669", "#f59e42", "#a21caf", "#0e7490", "#f43f5e",
                "#b45309", "#52525b",
            ]
        );
    }

    #[test]
    fn test_parse_with_and_without_hash() {
        let expected = Color::from_rgb(0x25, 0x63, 0xeb);
        assert_eq!("2563eb".parse::<Color>().unwrap(), expected);
        assert_eq!("#2563EB".parse::<Color>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "#", "2563e", "2563ebb", "zz63eb", "+563eb"] {
            assert!(input.parse::<Color>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_first_unused_skips_used_colors() {
        let used = [COMMON_COLORS[0], COMMON_COLORS[1], COMMON_COLORS[3]];
        assert_eq!(first_unused_color(&used), COMMON_COLORS[2]);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&COMMON_COLORS[2]).unwrap();
        assert_eq!(json, "\"#059669\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, COMMON_COLORS[2]);
    }
}
