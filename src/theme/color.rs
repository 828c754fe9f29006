use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The input was not a `#rgb` or `#rrggbb` lowercase hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("valid hex color required (got {0:?})")]
pub struct ColorFormatError(pub String);

/// A 24-bit RGB color.
///
/// Two equivalent encodings exist: a `#rrggbb` hex string for editing and a
/// packed `0xRRGGBB` integer for wire transfer. Byte order is fixed R,G,B;
/// no alpha channel is modeled (a high byte on the wire is ignored).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode from the packed wire integer.
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Encode to the packed wire integer.
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Parse a `#rgb` or `#rrggbb` lowercase hex string. Shorthand digits
    /// are doubled, so `#f0a` means `#ff00aa`.
    pub fn from_hex(input: &str) -> Result<Self, ColorFormatError> {
        let invalid = || ColorFormatError(input.to_string());

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits
            .bytes()
            .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
        {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_packed(value))
            }
            3 => {
                let nibble = |c| u8::from_str_radix(c, 16).map_err(|_| invalid());
                let r = nibble(&digits[0..1])?;
                let g = nibble(&digits[1..2])?;
                let b = nibble(&digits[2..3])?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as a 7-character lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Hex-string form in JSON; the wire integer form is explicit in the DTOs.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl<'de> Visitor<'de> for HexVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a #rrggbb hex color string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Rgb, E> {
                Rgb::from_hex(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
