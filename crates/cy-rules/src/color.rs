//! Liturgical colors.

use std::convert::Infallible;
use std::str::FromStr;

/// A liturgical color.
///
/// Rule records store colors as free text; the common names parse into the
/// named variants and anything else is preserved verbatim in
/// [`Color::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// White.
    White,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Violet (also parsed from "purple").
    Violet,
    /// Rose.
    Rose,
    /// Black.
    Black,
    /// Blue.
    Blue,
    /// Gold.
    Gold,
    /// Unbleached linen (Lenten array).
    Unbleached,
    /// Any other color name.
    Other(String),
}

impl Color {
    /// Parse a color name, case-insensitively.  Never fails.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "white" => Color::White,
            "red" => Color::Red,
            "green" => Color::Green,
            "violet" | "purple" => Color::Violet,
            "rose" => Color::Rose,
            "black" => Color::Black,
            "blue" => Color::Blue,
            "gold" => Color::Gold,
            "unbleached" | "lenten array" => Color::Unbleached,
            _ => Color::Other(name.trim().to_string()),
        }
    }

    /// Lower-case display name.
    pub fn name(&self) -> &str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Violet => "violet",
            Color::Rose => "rose",
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Gold => "gold",
            Color::Unbleached => "unbleached",
            Color::Other(name) => name,
        }
    }
}

impl FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Color::parse(&name))
    }
}
