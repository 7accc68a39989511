use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An opaque RGB colour, packed as `0xFFRRGGBB`
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    /// Red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Orange
    pub const ORANGE: Self = Self::rgb(255, 200, 0);
    /// Magenta
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Light grey
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);

    /// Create a colour from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create a colour from a packed value, the alpha byte is always set to opaque
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed | 0xFF00_0000)
    }

    /// The packed value `0xFFRRGGBB`
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// The red, green, and blue components
    pub const fn components(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }

    /// A random colour
    pub fn random() -> Self {
        let value: u32 = rand::random();
        Self::from_packed(value)
    }

    /// The default colour for a modification, based on its name. Names that match none of the
    /// known groups get a random colour.
    pub fn default_for(name: &str) -> Self {
        if name.contains("no modification") {
            return Self::LIGHT_GRAY;
        }
        let name = name.to_lowercase();
        if name.contains("phospho") {
            Self::RED
        } else if name.contains("pyro") {
            Self::rgb(255, 102, 51)
        } else if name.contains("ox") {
            Self::BLUE
        } else if name.contains("itraq") || name.contains("tmt") {
            Self::ORANGE
        } else if name.contains("carbamido") {
            Self::LIGHT_GRAY
        } else if name.contains("ace") {
            Self::rgb(153, 153, 0)
        } else if name.contains("glyco") {
            Self::MAGENTA
        } else {
            Self::random()
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.components();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn packing() {
        let color = Color::rgb(255, 102, 51);
        assert_eq!(color.packed(), 0xFFFF_6633);
        assert_eq!(color.components(), (255, 102, 51));
        assert_eq!(color.to_string(), "#FF6633");
        assert_eq!(Color::from_packed(0x00FF_6633), color);
    }

    #[test]
    fn heuristic() {
        assert_eq!(Color::default_for("Phosphorylation of S"), Color::RED);
        assert_eq!(Color::default_for("Pyrolidone from E"), Color::rgb(255, 102, 51));
        assert_eq!(Color::default_for("Oxidation of M"), Color::BLUE);
        assert_eq!(Color::default_for("iTRAQ 4-plex of K"), Color::ORANGE);
        assert_eq!(Color::default_for("TMT 6-plex of K"), Color::ORANGE);
        assert_eq!(Color::default_for("Carbamidomethylation of C"), Color::LIGHT_GRAY);
        assert_eq!(Color::default_for("Acetylation of K"), Color::rgb(153, 153, 0));
        assert_eq!(Color::default_for("Glycosylation"), Color::MAGENTA);
        assert_eq!(Color::default_for("no modification"), Color::LIGHT_GRAY);
        // Phospho comes before ox
        assert_eq!(Color::default_for("Phospho-oxidation"), Color::RED);
    }
}
