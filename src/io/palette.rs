//! Triangle colour sets
//!
//! A palette assigns one colour per sequence index, in blocks of
//! [`TRIANGLES_PER_COLOR`](crate::io::configuration::TRIANGLES_PER_COLOR)
//! consecutive triangles. The palette length caps the target chain length:
//! every triangle in a puzzle must have a colour.

use crate::io::configuration::TRIANGLES_PER_COLOR;
use crate::io::error::GenerationError;

/// A named RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor {
    /// Colour name used in printed folding instructions
    pub name: &'static str,
    /// Colour value as `[red, green, blue]`
    pub rgb: [u8; 3],
}

const PINK: PaletteColor = PaletteColor {
    name: "pink",
    rgb: [0xf2, 0x79, 0x8f],
};
const BLUE: PaletteColor = PaletteColor {
    name: "blue",
    rgb: [0x00, 0xc1, 0xed],
};
const PURPLE: PaletteColor = PaletteColor {
    name: "purple",
    rgb: [0xad, 0x59, 0xde],
};
const GREEN: PaletteColor = PaletteColor {
    name: "green",
    rgb: [0xa7, 0xf2, 0x05],
};

/// An ordered colour set, one colour per committed triangle
#[derive(Clone, Debug)]
pub struct Palette {
    /// Stable tag used to select the palette
    pub tag: &'static str,
    /// Per-triangle colours in sequence order
    colors: Vec<PaletteColor>,
}

impl Palette {
    fn from_blocks(tag: &'static str, order: [PaletteColor; 4]) -> Self {
        let colors = order
            .iter()
            .flat_map(|&color| std::iter::repeat_n(color, TRIANGLES_PER_COLOR))
            .collect();
        Self { tag, colors }
    }

    /// Per-triangle colours in sequence order
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Number of triangles this palette can colour
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colours
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour for a sequence index
    pub fn color(&self, index: usize) -> Option<PaletteColor> {
        self.colors.get(index).copied()
    }
}

/// Tags of all shipped palettes, in presentation order
pub const PALETTE_TAGS: [&str; 2] = ["pink-blue-purple-green", "purple-green-pink-blue"];

/// Look up a palette by tag
///
/// # Errors
///
/// Returns [`GenerationError::UnknownPalette`] when the tag matches no
/// shipped palette.
pub fn palette_by_tag(tag: &str) -> crate::Result<Palette> {
    match tag {
        "pink-blue-purple-green" => Ok(Palette::from_blocks(
            "pink-blue-purple-green",
            [PINK, BLUE, PURPLE, GREEN],
        )),
        "purple-green-pink-blue" => Ok(Palette::from_blocks(
            "purple-green-pink-blue",
            [PURPLE, GREEN, PINK, BLUE],
        )),
        _ => Err(GenerationError::UnknownPalette {
            name: tag.to_string(),
        }),
    }
}
