//! The 120-entry standard palette, its hue groups and selection helpers
//!
//! Entries are stored row-major over a 12×10 chooser: row 0 holds the grays,
//! row 1 the base hues, rows 2 to 5 the light shades (lightest first) and
//! rows 6 to 9 the dark shades (darkest last).

use crate::color::rgb::Rgb;
use crate::io::configuration::{PALETTE_COLS, PALETTE_ROWS};
use crate::io::error::{BoxesError, Result, out_of_range};

/// Name and color of one palette swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Snake-case color name
    pub name: &'static str,
    /// Swatch color
    pub rgb: Rgb,
}

const fn entry(name: &'static str, hex: u32) -> PaletteEntry {
    PaletteEntry {
        name,
        rgb: Rgb::from_hex(hex),
    }
}

/// Palette swatches in chooser order
pub const STANDARD_PALETTE: [PaletteEntry; PALETTE_COLS * PALETTE_ROWS] = [
    // grays
    entry("black", 0x000000),
    entry("dark_gray_4", 0x111111),
    entry("dark_gray_3", 0x1C1C1C),
    entry("dark_gray_2", 0x333333),
    entry("dark_gray_1", 0x666666),
    entry("gray", 0x808080),
    entry("light_gray_1", 0x999999),
    entry("light_gray_2", 0xB2B2B2),
    entry("light_gray_3", 0xCCCCCC),
    entry("light_gray_4", 0xDDDDDD),
    entry("light_gray_5", 0xEEEEEE),
    entry("white", 0xFFFFFF),
    // base hues
    entry("yellow", 0xFFFF00),
    entry("gold", 0xFFBF00),
    entry("orange", 0xFF8000),
    entry("brick", 0xFF4000),
    entry("red", 0xFF0000),
    entry("magenta", 0xBF0041),
    entry("purple", 0x800080),
    entry("indigo", 0x55308D),
    entry("blue", 0x2A6099),
    entry("teal", 0x158466),
    entry("green", 0x00A933),
    entry("lime", 0x81D41A),
    // light 4
    entry("light_yellow_4", 0xFFFFD7),
    entry("light_gold_4", 0xFFF5CE),
    entry("light_orange_4", 0xFFDBB6),
    entry("light_brick_4", 0xFFD8CE),
    entry("light_red_4", 0xFFD7D7),
    entry("light_magenta_4", 0xF7D1D5),
    entry("light_purple_4", 0xE0C2CD),
    entry("light_indigo_4", 0xDEDCE6),
    entry("light_blue_4", 0xDEE6EF),
    entry("light_teal_4", 0xDEE7E5),
    entry("light_green_4", 0xDDE8CB),
    entry("light_lime_4", 0xF6F9D4),
    // light 3
    entry("light_yellow_3", 0xFFFFA6),
    entry("light_gold_3", 0xFFE994),
    entry("light_orange_3", 0xFFB66C),
    entry("light_brick_3", 0xFFAA95),
    entry("light_red_3", 0xFFA6A6),
    entry("light_magenta_3", 0xEC9BA4),
    entry("light_purple_3", 0xBF819E),
    entry("light_indigo_3", 0xB7B3CA),
    entry("light_blue_3", 0xB4C7DC),
    entry("light_teal_3", 0xB3CAC7),
    entry("light_green_3", 0xAFD095),
    entry("light_lime_3", 0xE8F2A1),
    // light 2
    entry("light_yellow_2", 0xFFFF6D),
    entry("light_gold_2", 0xFFDE59),
    entry("light_orange_2", 0xFF972F),
    entry("light_brick_2", 0xFF7B59),
    entry("light_red_2", 0xFF6D6D),
    entry("light_magenta_2", 0xE16173),
    entry("light_purple_2", 0xA1467E),
    entry("light_indigo_2", 0x8E86AE),
    entry("light_blue_2", 0x729FCF),
    entry("light_teal_2", 0x81ACA6),
    entry("light_green_2", 0x77BC65),
    entry("light_lime_2", 0xD4EA6B),
    // light 1
    entry("light_yellow_1", 0xFFFF38),
    entry("light_gold_1", 0xFFD428),
    entry("light_orange_1", 0xFF860D),
    entry("light_brick_1", 0xFF5429),
    entry("light_red_1", 0xFF3838),
    entry("light_magenta_1", 0xD62E4E),
    entry("light_purple_1", 0x8D1D75),
    entry("light_indigo_1", 0x6B5E9B),
    entry("light_blue_1", 0x5983B0),
    entry("light_teal_1", 0x50938A),
    entry("light_green_1", 0x3FAF46),
    entry("light_lime_1", 0xC9E64D),
    // dark 1
    entry("dark_yellow_1", 0xCCCC00),
    entry("dark_gold_1", 0xCC9900),
    entry("dark_orange_1", 0xCC6600),
    entry("dark_brick_1", 0xCC3300),
    entry("dark_red_1", 0xC9211E),
    entry("dark_magenta_1", 0x990033),
    entry("dark_purple_1", 0x660066),
    entry("dark_indigo_1", 0x442670),
    entry("dark_blue_1", 0x224D7A),
    entry("dark_teal_1", 0x116A52),
    entry("dark_green_1", 0x008729),
    entry("dark_lime_1", 0x67AA15),
    // dark 2
    entry("dark_yellow_2", 0x999900),
    entry("dark_gold_2", 0x997300),
    entry("dark_orange_2", 0x994C00),
    entry("dark_brick_2", 0x992600),
    entry("dark_red_2", 0x8D281E),
    entry("dark_magenta_2", 0x730026),
    entry("dark_purple_2", 0x4D004D),
    entry("dark_indigo_2", 0x331D54),
    entry("dark_blue_2", 0x19395C),
    entry("dark_teal_2", 0x0D4F3D),
    entry("dark_green_2", 0x00651F),
    entry("dark_lime_2", 0x4D7F10),
    // dark 3
    entry("dark_yellow_3", 0x666600),
    entry("dark_gold_3", 0x664D00),
    entry("dark_orange_3", 0x663300),
    entry("dark_brick_3", 0x661A00),
    entry("dark_red_3", 0x5E1A14),
    entry("dark_magenta_3", 0x4C0019),
    entry("dark_purple_3", 0x330033),
    entry("dark_indigo_3", 0x221338),
    entry("dark_blue_3", 0x112639),
    entry("dark_teal_3", 0x08352A),
    entry("dark_green_3", 0x004314),
    entry("dark_lime_3", 0x33550B),
    // dark 4
    entry("dark_yellow_4", 0x333300),
    entry("dark_gold_4", 0x332600),
    entry("dark_orange_4", 0x331A00),
    entry("dark_brick_4", 0x330D00),
    entry("dark_red_4", 0x2F0D0A),
    entry("dark_magenta_4", 0x26000D),
    entry("dark_purple_4", 0x1A001A),
    entry("dark_indigo_4", 0x110A1C),
    entry("dark_blue_4", 0x09131D),
    entry("dark_teal_4", 0x041A15),
    entry("dark_green_4", 0x00220A),
    entry("dark_lime_4", 0x1A2A05),
];

// Shade rows, see the module docs
const BASE_ROW: usize = 1;
const PALE_ROWS: [usize; 2] = [2, 3];
const DEEP_DARK_ROWS: [usize; 2] = [8, 9];
const DEEP_DARK_GRAYS: [usize; 3] = [0, 1, 2];
const PALE_GRAYS: [usize; 3] = [9, 10, 11];

/// Column and row of a swatch in the chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteSlot {
    /// Zero-based chooser column
    pub col: usize,
    /// Zero-based chooser row
    pub row: usize,
}

/// A color from the standard palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardColor {
    index: usize,
}

impl StandardColor {
    /// The first swatch of the table
    pub const BLACK: Self = Self { index: 0 };

    /// Look up a color by its palette name
    ///
    /// # Errors
    ///
    /// Returns `UnknownColorName` if no swatch carries the name
    pub fn from_name(name: &str) -> Result<Self> {
        STANDARD_PALETTE
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| Self { index })
            .ok_or_else(|| BoxesError::UnknownColorName {
                name: name.to_string(),
            })
    }

    /// Color at a chooser position
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` outside the 12×10 chooser
    pub const fn from_slot(col: usize, row: usize) -> Result<Self> {
        if col >= PALETTE_COLS {
            return Err(out_of_range("palette col", col, PALETTE_COLS));
        }
        if row >= PALETTE_ROWS {
            return Err(out_of_range("palette row", row, PALETTE_ROWS));
        }
        Ok(Self {
            index: row * PALETTE_COLS + col,
        })
    }

    /// Every palette color in table order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..STANDARD_PALETTE.len()).map(|index| Self { index })
    }

    /// Nearest palette color by summed channel difference
    ///
    /// Ties go to the color defined first in the table.
    pub fn nearest(rgb: Rgb) -> Self {
        let mut best = Self { index: 0 };
        let mut best_distance = u32::MAX;
        for (index, entry) in STANDARD_PALETTE.iter().enumerate() {
            let distance = entry.rgb.manhattan_distance(rgb);
            if distance < best_distance {
                best = Self { index };
                best_distance = distance;
            }
        }
        best
    }

    fn entry(self) -> PaletteEntry {
        STANDARD_PALETTE
            .get(self.index)
            .copied()
            .unwrap_or(entry("black", 0x000000))
    }

    /// Palette name
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Swatch color
    pub fn rgb(self) -> Rgb {
        self.entry().rgb
    }

    /// Position in the chooser
    pub const fn slot(self) -> PaletteSlot {
        PaletteSlot {
            col: self.index % PALETTE_COLS,
            row: self.index / PALETTE_COLS,
        }
    }

    /// Black and the two darkest shades of every hue and of gray
    pub fn is_deep_dark(self) -> bool {
        let slot = self.slot();
        if slot.row == 0 {
            DEEP_DARK_GRAYS.contains(&slot.col)
        } else {
            DEEP_DARK_ROWS.contains(&slot.row)
        }
    }

    /// White and the two lightest shades of every hue and of gray
    pub fn is_pale(self) -> bool {
        let slot = self.slot();
        if slot.row == 0 {
            PALE_GRAYS.contains(&slot.col)
        } else {
            PALE_ROWS.contains(&slot.row)
        }
    }

    /// Whether this is the white swatch
    pub fn is_white(self) -> bool {
        self.rgb() == Rgb::new(255, 255, 255)
    }
}

/// Named family of palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteGroup {
    /// Black through white
    Grays,
    /// Yellow shades
    Yellows,
    /// Gold shades
    Golds,
    /// Orange shades
    Oranges,
    /// Brick shades
    Bricks,
    /// Red shades
    Reds,
    /// Magenta shades
    Magentas,
    /// Purple shades
    Purples,
    /// Indigo shades
    Indigos,
    /// Blue shades
    Blues,
    /// Teal shades
    Teals,
    /// Green shades
    Greens,
    /// Lime shades
    Limes,
}

impl PaletteGroup {
    /// The twelve hue groups in chooser column order
    pub const HUES: [Self; 12] = [
        Self::Yellows,
        Self::Golds,
        Self::Oranges,
        Self::Bricks,
        Self::Reds,
        Self::Magentas,
        Self::Purples,
        Self::Indigos,
        Self::Blues,
        Self::Teals,
        Self::Greens,
        Self::Limes,
    ];

    const fn hue_column(self) -> Option<usize> {
        match self {
            Self::Grays => None,
            Self::Yellows => Some(0),
            Self::Golds => Some(1),
            Self::Oranges => Some(2),
            Self::Bricks => Some(3),
            Self::Reds => Some(4),
            Self::Magentas => Some(5),
            Self::Purples => Some(6),
            Self::Indigos => Some(7),
            Self::Blues => Some(8),
            Self::Teals => Some(9),
            Self::Greens => Some(10),
            Self::Limes => Some(11),
        }
    }

    /// Colors of the group from lightest to darkest
    pub fn colors(self) -> Vec<StandardColor> {
        match self.hue_column() {
            None => (0..PALETTE_COLS)
                .rev()
                .filter_map(|col| StandardColor::from_slot(col, 0).ok())
                .collect(),
            Some(col) => [2, 3, 4, 5, BASE_ROW, 6, 7, 8, 9]
                .into_iter()
                .filter_map(|row| StandardColor::from_slot(col, row).ok())
                .collect(),
        }
    }
}

/// Drop the deepest darks and/or the palest lights, keeping order
pub fn filter_colors(
    colors: &[StandardColor],
    avoid_dark: bool,
    avoid_light: bool,
) -> Vec<StandardColor> {
    colors
        .iter()
        .copied()
        .filter(|color| !(avoid_dark && color.is_deep_dark()))
        .filter(|color| !(avoid_light && color.is_pale()))
        .collect()
}

/// Palette colors eligible for random draws
pub fn random_pool(exclude_dark: bool, exclude_white: bool) -> Vec<StandardColor> {
    StandardColor::all()
        .filter(|color| !(exclude_dark && color.is_deep_dark()))
        .filter(|color| !(exclude_white && color.is_white()))
        .collect()
}

/// Ping-pong sequence: `a b c d` becomes `a b c d c b`
pub fn bounce<T: Clone>(sequence: &[T]) -> Vec<T> {
    let mut result = sequence.to_vec();
    if sequence.len() > 2 {
        let inner = sequence.get(1..sequence.len() - 1).unwrap_or_default();
        result.extend(inner.iter().rev().cloned());
    }
    result
}
