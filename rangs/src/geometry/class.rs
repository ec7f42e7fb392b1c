//! Feature classes and the palette used to draw them.

use std::fmt;

/// Thematic class of an emitted shape.
///
/// Fill rings take their class from the piece's `flg` value; shore lines
/// are all [`FeatureClass::Outline`] unless `flg` marks an error or an
/// unknown class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    Ocean,
    Land,
    Lake,
    IslandInLake,
    PondOnIsland,
    Outline,
    Error,
    Unknown,
}

impl FeatureClass {
    /// `flg` value reserved for error pieces.
    pub const ERROR_FLG: u8 = 17;

    /// Class of a fill ring started by a piece with `flg`.
    pub fn fill_for(flg: u8) -> Self {
        match flg {
            0 => FeatureClass::Ocean,
            1 => FeatureClass::Land,
            2 => FeatureClass::Lake,
            3 => FeatureClass::IslandInLake,
            4 => FeatureClass::PondOnIsland,
            Self::ERROR_FLG => FeatureClass::Error,
            _ => FeatureClass::Unknown,
        }
    }

    /// Class of a shore line started by a piece with `flg`.
    pub fn shore_for(flg: u8) -> Self {
        match flg {
            0..=4 => FeatureClass::Outline,
            Self::ERROR_FLG => FeatureClass::Error,
            _ => FeatureClass::Unknown,
        }
    }

    /// Slot of this class in a [`Palette`].
    pub fn palette_index(&self) -> usize {
        match self {
            FeatureClass::Ocean => 0,
            FeatureClass::Land => 1,
            FeatureClass::Lake => 2,
            FeatureClass::IslandInLake => 3,
            FeatureClass::PondOnIsland => 4,
            FeatureClass::Outline => 5,
            FeatureClass::Error => 6,
            FeatureClass::Unknown => 7,
        }
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeatureClass::Ocean => "ocean",
            FeatureClass::Land => "land",
            FeatureClass::Lake => "lake",
            FeatureClass::IslandInLake => "island-in-lake",
            FeatureClass::PondOnIsland => "pond-on-island",
            FeatureClass::Outline => "outline",
            FeatureClass::Error => "error",
            FeatureClass::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One color per [`FeatureClass`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 8],
}

impl Default for Palette {
    fn default() -> Self {
        let blue = Rgb::new(0, 0, 255);
        let green = Rgb::new(0, 255, 0);
        let cyan = Rgb::new(0, 255, 255);
        Self {
            colors: [
                blue,
                green,
                cyan,
                green,
                cyan,
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 0),
                Rgb::new(255, 255, 255),
            ],
        }
    }
}

impl Palette {
    /// Color for `class`.
    pub fn color(&self, class: FeatureClass) -> Rgb {
        self.colors[class.palette_index()]
    }

    /// Replace the color for `class`.
    pub fn set_color(&mut self, class: FeatureClass, color: Rgb) {
        self.colors[class.palette_index()] = color;
    }
}
