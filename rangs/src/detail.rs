//! Level-of-detail selection for a render pass.

use std::fmt;
use std::str::FromStr;

/// Bitmask selecting which feature classes are filled or outlined.
///
/// Bit `8 + flg` enables fill for pieces of class `flg`; bit `flg` enables
/// shoreline output for that class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailFlags(u32);

impl DetailFlags {
    /// Largest meaningful mask (13 bits).
    pub const MAX: u32 = 8191;

    /// Wrap a raw mask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw mask.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Flags for a detail level in the given mode.
    pub fn new(level: DetailLevel, mode: RenderMode) -> Self {
        let fill = match level {
            DetailLevel::Coastlines => 256 + 512,
            DetailLevel::Lakes => 256 + 512 + 1024,
            DetailLevel::IslandsInLakes => 256 + 512 + 1024 + 2048,
            DetailLevel::PondsOnIslands => 256 + 512 + 1024 + 2048 + 4096,
        };
        match mode {
            RenderMode::Fill => Self(fill),
            RenderMode::Outline => Self((fill >> 8) & 30),
        }
    }

    /// True if pieces of class `flg` feed fill rings.
    #[inline]
    pub fn fills(&self, flg: u8) -> bool {
        bit(self.0, 8 + u32::from(flg))
    }

    /// True if pieces of class `flg` feed shore lines.
    #[inline]
    pub fn outlines(&self, flg: u8) -> bool {
        bit(self.0, u32::from(flg))
    }
}

#[inline]
fn bit(mask: u32, index: u32) -> bool {
    index < u32::BITS && mask & (1 << index) != 0
}

impl fmt::Display for DetailFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// How many nesting levels of features to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailLevel {
    /// Coastlines only
    Coastlines,
    /// Add lakes
    Lakes,
    /// Add islands in lakes
    IslandsInLakes,
    /// Add ponds on islands
    #[default]
    PondsOnIslands,
}

impl DetailLevel {
    /// Level from its numeric form (0..=3).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DetailLevel::Coastlines),
            1 => Some(DetailLevel::Lakes),
            2 => Some(DetailLevel::IslandsInLakes),
            3 => Some(DetailLevel::PondsOnIslands),
            _ => None,
        }
    }

    /// Numeric form (0..=3).
    pub fn index(&self) -> u8 {
        match self {
            DetailLevel::Coastlines => 0,
            DetailLevel::Lakes => 1,
            DetailLevel::IslandsInLakes => 2,
            DetailLevel::PondsOnIslands => 3,
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetailLevel::Coastlines => "coastlines",
            DetailLevel::Lakes => "lakes",
            DetailLevel::IslandsInLakes => "islands-in-lakes",
            DetailLevel::PondsOnIslands => "ponds-on-islands",
        };
        f.write_str(name)
    }
}

impl FromStr for DetailLevel {
    type Err = String;

    /// Accepts the level name (`lakes`, `islands_in_lakes`, ...) or its
    /// index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        if let Ok(index) = normalized.parse::<u8>() {
            return DetailLevel::from_index(index)
                .ok_or_else(|| format!("detail level {} out of range 0..=3", index));
        }
        match normalized.as_str() {
            "coastlines" => Ok(DetailLevel::Coastlines),
            "lakes" => Ok(DetailLevel::Lakes),
            "islands-in-lakes" => Ok(DetailLevel::IslandsInLakes),
            "ponds-on-islands" => Ok(DetailLevel::PondsOnIslands),
            other => Err(format!("unknown detail level '{}'", other)),
        }
    }
}

/// Whether features are filled or drawn as outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Fill,
    Outline,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Fill => write!(f, "fill"),
            RenderMode::Outline => write!(f, "outline"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fill" => Ok(RenderMode::Fill),
            "outline" => Ok(RenderMode::Outline),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

/// Per-pass decode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Which classes feed fill and shore output
    pub detail: DetailFlags,
    /// Emit every boundary point of inline segments, including interior
    /// points and points of polygons with negative IDs
    pub emit_all_boundary_points: bool,
}

impl Default for RenderOptions {
    /// Fill every level of detail.
    fn default() -> Self {
        Self::new(DetailLevel::default(), RenderMode::default())
    }
}

impl RenderOptions {
    /// Options for a detail level and mode, without boundary emission.
    pub fn new(level: DetailLevel, mode: RenderMode) -> Self {
        Self {
            detail: DetailFlags::new(level, mode),
            emit_all_boundary_points: false,
        }
    }

    /// Set boundary emission.
    pub fn with_all_boundary_points(mut self, enabled: bool) -> Self {
        self.emit_all_boundary_points = enabled;
        self
    }
}
