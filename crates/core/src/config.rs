//! Generation options, their defaults, and up-front validation.

use serde::{Deserialize, Serialize};

pub const MAX_DIMENSION: usize = 4096;
pub const MAX_CORRIDOR_RADIUS: u32 = 64;
pub const MAX_BORDER_THICKNESS: usize = 64;

/// Rejected generation options. Raised before any grid is allocated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("width must be positive")]
    ZeroWidth,

    #[error("height must be positive")]
    ZeroHeight,

    #[error("{axis} {value} exceeds the maximum of {max}")]
    DimensionTooLarge { axis: &'static str, value: usize, max: usize },

    #[error("wall density {0} is not a percentage (0..=100)")]
    WallDensityOutOfRange(u8),

    #[error("corridor radius {value} exceeds the maximum of {max}")]
    CorridorRadiusTooLarge { value: u32, max: u32 },

    #[error("border thickness must be at least 1")]
    ZeroBorder,

    #[error("border thickness {value} exceeds the maximum of {max}")]
    BorderTooThick { value: usize, max: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed text. Empty means "no seed": the run draws runtime entropy and is not reproducible.
    pub seed: String,
    /// Interior width in cells, before the border is added.
    pub width: usize,
    /// Interior height in cells, before the border is added.
    pub height: usize,
    /// Percent chance that an interior cell starts as wall.
    pub wall_density: u8,
    pub smoothing_passes: u32,
    /// Wall regions smaller than this are turned into floor.
    pub wall_min_region_size: usize,
    /// Floor regions smaller than this are filled in; the rest become rooms.
    pub floor_min_region_size: usize,
    pub corridor_radius: u32,
    pub border_thickness: usize,
    /// Force two corner squares to floor so spawn points have somewhere to go.
    pub reserve_spawn_zones: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            width: 100,
            height: 100,
            wall_density: 51,
            smoothing_passes: 5,
            wall_min_region_size: 50,
            floor_min_region_size: 50,
            corridor_radius: 4,
            border_thickness: 1,
            reserve_spawn_zones: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self { seed: seed.into(), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::DimensionTooLarge { axis, value, max: MAX_DIMENSION });
            }
        }
        if self.wall_density > 100 {
            return Err(ConfigError::WallDensityOutOfRange(self.wall_density));
        }
        if self.corridor_radius > MAX_CORRIDOR_RADIUS {
            return Err(ConfigError::CorridorRadiusTooLarge {
                value: self.corridor_radius,
                max: MAX_CORRIDOR_RADIUS,
            });
        }
        if self.border_thickness == 0 {
            return Err(ConfigError::ZeroBorder);
        }
        if self.border_thickness > MAX_BORDER_THICKNESS {
            return Err(ConfigError::BorderTooThick {
                value: self.border_thickness,
                max: MAX_BORDER_THICKNESS,
            });
        }
        Ok(())
    }
}
