use alloc::vec::Vec;

/// Default side length of the square grid.
pub const DEFAULT_SIZE: usize = 6;
/// Default fleet: one three-decker, two two-deckers, four single-deckers.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Random placement attempts per board before it is thrown away.
pub const PLACEMENT_ATTEMPTS: usize = 2000;
/// Whole-board rebuilds before random placement gives up.
pub const MAX_REBUILDS: usize = 1000;

/// Settings shared by both sides of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub placement_attempts: usize,
    pub max_rebuilds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            max_rebuilds: MAX_REBUILDS,
        }
    }
}

impl GameConfig {
    /// Default fleet on a board of the given size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Number of vessels each side places.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Check the settings before any board is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.size > i32::MAX as usize {
            return Err(ConfigError::SizeTooLarge(self.size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for &length in &self.fleet {
            if length == 0 {
                return Err(ConfigError::ZeroLengthVessel);
            }
            if length > self.size {
                return Err(ConfigError::VesselTooLong {
                    length,
                    size: self.size,
                });
            }
        }
        if self.placement_attempts == 0 || self.max_rebuilds == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize,
    SizeTooLarge(usize),
    EmptyFleet,
    ZeroLengthVessel,
    VesselTooLong { length: usize, size: usize },
    ZeroAttempts,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "board size must be at least 1"),
            ConfigError::SizeTooLarge(size) => write!(f, "board size {} is too large", size),
            ConfigError::EmptyFleet => write!(f, "fleet must contain at least one vessel"),
            ConfigError::ZeroLengthVessel => write!(f, "vessel length must be at least 1"),
            ConfigError::VesselTooLong { length, size } => write!(
                f,
                "vessel of length {} does not fit on a {}x{} board",
                length, size, size
            ),
            ConfigError::ZeroAttempts => write!(f, "placement limits must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
