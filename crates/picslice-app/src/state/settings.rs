use picslice_core::GridDims;
use serde::{Deserialize, Serialize};

/// Persisted user preferences.
///
/// Only the difficulty selection survives a restart; board and image state
/// never do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub(crate) difficulty: Difficulty,
}

/// Grid side selection. Every option is square (`rows == cols`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Difficulty {
    #[default]
    Side3,
    Side4,
    Side5,
    Side6,
    Side8,
}

impl Difficulty {
    pub(crate) const ALL: [Self; 5] = [
        Self::Side3,
        Self::Side4,
        Self::Side5,
        Self::Side6,
        Self::Side8,
    ];

    #[must_use]
    pub(crate) const fn side(self) -> u8 {
        match self {
            Self::Side3 => 3,
            Self::Side4 => 4,
            Self::Side5 => 5,
            Self::Side6 => 6,
            Self::Side8 => 8,
        }
    }

    #[must_use]
    pub(crate) const fn dims(self) -> GridDims {
        // Every side in the selection set is positive.
        match GridDims::square(self.side()) {
            Ok(dims) => dims,
            Err(_) => unreachable!(),
        }
    }

    #[must_use]
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Side3 => "3 x 3",
            Self::Side4 => "4 x 4",
            Self::Side5 => "5 x 5",
            Self::Side6 => "6 x 6",
            Self::Side8 => "8 x 8",
        }
    }
}
