//! Game constants and the runtime configuration built from them.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::BoardError;

/// Side length of a standard board.
pub const DEFAULT_BOARD_SIZE: usize = 6;
/// Largest side whose cells a `Coordinate` can still address.
pub const MAX_BOARD_SIZE: usize = i32::MAX as usize;
/// Vessel lengths of the fixed fleet, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Number of vessels a side must lose to be defeated.
pub const FLEET_SIZE: usize = FLEET.len();
/// Placement attempts shared by the whole fleet before a board is discarded.
pub const PLACEMENT_ATTEMPTS: usize = 2000;
/// Fresh boards tried after the first one is exhausted.
pub const MAX_BOARD_RESTARTS: usize = 1000;

/// Runtime settings for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Fixed seed for reproducible boards and automated shots.
    pub seed: Option<u64>,
    pub max_board_restarts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            max_board_restarts: MAX_BOARD_RESTARTS,
        }
    }
}

impl GameConfig {
    /// Reject board sizes no board can be built with.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(self.board_size));
        }
        Ok(())
    }

    /// RNG seeded from `seed`, or from the thread RNG when unset.
    #[cfg(feature = "std")]
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }

    /// RNG seeded from `seed`, falling back to a fixed seed without `std`.
    #[cfg(not(feature = "std"))]
    pub fn rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed.unwrap_or_default())
    }
}
