//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutomatedPlayer, Board, BoardError, Coordinate, FleetGenerator, GameConfig, Match,
    MatchState, Player, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsolePlayer, HumanPlayer};
