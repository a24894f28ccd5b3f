use log::trace;
use rand::{rngs::SmallRng, Rng};

use crate::{
    board::Board,
    common::{BoardError, Coordinate},
    player::Player,
};

/// Computer player that fires uniformly at random.
///
/// It keeps no record of earlier shots, so it may pick a cell that was
/// already fired upon; the match rejects such picks and asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedPlayer;

impl AutomatedPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AutomatedPlayer {
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        let size = opponent.size();
        let target = Coordinate::from((rng.random_range(0..size), rng.random_range(0..size)));
        trace!("automated player picks {}", target);
        Ok(target)
    }

    fn handle_rejected(&mut self, target: Coordinate, err: &BoardError) {
        trace!("automated pick {} refused: {}", target, err);
    }
}
