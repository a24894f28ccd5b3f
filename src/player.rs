use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotOutcome},
};

/// Interface implemented by the different kinds of player.
///
/// A player only ever sees the opponent's board through a shared reference;
/// the match applies the shot.
pub trait Player {
    /// Choose the next target on `opponent`.
    fn choose_target(&mut self, rng: &mut SmallRng, opponent: &Board)
        -> anyhow::Result<Coordinate>;

    /// Inform the player that its target was refused; it will be asked again.
    fn handle_rejected(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        (**self).choose_target(rng, opponent)
    }

    fn handle_rejected(&mut self, target: Coordinate, err: &BoardError) {
        (**self).handle_rejected(target, err)
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).handle_shot_result(target, outcome)
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).handle_opponent_shot(target, outcome)
    }
}
