//! Turn sequencing between the human seat and the automated seat.
//!
//! The match owns both boards. On each turn the active player picks a target
//! against the opponent's board, which it can only read; the match fires the
//! shot. Targets the board refuses (off the board, already fired upon) are
//! reported back and the same player picks again without losing the turn. A
//! hit or a sinking keeps the turn, a miss hands it over.

use core::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotOutcome},
    player::Player,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Automated => write!(f, "automated"),
        }
    }
}

/// Current state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingHumanMove,
    AwaitingAutomatedMove,
    Won(Side),
}

impl MatchState {
    fn awaiting(side: Side) -> Self {
        match side {
            Side::Human => MatchState::AwaitingHumanMove,
            Side::Automated => MatchState::AwaitingAutomatedMove,
        }
    }

    /// Side expected to move, or `None` once the match is decided.
    pub fn active(self) -> Option<Side> {
        match self {
            MatchState::AwaitingHumanMove => Some(Side::Human),
            MatchState::AwaitingAutomatedMove => Some(Side::Automated),
            MatchState::Won(_) => None,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, MatchState::Won(_))
    }
}

/// Errors raised by the match itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A turn was requested after the match was decided.
    MatchOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MatchOver => write!(f, "The match is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Report of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Side that fired.
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets refused before this one was accepted.
    pub rejected: usize,
    /// State after the shot.
    pub state: MatchState,
}

struct Seat<P> {
    player: P,
    board: Board,
}

/// A match between a human seat and an automated seat.
pub struct Match<H, A> {
    human: Seat<H>,
    automated: Seat<A>,
    state: MatchState,
    shots: usize,
}

impl<H: Player, A: Player> Match<H, A> {
    /// Seat both players with their own boards. The human moves first.
    ///
    /// Boards still in setup are begun here, which fixes their fleets.
    pub fn new(
        human: H,
        mut human_board: Board,
        automated: A,
        mut automated_board: Board,
    ) -> Self {
        for board in [&mut human_board, &mut automated_board] {
            if !board.is_begun() {
                board.begin();
            }
        }
        Self {
            human: Seat {
                player: human,
                board: human_board,
            },
            automated: Seat {
                player: automated,
                board: automated_board,
            },
            state: MatchState::AwaitingHumanMove,
            shots: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Won(side) => Some(side),
            _ => None,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human.board,
            Side::Automated => &self.automated.board,
        }
    }

    /// Accepted shots so far, both sides together.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    pub fn human(&self) -> &H {
        &self.human.player
    }

    pub fn automated(&self) -> &A {
        &self.automated.player
    }

    /// Resolve one accepted shot by the active side.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<Turn> {
        let side = self
            .state
            .active()
            .ok_or_else(|| anyhow::anyhow!(GameError::MatchOver))?;
        let (target, outcome, rejected) = match side {
            Side::Human => {
                let shot = take_shot(&mut self.human.player, &mut self.automated.board, rng)?;
                self.automated.player.handle_opponent_shot(shot.0, shot.1);
                shot
            }
            Side::Automated => {
                let shot = take_shot(&mut self.automated.player, &mut self.human.board, rng)?;
                self.human.player.handle_opponent_shot(shot.0, shot.1);
                shot
            }
        };
        self.shots += 1;

        // Both boards are begun, so "every vessel sunk" is the whole fleet.
        self.state = if self.automated.board.is_defeated() {
            MatchState::Won(Side::Human)
        } else if self.human.board.is_defeated() {
            MatchState::Won(Side::Automated)
        } else if outcome.grants_extra_shot() {
            self.state
        } else {
            MatchState::awaiting(side.opponent())
        };
        if let MatchState::Won(winner) = self.state {
            info!("{} side wins after {} shots", winner, self.shots);
        }

        Ok(Turn {
            side,
            target,
            outcome,
            rejected,
            state: self.state,
        })
    }

    /// Play turns until one side wins.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Side> {
        loop {
            if let MatchState::Won(winner) = self.play_turn(rng)?.state {
                return Ok(winner);
            }
        }
    }
}

/// Ask `player` for targets until `board` accepts one.
fn take_shot<P: Player>(
    player: &mut P,
    board: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<(Coordinate, ShotOutcome, usize)> {
    let mut rejected = 0;
    loop {
        let target = player.choose_target(rng, board)?;
        match board.fire(target) {
            Ok(outcome) => {
                player.handle_shot_result(target, outcome);
                return Ok((target, outcome, rejected));
            }
            Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                debug!("target {} refused: {}", target, err);
                player.handle_rejected(target, &err);
                rejected += 1;
            }
            Err(err) => return Err(anyhow::anyhow!(err)),
        }
    }
}
