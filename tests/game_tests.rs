use std::collections::VecDeque;

use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    AutomatedPlayer, Board, BoardError, Cell, Coordinate, FleetGenerator, GameError, Match,
    MatchState, Orientation, Player, ShotOutcome, Side, Vessel, DEFAULT_BOARD_SIZE, FLEET_SIZE,
    MAX_BOARD_RESTARTS,
};

/// Fires a fixed list of targets and records what it was told.
#[derive(Default)]
struct Scripted {
    targets: VecDeque<Coordinate>,
    rejected: Vec<BoardError>,
    results: Vec<ShotOutcome>,
    incoming: Vec<(Coordinate, ShotOutcome)>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self {
            targets: targets.iter().map(|&(r, c)| Coordinate::new(r, c)).collect(),
            ..Self::default()
        }
    }
}

impl Player for Scripted {
    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        self.rejected.push(err.clone());
    }

    fn handle_shot_result(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        self.results.push(outcome);
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.incoming.push((target, outcome));
    }
}

fn board_with(vessels: &[(i32, i32, usize)]) -> Board {
    let mut board = Board::new(DEFAULT_BOARD_SIZE).unwrap();
    for &(r, c, len) in vessels {
        board
            .place_vessel(Vessel::new(Coordinate::new(r, c), len, Orientation::Horizontal).unwrap())
            .unwrap();
    }
    board.begin();
    board
}

#[test]
fn test_turn_sequence_and_human_win() {
    let mut rng = SmallRng::seed_from_u64(0);
    let human = Scripted::new(&[(0, 0), (2, 2), (0, 1), (0, 2), (5, 5)]);
    let automated = Scripted::new(&[(4, 4)]);
    let mut game = Match::new(
        human,
        board_with(&[(3, 3, 1)]),
        automated,
        board_with(&[(0, 0, 3), (5, 5, 1)]),
    );
    assert_eq!(game.state(), MatchState::AwaitingHumanMove);

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.side, Side::Human);
    assert_eq!(turn.outcome, ShotOutcome::Hit);
    assert_eq!(turn.state, MatchState::AwaitingHumanMove);

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Miss);
    assert_eq!(turn.state, MatchState::AwaitingAutomatedMove);

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.side, Side::Automated);
    assert_eq!(turn.outcome, ShotOutcome::Miss);
    assert_eq!(turn.state, MatchState::AwaitingHumanMove);

    assert_eq!(game.play_turn(&mut rng).unwrap().outcome, ShotOutcome::Hit);
    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Sunk(0));
    assert_eq!(turn.state, MatchState::AwaitingHumanMove);

    // the buffer around the sunk vessel is revealed
    let enemy = game.board(Side::Automated);
    for col in 0..=3 {
        assert_eq!(enemy.cell(Coordinate::new(1, col)), Some(Cell::Miss));
    }
    assert_eq!(enemy.cell(Coordinate::new(0, 3)), Some(Cell::Miss));

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Sunk(1));
    assert_eq!(turn.state, MatchState::Won(Side::Human));
    assert_eq!(game.winner(), Some(Side::Human));
    assert!(game.state().is_over());
    assert_eq!(game.shots_fired(), 6);
    assert!(game.board(Side::Automated).is_defeated());
    assert!(!game.board(Side::Human).is_defeated());

    assert_eq!(
        game.human().results,
        vec![
            ShotOutcome::Hit,
            ShotOutcome::Miss,
            ShotOutcome::Hit,
            ShotOutcome::Sunk(0),
            ShotOutcome::Sunk(1),
        ]
    );
    assert_eq!(game.automated().incoming.len(), 5);
    assert_eq!(
        game.human().incoming,
        vec![(Coordinate::new(4, 4), ShotOutcome::Miss)]
    );
}

#[test]
fn test_automated_win_ends_match() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = Match::new(
        Scripted::new(&[(2, 2)]),
        board_with(&[(4, 4, 1)]),
        Scripted::new(&[(4, 4)]),
        board_with(&[(0, 0, 1)]),
    );

    assert_eq!(game.play_turn(&mut rng).unwrap().outcome, ShotOutcome::Miss);
    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.side, Side::Automated);
    assert_eq!(turn.state, MatchState::Won(Side::Automated));
    assert_eq!(game.state().active(), None);

    let err = game.play_turn(&mut rng).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GameError>(),
        Some(&GameError::MatchOver)
    );
    assert_eq!(game.shots_fired(), 2);
}

#[test]
fn test_rejected_targets_keep_the_turn() {
    let mut rng = SmallRng::seed_from_u64(0);
    let human = Scripted::new(&[(6, 0), (-1, 2), (1, 1), (1, 1), (3, 3)]);
    let automated = Scripted::new(&[(0, 5)]);
    let mut game = Match::new(
        human,
        board_with(&[(5, 0, 1)]),
        automated,
        board_with(&[(5, 5, 1)]),
    );

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.rejected, 2);
    assert_eq!(turn.target, Coordinate::new(1, 1));
    assert_eq!(turn.outcome, ShotOutcome::Miss);
    assert_eq!(game.shots_fired(), 1);

    game.play_turn(&mut rng).unwrap();
    assert_eq!(game.state(), MatchState::AwaitingHumanMove);

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.rejected, 1);
    assert_eq!(turn.target, Coordinate::new(3, 3));
    assert_eq!(game.shots_fired(), 3);
    assert_eq!(
        game.human().rejected,
        vec![
            BoardError::OutOfBounds,
            BoardError::OutOfBounds,
            BoardError::AlreadyTargeted,
        ]
    );
}

#[test]
fn test_player_error_propagates() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut game = Match::new(
        Scripted::new(&[]),
        board_with(&[(0, 0, 1)]),
        Scripted::new(&[]),
        board_with(&[(0, 0, 1)]),
    );
    assert!(game.play_turn(&mut rng).is_err());
    assert_eq!(game.state(), MatchState::AwaitingHumanMove);
    assert_eq!(game.shots_fired(), 0);
}

#[test]
fn test_automated_matches_finish() {
    let generator = FleetGenerator::standard();
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let human_board = generator
            .generate_board(&mut rng, DEFAULT_BOARD_SIZE, MAX_BOARD_RESTARTS)
            .unwrap();
        let automated_board = generator
            .generate_board(&mut rng, DEFAULT_BOARD_SIZE, MAX_BOARD_RESTARTS)
            .unwrap();
        let mut game = Match::new(
            AutomatedPlayer::new(),
            human_board,
            AutomatedPlayer::new(),
            automated_board,
        );
        let winner = game.run(&mut rng).unwrap();
        let loser = game.board(winner.opponent());
        assert!(loser.is_defeated());
        assert_eq!(loser.sunk_count(), FLEET_SIZE);
        assert!(!game.board(winner).is_defeated());
        assert!(game.shots_fired() <= 2 * DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE);
    }
}

#[test]
fn test_automated_picks_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = Board::new(DEFAULT_BOARD_SIZE).unwrap();
    let mut player = AutomatedPlayer::new();
    for _ in 0..200 {
        let target = player.choose_target(&mut rng, &board).unwrap();
        assert!(board.contains(target));
    }
}

#[test]
fn test_match_begins_boards_in_setup() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut unbegun = Board::new(DEFAULT_BOARD_SIZE).unwrap();
    unbegun
        .place_vessel(Vessel::new(Coordinate::new(0, 0), 2, Orientation::Horizontal).unwrap())
        .unwrap();
    assert!(unbegun.is_blocked(Coordinate::new(1, 1)));

    // (1, 1) is in the placement buffer but still a legal target
    let mut game = Match::new(
        Scripted::new(&[(1, 1)]),
        board_with(&[(4, 4, 1)]),
        Scripted::new(&[]),
        unbegun,
    );
    assert!(game.board(Side::Automated).is_begun());
    assert!(game.board(Side::Human).is_begun());

    let turn = game.play_turn(&mut rng).unwrap();
    assert_eq!(turn.rejected, 0);
    assert_eq!(turn.outcome, ShotOutcome::Miss);
}
