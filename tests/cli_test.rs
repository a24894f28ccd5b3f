use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    parse_target, AutomatedPlayer, Board, Coordinate, HumanPlayer, InputError, MalformedInput,
    Match, MatchState, Orientation, Side, Vessel,
};

const PROMPT: &str = "Your move (row col): ";

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("3 4"), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_target("  3\t4 \n"), Ok(Coordinate::new(2, 3)));
    // zero is well formed; the board rejects it
    assert_eq!(parse_target("0 1"), Ok(Coordinate::new(-1, 0)));
}

#[test]
fn test_parse_target_malformed() {
    assert_eq!(parse_target(""), Err(MalformedInput::WrongTokenCount(0)));
    assert_eq!(parse_target("1\n"), Err(MalformedInput::WrongTokenCount(1)));
    assert_eq!(parse_target("1 2 3"), Err(MalformedInput::WrongTokenCount(3)));
    assert_eq!(
        parse_target("a 1"),
        Err(MalformedInput::NotANumber("a".to_string()))
    );
    assert_eq!(
        parse_target("-1 2"),
        Err(MalformedInput::NotANumber("-1".to_string()))
    );
    assert_eq!(
        parse_target("2 1.5"),
        Err(MalformedInput::NotANumber("1.5".to_string()))
    );
    assert_eq!(
        parse_target("99999999999 1"),
        Err(MalformedInput::NotANumber("99999999999".to_string()))
    );
}

#[test]
fn test_human_player_reprompts() {
    let input = Cursor::new(&b"hello\n1 2 3\n2 3\n"[..]);
    let mut player = HumanPlayer::new(input, Vec::new());
    assert_eq!(player.read_target().unwrap(), Coordinate::new(1, 2));

    let (_, output) = player.into_inner();
    let expected = format!(
        "{p}Enter exactly two numbers (row and column), got 1\n\
         {p}Enter exactly two numbers (row and column), got 3\n\
         {p}",
        p = PROMPT
    );
    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn test_human_player_closed_input() {
    let mut player = HumanPlayer::new(Cursor::new(&b""[..]), Vec::new());
    assert!(matches!(player.read_target(), Err(InputError::Closed)));
    let (_, output) = player.into_inner();
    assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", PROMPT));
}

#[test]
fn test_human_player_in_match() {
    let mut enemy = Board::new(6).unwrap();
    for (r, c) in [(0, 0), (5, 5)] {
        enemy
            .place_vessel(Vessel::new(Coordinate::new(r, c), 1, Orientation::Vertical).unwrap())
            .unwrap();
    }
    enemy.begin();
    let mut own = Board::new(6).unwrap();
    own.place_vessel(Vessel::new(Coordinate::new(3, 3), 1, Orientation::Vertical).unwrap())
        .unwrap();
    own.begin();

    let input = Cursor::new(&b"1 1\n7 7\n1 2\n6 6\n"[..]);
    let human = HumanPlayer::new(input, Vec::new());
    let mut game = Match::new(human, own, AutomatedPlayer::new(), enemy);
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(game.run(&mut rng).unwrap(), Side::Human);
    assert_eq!(game.state(), MatchState::Won(Side::Human));

    let output = String::from_utf8(game.human().output().clone()).unwrap();
    let expected = format!(
        "{p}1 1: vessel sunk!\n\
         {p}Target is outside the board. Try again.\n\
         {p}That cell was already fired upon. Try again.\n\
         {p}6 6: vessel sunk!\n",
        p = PROMPT
    );
    assert_eq!(output, expected);
}
