#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use sea_battle::{prelude::*, InputError, DEFAULT_BOARD_SIZE, FLEET_SIZE};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length")]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Let the computer play your side as well")]
    autopilot: bool,
    #[arg(long, help = "Show the computer's vessels")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let level = sea_battle::init_logging();
    let cli = Cli::parse();
    log::debug!("logging at {}, board size {}", level, cli.size);
    let config = GameConfig {
        board_size: cli.size,
        seed: cli.seed,
        ..GameConfig::default()
    };
    config.validate()?;
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = config.rng();

    let generator = FleetGenerator::standard();
    let human_board =
        generator.generate_board(&mut rng, config.board_size, config.max_board_restarts)?;
    let mut automated_board =
        generator.generate_board(&mut rng, config.board_size, config.max_board_restarts)?;
    automated_board.set_hidden(!cli.reveal);

    let human: Box<dyn Player> = if cli.autopilot {
        Box::new(AutomatedPlayer::new())
    } else {
        Box::new(ConsolePlayer::console())
    };
    let mut game = Match::new(human, human_board, AutomatedPlayer::new(), automated_board);

    print_greeting(config.board_size);
    let winner = loop {
        print_boards(&game);
        match game.state() {
            MatchState::AwaitingHumanMove => println!("Your turn!"),
            MatchState::AwaitingAutomatedMove => println!("Computer's turn!"),
            MatchState::Won(_) => {}
        }
        let turn = match game.play_turn(&mut rng) {
            Ok(turn) => turn,
            Err(e) if matches!(e.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
                println!("Input closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        if cli.autopilot {
            println!(
                "{} side fires at {}: {}",
                turn.side, turn.target, turn.outcome
            );
        }
        if let MatchState::Won(side) = turn.state {
            break side;
        }
    };

    print_boards(&game);
    println!("{}", "-".repeat(27));
    match winner {
        Side::Human => println!("You sank all {} enemy vessels. You win!", FLEET_SIZE),
        Side::Automated => println!("The computer sank your whole fleet. You lose."),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_greeting(size: usize) {
    println!("{}", "-".repeat(27));
    println!("         Sea battle");
    println!("{}", "-".repeat(27));
    println!("Enter shots as \"row col\", two numbers");
    println!("from 1 to {} separated by a space.", size);
    println!("A hit or a sinking earns another shot.");
    println!("Sink the whole enemy fleet to win.");
}

#[cfg(feature = "std")]
fn print_boards<H: Player, A: Player>(game: &Match<H, A>) {
    println!("{}", "-".repeat(27));
    println!("Your board:");
    println!("{}", game.board(Side::Human));
    println!("{}", "-".repeat(27));
    println!("Computer's board:");
    println!("{}", game.board(Side::Automated));
}
