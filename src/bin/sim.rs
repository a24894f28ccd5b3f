//! Automated-versus-automated matches, one summary line per game.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{AutomatedPlayer, FleetGenerator, GameConfig, Match, Side};

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!(
            "Usage: {} <seed> [games]",
            args.first().map_or("sim", String::as_str)
        );
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let generator = FleetGenerator::standard();
    for index in 0..games {
        let config = GameConfig {
            seed: Some(seed.wrapping_add(index)),
            ..GameConfig::default()
        };
        let mut rng = config.rng();
        let first =
            generator.generate_board(&mut rng, config.board_size, config.max_board_restarts)?;
        let second =
            generator.generate_board(&mut rng, config.board_size, config.max_board_restarts)?;

        let mut game = Match::new(AutomatedPlayer::new(), first, AutomatedPlayer::new(), second);
        let winner = game.run(&mut rng)?;
        println!(
            "game {} seed {}: {} side wins after {} shots ({}/{} sunk)",
            index,
            seed.wrapping_add(index),
            winner,
            game.shots_fired(),
            game.board(Side::Human).sunk_count(),
            game.board(Side::Automated).sunk_count(),
        );
    }
    Ok(())
}
