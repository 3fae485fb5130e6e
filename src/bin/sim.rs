use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging(false);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut placement_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let p1 = AutomatedAgent::seeded(seed1).with_name("player1");
    let p2 = AutomatedAgent::seeded(seed2).with_name("player2");

    let mut game = Match::new(config.clone(), Box::new(p1), Box::new(p2), &mut placement_rng)?;
    let summary = game.play_out()?;

    let winner = match summary.winner {
        SideId::First => "player1",
        SideId::Second => "player2",
    };
    let result = json!({
        "config": config,
        "winner": winner,
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
