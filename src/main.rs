use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::prelude::*;
use seabattle::{AgentError, DEFAULT_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions to stderr (overridden by SEABATTLE_LOG).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this console.
    Play(GameArgs),
    /// Watch two computer players fight it out.
    Auto(GameArgs),
}

#[derive(Args, Clone)]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Vessel lengths, e.g. --fleet 3,2,2,1,1,1,1
    #[arg(long, value_delimiter = ',')]
    fleet: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Pause before each computer move, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig::with_size(self.size);
        if !self.fleet.is_empty() {
            config.fleet = self.fleet.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play(&args),
        Commands::Auto(args) => auto(&args),
    }
}

fn play(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    let mut rng = args.rng();
    loop {
        greet(&config);
        let winner = {
            let computer = AutomatedAgent::new(SmallRng::from_rng(&mut rng));
            let mut game = Match::new(
                config.clone(),
                Box::new(HumanAgent::stdio()),
                Box::new(computer),
                &mut rng,
            )?;
            run_interactive(&mut game, args.delay())?
        };
        match winner {
            Some(SideId::First) => banner("You win!"),
            Some(SideId::Second) => banner("The computer wins!"),
            None => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
        }
        if !ask_replay()? {
            banner("Bye!");
            return Ok(());
        }
    }
}

/// Drive one match on the console. Returns `None` if stdin closed mid-game.
fn run_interactive(game: &mut Match, delay: Duration) -> anyhow::Result<Option<SideId>> {
    loop {
        let side = game.active_side();
        // On the human's turn the agent redraws the computer's board before every shot.
        match side {
            SideId::First => print_own_board(game),
            SideId::Second => print_boards(game),
        }
        println!("{}", "-".repeat(20));
        match side {
            SideId::First => println!("Your turn! Enter row and column, e.g. 2 5"),
            SideId::Second => {
                println!("The computer is shooting!");
                thread::sleep(delay);
            }
        }

        let status = match game.run_turn_cycle() {
            Ok(status) => status,
            Err(AgentError::InputClosed) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if side == SideId::Second {
            for shot in game.grid(SideId::First).recent_shots() {
                println!("Computer's move: {} -> {:?}", shot.target, shot.result);
                thread::sleep(delay / 2);
            }
        }

        if let MatchStatus::Finished { winner } = status {
            print_boards(game);
            return Ok(Some(winner));
        }
    }
}

fn auto(args: &GameArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    let mut rng = args.rng();
    let first = AutomatedAgent::new(SmallRng::from_rng(&mut rng)).with_name("Computer 1");
    let second = AutomatedAgent::new(SmallRng::from_rng(&mut rng)).with_name("Computer 2");
    let mut game = Match::new(config, Box::new(first), Box::new(second), &mut rng)?;

    while !game.is_finished() {
        let side = game.active_side();
        game.run_turn_cycle()?;
        let grid = game.grid(side.opponent());
        for shot in grid.recent_shots() {
            println!("{}: {} -> {:?}", game.agent(side).name(), shot.target, shot.result);
        }
        println!("{}\n", grid.render(true));
        thread::sleep(args.delay());
    }

    if let Some(summary) = game.summary() {
        banner(&format!(
            "{} wins after {} turn cycles!",
            game.agent(summary.winner).name(),
            summary.turn_cycles
        ));
    }
    Ok(())
}

fn print_boards(game: &Match) {
    print_own_board(game);
    println!("{}", "-".repeat(20));
    println!("Computer's board:");
    println!("{}", game.grid(SideId::Second));
}

fn print_own_board(game: &Match) {
    println!("{}", "-".repeat(20));
    println!("Your board:");
    println!("{}", game.grid(SideId::First));
}

fn greet(config: &GameConfig) {
    println!(
        r#"
 ============================================
 |            Welcome to Sea Battle!        |
 ============================================
 |                   RULES                  |
 |                                          |
 |  Your opponent is the computer. On your  |
 |  turn name a cell on the computer's      |
 |  hidden board. Hit a ship (X) and you    |
 |  shoot again. Sink the whole fleet       |
 |  first to win.                           |
 |                                          |
 |  Ships never touch, not even by corners. |
 |                                          |
 |  Input format: row column                |
 ============================================"#
    );
    println!(
        "Board {}x{}, fleet {:?}\n",
        config.size, config.size, config.fleet
    );
}

fn banner(text: &str) {
    let bar = "=".repeat(text.len() + 4);
    println!("\n {}\n | {} |\n {}\n", bar, text, bar);
}

fn ask_replay() -> anyhow::Result<bool> {
    print!("Play again? y/n ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
