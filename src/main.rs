//! Terminal front-end: a hot-seat game for two humans plus a few inspection commands.
//!
//! - `backgammon play` - play a game, both sides entering moves on stdin
//! - `backgammon moves --dice 6 5` - list legal moves from the starting position
//! - `backgammon survey` - legal move counts for every roll from the starting position

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use backgammon::{
    backgammon::{Board, Color, Dice, Game, GameOutcome, Player},
    config::GameConfig,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

#[derive(Parser)]
#[command(name = "backgammon", version, about = "Two player backgammon in the terminal")]
struct Cli {
    /// Maximum level of log output written to stderr
    #[arg(long, default_value_t = Level::WARN, global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, both sides at this terminal
    Play {
        #[arg(long, default_value = "White")]
        white: String,
        #[arg(long, default_value = "Black")]
        black: String,
        /// Side that rolls first
        #[arg(long, value_enum, default_value_t = Side::White)]
        first: Side,
        /// Seed for reproducible dice
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the legal moves from the starting position for one roll
    Moves {
        #[arg(long, num_args = 2, required = true, value_parser = clap::value_parser!(u8).range(1..=6))]
        dice: Vec<u8>,
        #[arg(long, value_enum, default_value_t = Side::White)]
        color: Side,
    },
    /// Count the legal moves from the starting position for every roll
    Survey {
        #[arg(long, value_enum, default_value_t = Side::White)]
        color: Side,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Play { white, black, first, seed }) => {
            let mut config = GameConfig::default().with_names(white, black).with_first(first.into());
            config.seed = seed;
            play(&config)
        }
        Some(Commands::Moves { dice, color }) => {
            let [a, b] = dice[..] else {
                bail!("expected exactly two dice, got {}", dice.len());
            };
            let dice = Dice::try_new(a, b).context("die values must be in 1..=6")?;
            print_moves(color.into(), dice);
            Ok(())
        }
        Some(Commands::Survey { color }) => {
            print_survey(color.into());
            Ok(())
        }
        None => play(&GameConfig::default()),
    }
}

fn play(config: &GameConfig) -> Result<()> {
    let mut game = Game::new(config);
    let mut lines = io::stdin().lock().lines();

    loop {
        if let GameOutcome::Win(color) = game.outcome() {
            println!("\n{}\n{} wins!", game.board(), config.name(color));
            return Ok(());
        }

        let dice = game.roll()?;
        let color = game.active_player().color();
        println!("\n{}", game.board());
        println!("{} ({color}) rolled {dice}", config.name(color));

        while game.dice().is_some() {
            let moves = game.legal_moves();
            if moves.is_empty() {
                println!("No legal moves.");
                game.pass()?;
                break;
            }
            for (i, mv) in moves.iter().enumerate() {
                println!("  {:>2}) {mv}", i + 1);
            }
            print!("choose a move (q to quit): ");
            io::stdout().flush().context("failed to flush stdout")?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line.context("failed to read from stdin")?;
            match line.trim() {
                "q" => return Ok(()),
                choice => match choice.parse::<usize>() {
                    Ok(n) if (1..=moves.len()).contains(&n) => {
                        if let Some(point) = game.play(moves[n - 1])? {
                            println!("hit on {}", point + 1);
                        }
                    }
                    _ => println!("enter a number between 1 and {}", moves.len()),
                },
            }
        }
    }
}

fn print_moves(color: Color, dice: Dice) {
    let board = Board::new();
    let player = Player::new(color.to_string(), color);
    println!("{board}");
    println!("{color} rolled {dice}:");
    for mv in player.legal_moves(&board, &dice) {
        println!("  {mv}");
    }
}

fn print_survey(color: Color) {
    let board = Board::new();
    let player = Player::new(color.to_string(), color);
    for (dice, moves) in player.survey(&board) {
        println!("{dice}: {} moves", moves.len());
    }
    println!("chance to move: {:.1}%", player.chance_to_move(&board) * 100.0);
}
