use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use chess_rules_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules_core::move_generation::perft::{perft, perft_divide};
use chess_rules_core::utils::render_game_state::render_game_state;
use chess_rules_core::GameState;

#[derive(Parser)]
#[command(name = "chess_rules_core")]
#[command(about = "Play or inspect chess positions from the terminal")]
struct Args {
    /// FEN of the starting position (default: standard start)
    #[arg(short, long)]
    fen: Option<String>,

    /// Coordinate moves to play before the prompt, e.g. "e2e4 e7e5"
    #[arg(short, long)]
    moves: Option<String>,

    /// Print perft counts to this depth and exit
    #[arg(short, long)]
    perft: Option<u8>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let fen = args.fen.as_deref().unwrap_or(STARTING_POSITION_FEN);
    let mut game = GameState::from_fen(fen).with_context(|| format!("cannot load FEN {fen:?}"))?;
    info!("loaded position {}", game.fen());

    if let Some(moves) = &args.moves {
        for text in moves.split_whitespace() {
            game.play_coordinate_move(text)
                .with_context(|| format!("cannot play {text}"))?;
        }
    }

    if let Some(depth) = args.perft {
        if depth == 0 {
            bail!("--perft depth must be >= 1");
        }
        info!("running perft to depth {depth}");
        run_perft(&game, depth);
        return Ok(());
    }

    run_interactive(&mut game)
}

fn run_perft(game: &GameState, depth: u8) {
    let mut position = game.position().clone();
    for (mv, nodes) in perft_divide(&mut position, depth) {
        println!("{mv}: {nodes}");
    }
    let counts = perft(&mut position, depth);
    println!();
    println!("nodes       {}", counts.nodes);
    println!("captures    {}", counts.captures);
    println!("en passant  {}", counts.en_passant);
    println!("castles     {}", counts.castles);
    println!("promotions  {}", counts.promotions);
    println!("checks      {}", counts.checks);
    println!("double      {}", counts.double_checks);
    println!("checkmates  {}", counts.checkmates);
}

fn run_interactive(game: &mut GameState) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    show_board(game);

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = line.trim();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "undo" => {
                game.undo_move();
                show_board(game);
            }
            "board" => show_board(game),
            "fen" => println!("{}", game.fen()),
            "moves" => {
                let moves: Vec<String> =
                    game.legal_moves().iter().map(|mv| mv.to_string()).collect();
                println!("{}", moves.join(" "));
            }
            text => match game.play_coordinate_move(text) {
                Ok(_) => show_board(game),
                Err(err) => println!("{err}"),
            },
        }

        stdout.flush().ok();
    }

    Ok(())
}

fn show_board(game: &mut GameState) {
    println!("{}", render_game_state(game.position()));

    // Refreshes the terminal flags for the position on screen.
    game.legal_moves();
    if game.is_checkmate() {
        println!("Checkmate: {:?} wins", game.side_to_move().opposite());
    } else if game.is_stalemate() {
        println!("Stalemate");
    } else {
        let check = if game.in_check() { " (check)" } else { "" };
        println!("{:?} to move{check}", game.side_to_move());
    }
}
