//! Neutron 終端機對局

mod interactive;
mod notation;

use anyhow::{Context, Result};
use clap::Parser;
use interactive::InteractiveStrategy;
use neutron::core_types::Color;
use neutron::loader_schema::{FirstMover, GameConfig};
use neutron::logic::game::{Game, Phase, Player};
use neutron::logic::strategy::{Side, StrategyKind};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USER_GUIDE: &str = "\
User Guide

The game presents a 5x5 grid. The top and bottom rows are the home rows of
the two players: black starts on row A, white on row E.

On your turn you first push the neutron (except in the very first round),
then move one of your soldiers. Enter a position as the row letter followed
by the column number, e.g. A1, and a direction as a compass word such as
'north' or 'southwest' (or n, sw, ...). Invalid input is asked again.
Type 'exit' at any prompt to leave the game.

Pieces slide as far as they can. Whoever gets the neutron onto their own
home row, or leaves it with no empty neighbor, wins the game.";

/// 命令列參數，有指定的項目會覆蓋設定檔
#[derive(Debug, Parser)]
#[command(name = "neutron", version, about = "Play Neutron against the computer", long_about = USER_GUIDE)]
struct Args {
    /// Color of the human player's soldiers: black or white [default: black]
    #[arg(short, long)]
    color: Option<Color>,

    /// Who starts the game: human or computer [default: human]
    #[arg(short, long)]
    first: Option<FirstMover>,

    /// Computer player type: random or strategy [default: strategy]
    #[arg(short, long)]
    player_type: Option<StrategyKind>,

    /// Seed for the computer players
    #[arg(long)]
    seed: Option<u64>,

    /// TOML game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let the computer play both sides
    #[arg(long)]
    auto: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let board = config.build_board().context("invalid starting board")?;
    let (first, second) = build_players(&config);
    let mut game = Game::new(board, first, second);

    let winner = loop {
        println!("{}", game.board());
        match game.step() {
            Ok(Phase::Finished(winner)) => break winner,
            Ok(_) => {}
            Err(e) if e.is_exit() => {
                info!("player left the game");
                return Ok(());
            }
            Err(e) => return Err(e).context("game aborted"),
        }
    };

    println!("{}", game.board());
    println!("{} player won the game!", color_name(winner));
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// 讀取設定檔（若有），再套用命令列覆蓋
fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GameConfig::from_toml_str(&text)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(color) = args.color {
        config.human_color = color;
    }
    if let Some(first) = args.first {
        config.first = first;
    }
    if let Some(player_type) = args.player_type {
        config.player_type = player_type;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.computer_vs_computer |= args.auto;
    Ok(config)
}

/// 依先後手順序建立兩位玩家
fn build_players(config: &GameConfig) -> (Player, Player) {
    let computer = Player::new(
        Side::for_color(config.computer_color()),
        config.player_type.build(config.seed),
    );
    let human_side = Side::for_color(config.human_color);
    let human = if config.computer_vs_computer {
        let seed = config.seed.map(|seed| seed.wrapping_add(1));
        Player::new(human_side, config.player_type.build(seed))
    } else {
        println!("You control {} soldiers", config.human_color);
        let strategy = InteractiveStrategy::new(io::stdin().lock(), io::stdout());
        Player::new(human_side, Box::new(strategy))
    };
    info!(human = ?human.side, computer = ?computer.side, first = %config.first, "players ready");

    match config.first {
        FirstMover::Human => (human, computer),
        FirstMover::Computer => (computer, human),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
