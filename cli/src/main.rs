use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use demine_core::{Board, GameConfig, GameState, RandomLayoutGenerator};

use render::render_board;

mod render;

#[derive(Parser)]
#[command(name = "demine", about = "Console mine-detection puzzle")]
struct Cli {
    /// Board preset; prompts interactively when omitted
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for reproducible mine placement
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Difficulty {
    Easy,
    Intermediate,
    Advanced,
}

impl Difficulty {
    fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::EASY,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Advanced => GameConfig::ADVANCED,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    Reveal,
    Flag,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the Minesweeper Game!!");
    let difficulty = match cli.difficulty {
        Some(difficulty) => difficulty,
        None => prompt_difficulty(&mut lines)?,
    };
    let generator = match cli.seed {
        Some(seed) => RandomLayoutGenerator::new(seed),
        None => RandomLayoutGenerator::from_entropy(),
    };
    let mut board = Board::new(difficulty.config(), generator)?;
    println!("Total Mines: {}", board.total_mines());

    while !board.is_finished() {
        println!("{}", render_board(&board));
        print!("Enter row, column and action (L = reveal, R = flag): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed, quit silently
            return Ok(());
        };
        let Some((coords, action)) = parse_turn(&line?) else {
            eprintln!("error: expected `<row> <col> <L|R>`");
            continue;
        };

        match action {
            Action::Reveal => {
                // The engine never checks mine content itself; the mine
                // check happens here, before the reveal.
                if board.is_mine(coords) {
                    board.reveal(coords);
                    board.record_loss();
                } else {
                    let outcome = board.reveal(coords);
                    log::debug!("reveal at {:?}: {:?}", coords, outcome);
                }
            }
            Action::Flag => {
                let outcome = board.toggle_flag(coords);
                log::debug!("flag at {:?}: {:?}", coords, outcome);
            }
        }
    }

    println!("{}", render_board(&board));
    match board.state() {
        GameState::Won => println!("Congratulations! You won!"),
        GameState::Lost => println!("Game Over! You have hit a mine."),
        GameState::InProgress => unreachable!("loop exits only on a finished game"),
    }
    Ok(())
}

fn prompt_difficulty(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Difficulty> {
    print!("Enter the difficulty level (1 for easy, 2 for intermediate, 3 for advanced): ");
    io::stdout().flush()?;

    let choice = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    Ok(match choice.trim() {
        "1" => Difficulty::Easy,
        "2" => Difficulty::Intermediate,
        "3" => Difficulty::Advanced,
        other => {
            if !other.is_empty() {
                eprintln!("error: unknown difficulty {other:?}, using easy");
            }
            Difficulty::Easy
        }
    })
}

/// Parses one turn line of the form `<row> <col> <L|R>`.
fn parse_turn(line: &str) -> Option<((u8, u8), Action)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let action = match parts.next()? {
        "L" | "l" => Action::Reveal,
        "R" | "r" => Action::Flag,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(((row, col), action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_lines_parse() {
        assert_eq!(parse_turn("3 4 L"), Some(((3, 4), Action::Reveal)));
        assert_eq!(parse_turn(" 0  9  r "), Some(((0, 9), Action::Flag)));
    }

    #[test]
    fn malformed_turn_lines_are_rejected() {
        assert_eq!(parse_turn(""), None);
        assert_eq!(parse_turn("1 2"), None);
        assert_eq!(parse_turn("1 2 X"), None);
        assert_eq!(parse_turn("a b L"), None);
        assert_eq!(parse_turn("1 2 L trailing"), None);
        assert_eq!(parse_turn("-1 2 L"), None);
    }

    #[test]
    fn presets_match_the_difficulty_table() {
        assert_eq!(Difficulty::Easy.config(), GameConfig::new_unchecked(10, 10, 10));
        assert_eq!(
            Difficulty::Intermediate.config(),
            GameConfig::new_unchecked(20, 20, 40)
        );
        assert_eq!(
            Difficulty::Advanced.config(),
            GameConfig::new_unchecked(30, 30, 99)
        );
    }
}
