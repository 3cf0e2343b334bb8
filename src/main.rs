//! Setting Sun
//!
//! Terminal front-end for the sliding-block engine: prints the board, lists
//! legal moves, plays scripted move sequences with undo, and counts the
//! configurations reachable from the start position.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use settingsun::search;
use settingsun::{Field, MoveRequest, ParseError};

/// Plays the Setting Sun sliding-block puzzle from the command line.
#[derive(Parser)]
#[command(name = "settingsun")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the start board.
    Show,
    /// List every legal move from the start board.
    Moves,
    /// Apply moves in order. Each step is `id:direction[:distance]` or `undo`.
    Play {
        #[arg(required = true)]
        steps: Vec<Step>,
    },
    /// Count configurations reachable from the start board.
    Explore {
        /// Stop after this many distinct configurations.
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// One token of a `play` script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Move(MoveRequest),
    Undo,
}

impl FromStr for Step {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("undo") {
            Ok(Step::Undo)
        } else {
            s.parse().map(Step::Move)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut field = Field::new();
    match cli.command {
        Some(Command::Show) => print!("{field}"),
        Some(Command::Moves) => print!("{}", format_moves(&field)),
        Some(Command::Play { steps }) => print!("{}", play(&mut field, &steps)),
        Some(Command::Explore { limit }) => run_explore(&field, limit),
        None => {
            // default: show the board and what can move
            print!("{field}");
            println!();
            print!("{}", format_moves(&field));
        }
    }
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Lists legal moves, one per line.
fn format_moves(field: &Field) -> String {
    let moves = field.legal_moves();
    let mut output = format!("{} legal moves:\n", moves.len());
    for request in moves {
        output.push_str(&format!("  {request}\n"));
    }
    output
}

/// Runs a script against `field`, reporting the board after every step.
///
/// Rejected moves are reported and skipped; the script keeps going.
fn play(field: &mut Field, steps: &[Step]) -> String {
    let mut output = String::new();

    for step in steps {
        let report = match step {
            Step::Move(request) => match field.apply(*request) {
                Ok(committed) => format!("> {request}: moved {committed}\n"),
                Err(err) => {
                    output.push_str(&format!("> {request}: rejected, {err}\n"));
                    continue;
                }
            },
            Step::Undo => match field.undo_move() {
                Some(undone) => format!("> undo: reverted {undone}\n"),
                None => {
                    output.push_str("> undo: nothing to undo\n");
                    continue;
                }
            },
        };
        output.push_str(&report);
        output.push_str(&format!("{field}moves: {}\n", field.move_count()));
    }

    output
}

/// Explores from the start board and prints a summary.
fn run_explore(field: &Field, limit: Option<usize>) {
    let exploration = search::reachable(field, limit);
    println!(
        "{} configurations reachable, deepest at {} steps",
        exploration.configurations, exploration.max_depth
    );
    if exploration.truncated {
        println!("(stopped at the limit; more configurations exist)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settingsun::{BlockId, Direction};

    #[test]
    fn test_parse_steps() {
        assert_eq!("undo".parse::<Step>().unwrap(), Step::Undo);
        assert_eq!("UNDO".parse::<Step>().unwrap(), Step::Undo);
        assert_eq!(
            "0:down".parse::<Step>().unwrap(),
            Step::Move(MoveRequest {
                block: BlockId(0),
                direction: Direction::Down,
                distance: 1,
            })
        );
        assert!("redo".parse::<Step>().is_err());
    }

    #[test]
    fn test_cli_parses_play_script() {
        let cli = Cli::try_parse_from(["settingsun", "-vv", "play", "3:l", "undo"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Play { steps }) => assert_eq!(steps.len(), 2),
            _ => panic!("expected play"),
        }

        assert!(Cli::try_parse_from(["settingsun", "play", "3:sideways"]).is_err());
    }

    #[test]
    fn test_format_moves() {
        insta::assert_snapshot!(format_moves(&Field::new()), @r"
        6 legal moves:
          0:down:1
          1:down:1
          3:left:1
          3:right:1
          4:up:1
          5:up:1
        ");
    }

    #[test]
    fn test_play_script() {
        let steps: Vec<Step> = ["3:left", "2:down", "undo", "undo"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut field = Field::new();

        insta::assert_snapshot!(play(&mut field, &steps), @r"
        > 3:left:1: moved #3 left x1
        0221
        0221
        33..
        4685
        4795
        moves: 1
        > 2:down:1: rejected, step 1 moves block #2 into block #3
        > undo: reverted #3 left x1
        0221
        0221
        .33.
        4685
        4795
        moves: 0
        > undo: nothing to undo
        ");
        assert_eq!(field.move_count(), 0);
    }

    #[test]
    fn test_play_rejects_unreachable_distance() {
        let steps = ["0:down:4294967295".parse::<Step>().unwrap()];
        let mut field = Field::new();

        insta::assert_snapshot!(play(&mut field, &steps), @"> 0:down:4294967295: rejected, step 2 moves block #0 into block #4");
        assert_eq!(field.positions(), Field::new().positions());
    }
}
