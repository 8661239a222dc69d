//! Demo driver: drops randomly chosen tetrominoes onto a board until the
//! run length is reached or the stack tops out, then prints the result.
//!
//! The driver owns everything the board core leaves to its caller: piece
//! selection, drop placement, the commit/undo decision after each step, and
//! game-over detection (a column reaching the board height).

use anyhow::{anyhow, Result};

use quadwell::core::{Board, Piece, SimpleRng};
use quadwell::observe::BoardObservation;
use quadwell::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use quadwell::view::TextView;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DriveConfig {
    seed: u32,
    width: usize,
    height: usize,
    pieces: u32,
    json: bool,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            pieces: 50,
            json: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<DriveConfig> {
    let mut cfg = DriveConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                cfg.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--width" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --width"))?;
                cfg.width = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --width value: {}", v))?;
            }
            "--height" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --height"))?;
                cfg.height = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --height value: {}", v))?;
            }
            "--pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces"))?;
                cfg.pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --pieces value: {}", v))?;
            }
            "--json" => {
                cfg.json = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    if cfg.width < 4 {
        return Err(anyhow!("--width must be at least 4 to fit every tetromino"));
    }
    if cfg.height == 0 {
        return Err(anyhow!("--height must be positive"));
    }
    Ok(cfg)
}

fn run(cfg: &DriveConfig) -> Result<()> {
    let mut board = Board::new(cfg.width, cfg.height);
    let mut rng = SimpleRng::new(cfg.seed);
    let mut placed = 0u32;
    let mut rows_cleared = 0usize;
    let mut topped_out = false;

    for _ in 0..cfg.pieces {
        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let piece = Piece::tetromino(kind);
        let max_x = (cfg.width - piece.width()) as u32;
        let x = rng.next_range(max_x + 1) as i32;
        let y = board.drop_height(&piece, x) as i32;

        match board.place(&piece, x, y) {
            Ok(outcome) => {
                placed += 1;
                if outcome.row_filled() {
                    rows_cleared += board.clear_rows();
                }
                board.commit();
            }
            Err(err) => {
                // The failed write may have left stray cells behind.
                board.undo();
                eprintln!("piece {} rejected ({}), stack topped out", kind.as_str(), err.code());
                topped_out = true;
            }
        }

        if board.max_height() >= cfg.height {
            topped_out = true;
        }
        if cfg.json {
            println!("{}", serde_json::to_string(&BoardObservation::capture(&board))?);
        }
        if topped_out {
            break;
        }
    }

    if !cfg.json {
        println!("{}", TextView::default().render(&board));
        println!(
            "seed {}: placed {} pieces, cleared {} rows{}",
            cfg.seed,
            placed,
            rows_cleared,
            if topped_out { ", topped out" } else { "" }
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = parse_args(&args)?;
    run(&cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_defaults() {
        let cfg = parse_args(&[]).unwrap();
        assert_eq!(cfg, DriveConfig::default());
    }

    #[test]
    fn parse_args_reads_flags() {
        let args: Vec<String> = ["--seed", "9", "--width", "6", "--height", "12", "--json"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let cfg = parse_args(&args).unwrap();
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.width, 6);
        assert_eq!(cfg.height, 12);
        assert!(cfg.json);
    }

    #[test]
    fn parse_args_rejects_narrow_board() {
        let args: Vec<String> = ["--width", "3"].iter().map(|s| s.to_string()).collect();
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn parse_args_rejects_unknown_flag() {
        let args: Vec<String> = ["--frobnicate"].iter().map(|s| s.to_string()).collect();
        assert!(parse_args(&args).is_err());
    }
}
