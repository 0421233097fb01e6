use std::path::Path;

use board_moves::chess::movegen::generate_moves;
use board_moves::chess::piece::{PieceKind, Team};
use board_moves::core::square::Square;
use board_moves::setup::BoardSetup;
use board_moves::setups;

fn usage() -> ! {
    eprintln!(
        "Usage: moves <setup | path.json> [--team white|black]\n\nAvailable setups:\n  - {}",
        setups::names().join("\n  - ")
    );
    std::process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let source = &args[1];
    let mut team: Option<Team> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--team" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--team requires white or black");
                    std::process::exit(2);
                };
                team = match v.as_str() {
                    "white" => Some(Team::White),
                    "black" => Some(Team::Black),
                    x => {
                        eprintln!("invalid --team {x}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let setup = match setups::by_name(source) {
        Some(s) => s,
        None if source.ends_with(".json") => match BoardSetup::load(Path::new(source)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to load setup {source}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("Unknown setup: {source}");
            usage();
        }
    };

    let (board, ids) = match setup.build() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Invalid setup {source}: {e}");
            std::process::exit(2);
        }
    };

    println!("{}x{} board, {} pieces", board.width(), board.height(), board.len());
    print!("{board}");

    for (id, placed) in ids.iter().zip(&setup.pieces) {
        if team.is_some_and(|t| t != placed.team) {
            continue;
        }
        if placed.kind == PieceKind::Pawn {
            println!("  {} at {}: (no pawn moves)", placed.piece(), placed.square);
            continue;
        }
        match generate_moves(&board, *id) {
            Ok(moves) => {
                let mut dests: Vec<Square> = moves.into_iter().collect();
                dests.sort_unstable();
                let list: Vec<String> = dests.iter().map(|s| s.to_string()).collect();
                println!(
                    "  {} at {}: {} moves [{}]",
                    placed.piece(),
                    placed.square,
                    list.len(),
                    list.join(" ")
                );
            }
            Err(e) => {
                eprintln!("Move generation failed for {}: {e}", placed.piece());
                std::process::exit(1);
            }
        }
    }
}
