use std::env;
use std::process::ExitCode;

use alphabeta_chess::board::{Board, BoardError, Color};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <fen-placement> [w|b]");
        return ExitCode::from(2);
    }

    let board = match Board::try_from_fen(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    let side = match args.get(2).map(String::as_str) {
        None => Color::White,
        Some(tag) => match Color::from_tag(tag) {
            Some(color) => color,
            None => {
                eprintln!("side must be 'w' or 'b', got '{tag}'");
                return ExitCode::from(2);
            }
        },
    };

    match report(&board, side) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn report(board: &Board, side: Color) -> Result<(), BoardError> {
    let moves = board.generate_moves(side);
    println!("side: {side}");
    println!("moves: {}", moves.len());
    println!("check: {}", board.is_in_check(side)?);
    println!("checkmate: {}", board.is_checkmate(side)?);
    println!("stalemate: {}", board.is_stalemate(side)?);
    for mv in &moves {
        println!("{mv}");
    }
    Ok(())
}
