use std::env;
use std::io;
use std::process::ExitCode;

use alphabeta_chess::game::{Game, GameOptions, USAGE};
use alphabeta_chess::Color;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let options = match GameOptions::from_args(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut white = options.player(Color::White);
    let mut black = options.player(Color::Black);
    let mut game = Game::new(io::stdout()).with_max_plies(options.max_plies);

    match game.play(white.as_mut(), black.as_mut()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
