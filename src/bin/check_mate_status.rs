use std::env;
use std::process;

use chess_core::board::Position;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut position = Position::new();
    for text in args.iter().skip(1) {
        match position.parse_move(text) {
            Ok(mv) => position.make_move(mv),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }

    let legal_moves = position.legal_moves();
    let in_checkmate = position.is_checkmate();
    let in_stalemate = position.is_stalemate();
    println!(
        "side_to_move: {}",
        if position.white_to_move() { "white" } else { "black" }
    );
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", in_checkmate);
    println!("stalemate: {}", in_stalemate);
    for mv in legal_moves.iter() {
        println!("{}", mv);
    }
    println!("{position}");
}
