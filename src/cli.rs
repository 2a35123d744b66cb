//! Command-line game loop: human against the engine.
//!
//! Reads a search depth, then alternates between the user's typed move and
//! the engine's reply until the search reports a terminal score. All the
//! chess lives in [`crate::board`]; this module only shuttles text.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Search, Side, Square, MATE_SCORE};

/// Run the interactive loop on stdin/stdout. Returns when the game ends or
/// input runs out.
pub fn run_game_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    println!(";------------------------------------------;");
    println!(";  quince - a fixed-depth chess engine     ;");
    println!(";------------------------------------------;");
    println!();
    println!("moves are typed as: e2e4");
    println!("promotions carry a suffix: g7g8q");
    println!("castling is a king move: e1g1");
    println!();
    print!("search depth (2-6 recommended): ");
    out.flush()?;

    let depth = loop {
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim().parse::<u32>() {
            Ok(d) if (1..=9).contains(&d) => break d,
            _ => {
                print!("enter a depth between 1 and 9: ");
                out.flush()?;
            }
        }
    };

    let mut board = Board::new();
    let mut side = Side::White;
    let mut en_passant: Option<Square> = None;

    println!("\n{board}\n");
    print!("your move: ");
    out.flush()?;

    while let Some(line) = lines.next() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let m = match board.parse_move(side, en_passant, text) {
            Ok(m) => m,
            Err(err) => {
                println!("illegal move ({err})");
                print!("your move: ");
                out.flush()?;
                continue;
            }
        };
        board.apply_move(side, &m);
        side = side.opponent();
        en_passant = m.skip_square;
        println!("\n{board}\n");

        let engine = side;
        let mut search = Search::new(&mut board);
        let score = search.search(engine, en_passant, -MATE_SCORE, MATE_SCORE, depth);
        let reply = search.best_move;
        #[cfg(feature = "logging")]
        log::debug!(
            "searched depth {depth}: score {score}, {} nodes",
            search.nodes
        );
        println!("score: {score}");

        let Some(reply) = reply else {
            // no moves at all for the engine: nothing left to play
            println!("{engine} has no moves");
            break;
        };
        board.apply_move(engine, &reply);
        side = engine.opponent();
        en_passant = reply.skip_square;
        println!("\n{board}\n");

        if score == MATE_SCORE || score == -MATE_SCORE {
            let loser = if score == MATE_SCORE {
                engine.opponent()
            } else {
                engine
            };
            println!("{loser} is checkmated!");
            break;
        }

        print!("your move: ");
        out.flush()?;
    }

    Ok(())
}
