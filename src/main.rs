use quince::cli;

fn main() {
    if let Err(err) = cli::run_game_loop() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
