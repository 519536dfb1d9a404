use std::process::ExitCode;

fn main() -> ExitCode {
    chess_explorer::cli::run()
}
