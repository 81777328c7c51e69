use std::process::ExitCode;

fn main() -> ExitCode {
    rolodex_cli::run()
}
