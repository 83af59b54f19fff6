use std::process::ExitCode;

fn main() -> ExitCode {
    grocer_cli::run()
}
