use std::process::ExitCode;

fn main() -> ExitCode {
    fragrance_cli::logging::init();
    fragrance_cli::run()
}
