use std::process::ExitCode;

fn main() -> ExitCode {
    sqlstrip::app::startup::run()
}
