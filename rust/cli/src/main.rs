use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    onecard_cli::logging::init_logging();
    let code = onecard_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(u8::try_from(code).unwrap_or(2))
}
