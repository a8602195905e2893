use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = blobgen::cli::run(std::env::args_os(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code as u8)
}
