//! `setforge` binary.

use std::process::ExitCode;

use clap::Parser;

use setforge_cli::{logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = setforge_cli::run(&cli, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(code)
}
