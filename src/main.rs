use std::process::ExitCode;

use clap::Parser;
use darkicon::cli::Cli;
use darkicon::config::StdinPrompt;
use darkicon::interrupt::{self, Interrupt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let printer = cli.printer();

    let interrupt = Interrupt::new();
    if let Err(e) = interrupt.install(printer.clone()) {
        printer.warning("Warning", &e.to_string());
    }

    match darkicon::cli::run(cli, &mut StdinPrompt, &printer, &interrupt) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_cancelled() => {
            interrupt::cancelled(&printer);
            ExitCode::SUCCESS
        }
        Err(e) => {
            printer.error("Error", "An unexpected error occurred");
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
