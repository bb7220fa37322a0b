use clap::Parser;
use colored::Colorize;
use reekrun_core::cli::{self, Cli};
use reekrun_core::exit::ReekrunExit;
use reekrun_core::logging::{self, Verbosity};

fn main() -> ReekrunExit {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(ReekrunExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            ReekrunExit::Error
        }
    }
}
