use std::{env, process};

use expense_tracker::{
    cli::run_cli,
    config::{Launch, TrackerConfig},
    init,
};

fn main() {
    init();

    match TrackerConfig::from_args(env::args().skip(1)) {
        Ok(Launch::Run(config)) => {
            if let Err(err) = run_cli(config) {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
        Ok(Launch::Help) => print_usage(),
        Ok(Launch::Version) => println!("expense_tracker {}", env!("CARGO_PKG_VERSION")),
        Err(err) => {
            eprintln!("Error: {err}");
            print_usage();
            process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: expense_tracker [--file <path>]\n\
         Options:\n  \
         -f, --file <path>  expense data file (default: expenses.json)\n  \
         -h, --help         show this help\n  \
         -V, --version      show version"
    );
}
