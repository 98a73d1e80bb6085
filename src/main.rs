mod cli;
mod contact_manager;
mod error;
mod handlers;
mod reporting;

use std::io;
use std::path::PathBuf;

#[derive(clap::Parser)]
struct Config {
    #[arg(long, required = false, help = "path to file where logs will be saved")]
    log_file: Option<PathBuf>,
    #[arg(long, required = false, default_value = "info", help = "Available levels: debug, info, error")]
    log_level: String
}

fn main() {
    let config = <Config as clap::Parser>::parse();

    match reporting::logger::Logger::create(config.log_file, &config.log_level) {
        Ok(mut logger) => {
            let mut book = contact_manager::AddressBook::new();
            let stdin = io::stdin();
            if let Err(e) = cli::run(stdin.lock(), &mut io::stdout(), &mut book, &mut logger) {
                println!("Console session failed: {}", e);
            }
        }
        Err(e) => { println!("Could not create a logger: {}", e) }
    }
}
