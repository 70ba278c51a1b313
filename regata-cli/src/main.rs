//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = regata_cli::run() {
        eprintln!("regata: {err}");
        std::process::exit(1);
    }
}
