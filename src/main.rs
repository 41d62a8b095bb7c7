//! # minihttp - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging y corre el servidor.

use minihttp::config::Config;
use minihttp::logger;
use minihttp::server::Server;
use minihttp::ServerError;

fn run(config: Config) -> Result<(), ServerError> {
    logger::init_logger(config.log_level)?;
    config.print_summary();

    let server = Server::bind(config)?;
    server.run()
}

fn main() {
    let config = Config::new();

    if let Err(e) = run(config) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
