//! Water Potability Pipeline - Main Entry Point

use assessor::{init_logging, parse_args, run, usage};
use std::process;
use tracing::info;

#[tokio::main]
async fn main() {
    init_logging();

    info!("=== Water Potability Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{}", usage());
            process::exit(1);
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
