//=========================================================================
// Adventure Quest - Binary Entry Point
//
// Initializes logging and runs the game with the default configuration
// and the headless host.
//
// Log level is controlled through `RUST_LOG`, e.g.
//   RUST_LOG=scene=debug,level=info adventure-quest
//
//=========================================================================

use std::process::ExitCode;

use adventure_quest::EngineBuilder;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = match EngineBuilder::new().build() {
        Ok(engine) => engine,
        Err(e) => {
            error!("Invalid level catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match engine.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Engine stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
