//=========================================================================
// Adventure Quest - Library Root
//
// Core of a four-level 2D platformer: a static scene graph, one shared
// level loop parameterized per level, and a session (lives + score)
// carried between levels. Rendering, physics and audio belong to a
// pluggable `Host`.
//
// Responsibilities:
// - Expose the runtime facade (`EngineBuilder` / `Engine`)
// - Expose the game model (`game`) and the systems that drive it (`core`)
// - Keep the windowing layer (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use adventure_quest::EngineBuilder;
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     EngineBuilder::new().build()?.run()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the systems (input, scenes, host contract).
// `game` holds the gameplay model (session, levels, controller).
// `config` holds the gameplay tunables.
//
pub mod config;
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains winit integration and is not part of the public API.
// `engine` defines the main entry point and initialization logic.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
