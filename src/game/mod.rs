//=========================================================================
// Game Model
//=========================================================================
//
// Everything specific to Adventure Quest, independent of threads and
// windows.
//
//   session     lives + score carried between levels
//   level       level ids, definitions and the standard catalog
//   entities    player, collectibles, hazards
//   controller  the shared per-level gameplay loop
//   assets      asset keys and the preload manifest
//
//=========================================================================

pub mod assets;
pub mod controller;
pub mod entities;
pub mod level;
pub mod session;
