//! Desktop client for the alphabet egg game.
//!
//! The game logic itself lives in `alphabet-core`; this crate adds the
//! pieces that touch the outside world: the word lookup client, the remote
//! image loader, the platform capabilities (speech, fullscreen, cache
//! clearing) and the scene controllers that tie them together. The runner
//! binary drives the scenes from a terminal; rendering is deliberately
//! plain, the scenes themselves do not know or care.

pub mod assets;
pub mod client;
pub mod platform;
pub mod scenes;
