//! Scene controllers.
//!
//! Each scene is an explicit state holder plus transition methods; the
//! runner owns the scene for as long as it is on screen and drops it on
//! teardown, which also drops its timers and its session image cache.

pub mod game;
pub mod menu;
pub mod practice;

pub use game::{EggTap, GameScene, Notice, WordPopup};
pub use menu::MenuChoice;
pub use practice::{ActiveRound, PracticeScene};
