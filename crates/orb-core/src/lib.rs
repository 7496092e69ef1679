//! Shield orb core
//!
//! Platform-free logic shared with the web frontend:
//! - `state` / `tick`: the orb simulation and its reveal state machine
//! - `input`: queued pointer input and spin accumulation
//! - `pick`: ray casting for clicks on the core
//! - `mesh`, `noise`: procedural geometry and the gas texture
//! - `terminal`: the hidden command overlay
//! - `page`: hero fade-in and project card tilt

pub mod config;
pub mod constants;
pub mod input;
pub mod mesh;
pub mod noise;
pub mod page;
pub mod pick;
pub mod state;
pub mod terminal;
pub mod tick;
pub mod tween;

pub use config::*;
pub use constants::*;
pub use input::*;
pub use mesh::*;
pub use noise::*;
pub use page::*;
pub use pick::*;
pub use state::*;
pub use terminal::*;
pub use tick::*;
pub use tween::*;
