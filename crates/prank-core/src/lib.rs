//! Host-side logic of the birthday prank page.
//!
//! Nothing in this crate touches the browser. The web front-end owns the DOM,
//! the canvases and the `AudioContext`; it feeds user actions and the clock
//! into a [`Director`] and renders what comes back.

pub mod config;
pub mod constants;
pub mod director;
pub mod glitch;
pub mod particles;
pub mod schedule;
pub mod script;
pub mod sfx;
pub mod stage;

pub use config::*;
pub use director::*;
pub use glitch::*;
pub use particles::*;
pub use schedule::*;
pub use script::{SceneStep, Script, ScriptLine, TERMINAL_SCRIPT};
pub use sfx::{AudioGraphSpec, Sfx};
pub use stage::*;
