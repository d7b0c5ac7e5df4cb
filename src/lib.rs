//! Freehand sketching core for dinodraw.
//!
//! The library holds everything the binaries share: the drawable model and
//! its history, tool selection and the pointer-driven controller, TOML
//! configuration, PNG export and replay scripts.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::InputState;
