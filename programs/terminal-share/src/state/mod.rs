// programs/terminal-share/src/state/mod.rs
pub mod platform_config;
pub mod platform_state;
pub mod profile;
pub mod terminal;
pub mod tier;

pub use platform_config::*;
pub use platform_state::*;
pub use profile::*;
pub use terminal::*;
pub use tier::*;
