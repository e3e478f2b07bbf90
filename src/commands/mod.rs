pub mod classify;
pub mod completions;
pub mod config;
pub mod palette;
pub mod show;
pub mod traits;
