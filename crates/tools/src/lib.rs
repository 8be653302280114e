//! Shared plumbing for the dungeon command-line tools.

pub mod config;
pub mod logging;
pub mod render;
