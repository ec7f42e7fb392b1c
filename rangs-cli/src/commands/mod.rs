//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cell`] - Decode a single grid cell
//! - [`config`] - Configuration management (path, show, init)
//! - [`render`] - Decode a view box, optionally to SVG

pub mod cell;
pub mod common;
pub mod config;
pub mod render;
